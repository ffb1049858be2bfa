//! Panelkit - bitmap instrument panels.
//!
//! This crate contains:
//! - Atlas loading (sprite sheets sliced by a text descriptor, selected by tag)
//! - Box layout (nested horizontal/vertical groups with alignment and margins)
//! - Nine-slice decorations framing laid-out items
//! - Bitmap controls (displays, switches, scroll wheels)
//!
//! # Usage
//!
//! ```ignore
//! use panelkit::{AtlasLoader, DecorationCache, Layout, PanelConfig, Theme};
//!
//! let config = PanelConfig::default().with_env();
//! let loader = AtlasLoader::from_config(&config);
//! let cache = DecorationCache::new(Theme::load(&config, &loader));
//! let digits = loader.collect("digits.png", &["digit"])?;
//!
//! let mut layout = Layout::new(&cache);
//! let root = layout.add_group(Direction::Horizontal, Size::ZERO);
//! // add items, place them, then:
//! layout.render(root).save_png("panel.png")?;
//! ```

// Core primitives
pub mod primitives;
pub mod surface;

// Resources
pub mod atlas;
pub mod config;
pub mod resources;
pub mod theme;

// Layout system
pub mod layout;

// Controls
pub mod controls;

mod error;

pub use atlas::{AtlasEntry, AtlasImage, AtlasLoader, Selection, load_atlas, parse_descriptor, select};
pub use config::PanelConfig;
pub use controls::{BitmapControl, Control, ControlEvent, LedSwitch, RadioGroup, Switch, Wheel};
pub use error::AtlasError;
pub use layout::{Align, DecorationCache, Direction, GroupId, ItemId, Layout, LayoutItem, Spacer};
pub use primitives::{Color, Insets, Point, Rect, Size};
pub use resources::ResourcePaths;
pub use surface::{ImageHandle, Surface};
pub use theme::Theme;
