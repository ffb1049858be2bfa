//! Panel theme: colors and decoration samples.

use crate::atlas::{AtlasImage, AtlasLoader, select};
use crate::config::PanelConfig;
use crate::primitives::{Color, Insets};
use crate::surface::ImageHandle;

#[derive(Debug, Clone)]
pub struct Theme {
    /// Fill behind everything, and behind decoration frames.
    pub background: Color,
    /// Label text color.
    pub text: Color,
    /// Insets applied to every themed decoration sample.
    pub decoration_insets: Insets,
    decorations: Vec<AtlasImage>,
}

impl Theme {
    pub const BACKGROUND: Color = Color::rgb(60, 60, 60);
    pub const TEXT: Color = Color::rgb(150, 150, 150);

    /// Colors and insets from `config`, without decoration samples.
    pub fn from_config(config: &PanelConfig) -> Self {
        Self {
            background: Color::from(config.background),
            text: Color::from(config.text),
            decoration_insets: Insets::from(config.decoration_insets),
            decorations: Vec::new(),
        }
    }

    /// Like [`Theme::from_config`], also loading the decoration sheet.
    ///
    /// A missing or unreadable sheet is logged and leaves the theme without
    /// samples; decorations then fall back to the built-in placeholder.
    pub fn load(config: &PanelConfig, loader: &AtlasLoader) -> Self {
        let theme = Self::from_config(config);
        let Some(sheet) = config.decoration_sheet.as_deref() else {
            return theme;
        };
        match loader.collect(sheet, &[]) {
            Ok(collection) => theme.with_decorations(collection.into_vec()),
            Err(e) => {
                tracing::warn!("Failed to load decoration sheet {}: {}", sheet, e);
                theme
            }
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_decoration_insets(mut self, insets: Insets) -> Self {
        self.decoration_insets = insets;
        self
    }

    pub fn with_decorations(mut self, decorations: Vec<AtlasImage>) -> Self {
        self.decorations = decorations;
        self
    }

    /// First decoration image tagged `name`.
    pub fn decoration_sample(&self, name: &str) -> Option<ImageHandle> {
        select(&self.decorations, &[name], None).into_iter().next()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Self::BACKGROUND,
            text: Self::TEXT,
            decoration_insets: Insets::all(3),
            decorations: Vec::new(),
        }
    }
}
