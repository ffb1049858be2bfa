//! Box layout for bitmap panels.
//!
//! Items are arranged into groups that flow horizontally or vertically; each
//! placement carries a cross-axis alignment, margins and an optional named
//! decoration drawn as a nine-slice frame around the item.
//!
//! # Architecture
//!
//! ```text
//! place() -> walk to root -> set_position(root) -> children positioned top-down
//!                              size() <- min_size() <- children sizes bottom-up
//! ```
//!
//! Groups live in an arena owned by [`Layout`] and refer to their parent by
//! index. Every `place` re-lays-out the whole tree; trees are small and are
//! built once when the panel is constructed.

pub mod axis;
pub mod decoration;
pub mod group;

pub use axis::{Align, Direction};
pub use decoration::{Decoration, DecorationCache, nine_slice};
pub use group::{Group, GroupId, ItemId, Layout, Node, Placement};

use crate::primitives::{Point, Size};
use crate::surface::ImageHandle;

/// Anything a group can position.
pub trait LayoutItem {
    /// Current size in pixels.
    fn size(&self) -> Size;

    /// Current top-left corner, in panel coordinates.
    fn position(&self) -> Point;

    /// Move the item. Coordinates are absolute.
    fn set_position(&mut self, position: Point);

    /// Bitmap to paint at [`LayoutItem::position`], if the item is visible.
    fn image(&self) -> Option<&ImageHandle> {
        None
    }
}

/// An invisible item of fixed size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacer {
    size: Size,
    position: Point,
}

impl Spacer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            position: Point::ORIGIN,
        }
    }

    /// Change the size; the owning layout must be refreshed afterwards.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }
}

impl LayoutItem for Spacer {
    fn size(&self) -> Size {
        self.size
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for Box<T> {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn position(&self) -> Point {
        (**self).position()
    }

    fn set_position(&mut self, position: Point) {
        (**self).set_position(position);
    }

    fn image(&self) -> Option<&ImageHandle> {
        (**self).image()
    }
}
