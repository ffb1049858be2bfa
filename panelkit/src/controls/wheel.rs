//! Scroll-wheel selector.
//!
//! Holds `n` normal images followed by an optional `n` hover images. The
//! status indexes the combined list, so `status >= n` means hovered and
//! `status % n` is the value.

use super::{BitmapControl, ControlEvent};
use crate::error::AtlasError;
use crate::layout::LayoutItem;
use crate::primitives::{Point, Size};
use crate::surface::ImageHandle;

#[derive(Debug, Clone)]
pub struct Wheel {
    bitmap: BitmapControl,
    n: usize,
    hover: bool,
    /// Step applied per scroll notch: `+1` forward, `-1` inverted.
    rotation: i32,
    /// Status before the last scroll, restored by [`Wheel::reset`].
    saved: usize,
    overflow: i32,
}

impl Wheel {
    /// `hover` may be empty. A hover set whose length differs from `normal`
    /// is ignored.
    pub fn new(normal: Vec<ImageHandle>, hover: Vec<ImageHandle>) -> Result<Self, AtlasError> {
        let n = normal.len();
        let has_hover = if hover.is_empty() {
            false
        } else if hover.len() == n {
            true
        } else {
            tracing::warn!(
                normal = n,
                hover = hover.len(),
                "hover images do not match, ignoring them"
            );
            false
        };
        let images = if has_hover {
            normal.into_iter().chain(hover).collect()
        } else {
            normal
        };
        Ok(Self {
            bitmap: BitmapControl::new(images)?,
            n,
            hover: has_hover,
            rotation: 1,
            saved: 0,
            overflow: 0,
        })
    }

    /// Number of distinct values.
    pub fn positions(&self) -> usize {
        self.n
    }

    pub fn is_hovered(&self) -> bool {
        self.bitmap.value() >= self.n
    }

    pub fn enter(&mut self) {
        let mut status = self.value();
        if self.hover {
            status += self.n;
        }
        self.bitmap.set_value(status);
    }

    pub fn leave(&mut self) {
        self.bitmap.set_value(self.value());
    }

    /// Step one position in the direction of `delta`, wrapping around.
    ///
    /// A zero `delta` does nothing and reports nothing.
    pub fn scroll(&mut self, delta: i32) -> Option<ControlEvent> {
        if delta == 0 {
            return None;
        }
        self.saved = self.bitmap.value();
        let step = if delta > 0 { self.rotation } else { -self.rotation };
        let n = self.n as i32;
        let target = self.value() as i32 + step;
        self.overflow = if target < 0 {
            -1
        } else if target > n - 1 {
            1
        } else {
            0
        };

        let mut status = target.rem_euclid(n) as usize;
        if self.hover {
            status += self.n;
        }
        self.bitmap.set_value(status);
        Some(ControlEvent::new(status).with_overflow(self.overflow))
    }

    /// `+1` for forward, `-1` to invert the wheel.
    pub fn set_rotation(&mut self, rotation: i32) {
        self.rotation = rotation;
    }

    /// Wrap-around of the last scroll.
    pub fn overflow(&self) -> i32 {
        self.overflow
    }

    pub fn value(&self) -> usize {
        self.bitmap.value() % self.n
    }

    /// Jump to `value`, keeping the hover state. Also becomes the reset point.
    pub fn set_value(&mut self, value: usize) {
        let mut status = value % self.n;
        if self.is_hovered() {
            status += self.n;
        }
        self.bitmap.set_value(status);
        self.saved = status;
    }

    /// Undo the last scroll.
    pub fn reset(&mut self) {
        self.bitmap.set_value(self.saved);
    }
}

impl LayoutItem for Wheel {
    fn size(&self) -> Size {
        self.bitmap.size()
    }

    fn position(&self) -> Point {
        self.bitmap.position()
    }

    fn set_position(&mut self, position: Point) {
        self.bitmap.set_position(position);
    }

    fn image(&self) -> Option<&ImageHandle> {
        self.bitmap.image()
    }
}
