//! Bitmap controls.
//!
//! Every control shows one image out of a list, picked by its `status`.
//! Input arrives as plain method calls (`press`, `release`, `scroll`, ...);
//! a call that changes what the owner should know about returns a
//! [`ControlEvent`].

mod bitmap;
mod button;
mod wheel;

pub use bitmap::BitmapControl;
pub use button::{LedSwitch, RadioGroup, Switch};
pub use wheel::Wheel;

use crate::layout::{LayoutItem, Spacer};
use crate::primitives::{Point, Size};
use crate::surface::ImageHandle;

/// State change reported by a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlEvent {
    /// Raw status after the change, including hover/pressed bits.
    pub status: usize,
    /// Wrap-around of a [`Wheel`]: `-1`, `0` or `+1`.
    pub overflow: i32,
}

impl ControlEvent {
    pub fn new(status: usize) -> Self {
        Self {
            status,
            overflow: 0,
        }
    }

    pub fn with_overflow(mut self, overflow: i32) -> Self {
        self.overflow = overflow;
        self
    }
}

/// Any control, as stored in a [`crate::layout::Layout`].
#[derive(Debug, Clone)]
pub enum Control {
    Display(BitmapControl),
    Switch(Switch),
    LedSwitch(LedSwitch),
    Wheel(Wheel),
    Spacer(Spacer),
}

impl Control {
    fn item(&self) -> &dyn LayoutItem {
        match self {
            Control::Display(c) => c,
            Control::Switch(c) => c,
            Control::LedSwitch(c) => c,
            Control::Wheel(c) => c,
            Control::Spacer(c) => c,
        }
    }

    fn item_mut(&mut self) -> &mut dyn LayoutItem {
        match self {
            Control::Display(c) => c,
            Control::Switch(c) => c,
            Control::LedSwitch(c) => c,
            Control::Wheel(c) => c,
            Control::Spacer(c) => c,
        }
    }
}

impl LayoutItem for Control {
    fn size(&self) -> Size {
        self.item().size()
    }

    fn position(&self) -> Point {
        self.item().position()
    }

    fn set_position(&mut self, position: Point) {
        self.item_mut().set_position(position);
    }

    fn image(&self) -> Option<&ImageHandle> {
        self.item().image()
    }
}

impl From<BitmapControl> for Control {
    fn from(c: BitmapControl) -> Self {
        Control::Display(c)
    }
}

impl From<Switch> for Control {
    fn from(c: Switch) -> Self {
        Control::Switch(c)
    }
}

impl From<LedSwitch> for Control {
    fn from(c: LedSwitch) -> Self {
        Control::LedSwitch(c)
    }
}

impl From<Wheel> for Control {
    fn from(c: Wheel) -> Self {
        Control::Wheel(c)
    }
}

impl From<Spacer> for Control {
    fn from(c: Spacer) -> Self {
        Control::Spacer(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn frames(count: usize, width: u32) -> Vec<ImageHandle> {
        (0..count)
            .map(|_| ImageHandle::from_rgba(RgbaImage::new(width, 6)))
            .collect()
    }

    #[test]
    fn test_control_delegates_layout() {
        let mut control = Control::from(Switch::new(frames(2, 9)).unwrap());
        assert_eq!(control.size(), Size::new(9, 6));
        control.set_position(Point::new(4, 5));
        assert_eq!(control.position(), Point::new(4, 5));
        assert!(control.image().is_some());

        let spacer = Control::from(Spacer::new(3, 3));
        assert!(spacer.image().is_none());
    }

    #[test]
    fn test_event_overflow_default() {
        let event = ControlEvent::new(3);
        assert_eq!(event.overflow, 0);
        assert_eq!(event.with_overflow(-1).overflow, -1);
    }
}
