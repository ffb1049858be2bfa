//! Push buttons.
//!
//! Image order encodes the status bits:
//!
//! ```text
//! bit 0 (1) = on
//! bit 1 (2) = pressed (LedSwitch only)
//!
//! 0 off  1 on  2 off+pressed  3 on+pressed
//! ```

use super::{BitmapControl, ControlEvent};
use crate::error::AtlasError;
use crate::layout::LayoutItem;
use crate::primitives::{Point, Size};
use crate::surface::ImageHandle;

const ON: usize = 1;
const PRESSED: usize = 2;

/// Toggles on every press. No undo gesture.
#[derive(Debug, Clone)]
pub struct Switch {
    bitmap: BitmapControl,
}

impl Switch {
    pub fn new(images: impl IntoIterator<Item = ImageHandle>) -> Result<Self, AtlasError> {
        Ok(Self {
            bitmap: BitmapControl::new(images)?,
        })
    }

    pub fn press(&mut self) -> Option<ControlEvent> {
        let status = self.bitmap.value() ^ ON;
        self.bitmap.set_value(status);
        Some(ControlEvent::new(status))
    }

    pub fn value(&self) -> usize {
        self.bitmap.value()
    }

    pub fn set_value(&mut self, status: usize) {
        self.bitmap.set_value(status);
    }

    pub fn bitmap(&self) -> &BitmapControl {
        &self.bitmap
    }
}

/// Toggles on release. Leaving the button while pressed cancels.
#[derive(Debug, Clone)]
pub struct LedSwitch {
    bitmap: BitmapControl,
    locked: bool,
}

impl LedSwitch {
    pub fn new(images: impl IntoIterator<Item = ImageHandle>) -> Result<Self, AtlasError> {
        Ok(Self {
            bitmap: BitmapControl::new(images)?,
            locked: false,
        })
    }

    pub fn press(&mut self) {
        self.locked = true;
        self.bitmap.set_value(self.bitmap.value() | PRESSED);
    }

    pub fn release(&mut self) -> Option<ControlEvent> {
        if !self.locked {
            return None;
        }
        self.locked = false;
        let status = (self.bitmap.value() & ON) ^ ON;
        self.bitmap.set_value(status);
        Some(ControlEvent::new(status))
    }

    pub fn leave(&mut self) {
        if self.locked {
            self.locked = false;
            self.bitmap.set_value(self.bitmap.value() & ON);
        }
    }

    /// Turn off. Reports only if the switch was not already off.
    pub fn clear(&mut self) -> Option<ControlEvent> {
        if self.bitmap.value() == 0 {
            return None;
        }
        self.bitmap.set_value(0);
        Some(ControlEvent::new(0))
    }

    pub fn is_pressed(&self) -> bool {
        self.locked
    }

    pub fn value(&self) -> usize {
        self.bitmap.value()
    }

    pub fn set_value(&mut self, status: usize) {
        self.bitmap.set_value(status);
    }

    pub fn bitmap(&self) -> &BitmapControl {
        &self.bitmap
    }
}

/// Mutual exclusion over a set of [`LedSwitch`]es.
pub struct RadioGroup;

impl RadioGroup {
    /// Press `switches[index]` and clear every other member.
    ///
    /// Returns `(member index, event)` for each member that was cleared.
    pub fn select(switches: &mut [LedSwitch], index: usize) -> Vec<(usize, ControlEvent)> {
        let mut events = Vec::new();
        for (i, switch) in switches.iter_mut().enumerate() {
            if i == index {
                switch.press();
            } else if let Some(event) = switch.clear() {
                events.push((i, event));
            }
        }
        events
    }
}

macro_rules! delegate_layout {
    ($($ty:ty),*) => {$(
        impl LayoutItem for $ty {
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
    )*};
}

delegate_layout!(Switch, LedSwitch);
