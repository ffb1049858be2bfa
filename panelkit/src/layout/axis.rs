//! Layout direction and alignment types.

/// The axis children of a group flow along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Children flow left to right.
    #[default]
    Horizontal,
    /// Children flow top to bottom.
    Vertical,
}

/// Alignment of a child on its group's cross axis.
///
/// `Left`/`Top` both mean the near edge and `Right`/`Bottom` the far edge, so
/// either spelling works in either direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

impl Align {
    pub(crate) fn cross(self) -> CrossAlign {
        match self {
            Align::Center => CrossAlign::Center,
            Align::Left | Align::Top => CrossAlign::Near,
            Align::Right | Align::Bottom => CrossAlign::Far,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CrossAlign {
    Near,
    Center,
    Far,
}
