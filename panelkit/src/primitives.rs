//! Core primitive types for panelkit.
//!
//! Geometry is integer pixels throughout: sheets, slices and surfaces are
//! addressed in whole pixels, and layout floors its fractional offsets before
//! handing positions to items.

use std::ops::{Add, Sub};

use image::Rgba;

/// A point in 2D pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// A 2D size in pixels.
///
/// Signed so that overflowing layouts (a child larger than its group) produce
/// negative offsets instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
        }
    }
}

/// A rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point { x: self.x, y: self.y }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// True when the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Get the intersection of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let rect = Rect::new(x, y, right - x, bottom - y);
        (!rect.is_empty()).then_some(rect)
    }
}

/// Four per-side pixel extents: `(left, right, top, bottom)`.
///
/// Used both for item margins and for decoration insets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Insets {
    pub const ZERO: Self = Self {
        left: 0,
        right: 0,
        top: 0,
        bottom: 0,
    };

    /// Create insets in `(left, right, top, bottom)` order.
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Uniform insets on all sides.
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Symmetric insets (horizontal, vertical).
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, horizontal, vertical, vertical)
    }

    /// Total horizontal extent.
    #[inline]
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical extent.
    #[inline]
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

impl Add for Insets {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            left: self.left + rhs.left,
            right: self.right + rhs.right,
            top: self.top + rhs.top,
            bottom: self.bottom + rhs.bottom,
        }
    }
}

impl From<[i32; 4]> for Insets {
    fn from([left, right, top, bottom]: [i32; 4]) -> Self {
        Self { left, right, top, bottom }
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Outline color of the placeholder decoration.
    pub const GREY: Self = Self::rgb(128, 128, 128);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Rgba<u8>> for Color {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_saturate() {
        let rect = Rect::new(i32::MAX - 1, i32::MAX, 10, 10);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MAX);
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, -5, 10, 10);
        assert_eq!(a.intersection(&b), Some(Rect::new(5, 0, 5, 5)));
        assert_eq!(a.intersection(&Rect::new(20, 20, 5, 5)), None);
    }

    #[test]
    fn test_insets_order() {
        let insets = Insets::from([1, 2, 3, 4]);
        assert_eq!(insets.horizontal(), 3);
        assert_eq!(insets.vertical(), 7);
        assert_eq!(insets.left, 1);
        assert_eq!(insets.bottom, 4);
    }

    #[test]
    fn test_size_max() {
        let size = Size::new(10, 40).max(Size::new(20, 30));
        assert_eq!(size, Size::new(20, 40));
    }
}
