//! Pixel storage: shared image handles and drawable surfaces.
//!
//! `ImageHandle` is immutable RGBA data behind an `Arc`, cheap to clone and
//! safe to share. `Surface` is an owned, mutable canvas that decorations and
//! controls are drawn into. Both are thin wrappers over `image::RgbaImage`.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use image::{RgbaImage, imageops};

use crate::error::AtlasError;
use crate::primitives::{Color, Point, Rect, Size};

/// Shared, immutable RGBA pixel data.
#[derive(Clone)]
pub struct ImageHandle(Arc<RgbaImage>);

impl ImageHandle {
    /// Wrap decoded pixels.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self(Arc::new(pixels))
    }

    /// Decode a PNG (or any format enabled on the `image` crate).
    pub fn load_png(path: impl AsRef<Path>) -> Result<Self, AtlasError> {
        let decoded = image::open(path.as_ref())?;
        Ok(Self::from_rgba(decoded.to_rgba8()))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::from(self.0.dimensions())
    }

    /// Borrow the underlying pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.0
    }

    /// Copy out a `rect.width × rect.height` region.
    ///
    /// The result always has exactly the requested dimensions; parts of the
    /// rectangle that fall outside this image are left transparent.
    pub fn sub_image(&self, rect: Rect) -> ImageHandle {
        let width = rect.width.max(0) as u32;
        let height = rect.height.max(0) as u32;
        let mut out = RgbaImage::new(width, height);
        imageops::replace(&mut out, self.pixels(), -i64::from(rect.x), -i64::from(rect.y));
        Self::from_rgba(out)
    }

    /// True when both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &ImageHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.0.dimensions() == other.0.dimensions() && self.0.as_raw() == other.0.as_raw())
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// An owned RGBA canvas.
#[derive(Debug, Clone)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// Create a transparent surface. Negative dimensions yield an empty surface.
    pub fn new(size: Size) -> Self {
        Self {
            pixels: RgbaImage::new(size.width.max(0) as u32, size.height.max(0) as u32),
        }
    }

    /// Create a surface filled with `color`.
    pub fn filled(size: Size, color: Color) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(
                size.width.max(0) as u32,
                size.height.max(0) as u32,
                color.to_rgba(),
            ),
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::from(self.pixels.dimensions())
    }

    #[inline]
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size())
    }

    /// Fill a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clip) = rect.intersection(&self.bounds()) else {
            return;
        };
        let rgba = color.to_rgba();
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                self.pixels.put_pixel(x as u32, y as u32, rgba);
            }
        }
    }

    /// Draw a 1px outline along the inside edge of `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - 1, rect.width, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.y, 1, rect.height), color);
        self.fill_rect(Rect::new(rect.right() - 1, rect.y, 1, rect.height), color);
    }

    /// Copy `image` verbatim at `at`, replacing destination pixels.
    pub fn blit(&mut self, image: &ImageHandle, at: Point) {
        imageops::replace(&mut self.pixels, image.pixels(), i64::from(at.x), i64::from(at.y));
    }

    /// Alpha-composite `image` over the surface at `at`.
    pub fn draw_image(&mut self, image: &ImageHandle, at: Point) {
        imageops::overlay(&mut self.pixels, image.pixels(), i64::from(at.x), i64::from(at.y));
    }

    /// Color of one pixel, or `None` outside the surface.
    pub fn pixel(&self, at: Point) -> Option<Color> {
        let inside = at.x >= 0 && at.y >= 0 && at.x < self.size().width && at.y < self.size().height;
        inside.then(|| Color::from(*self.pixels.get_pixel(at.x as u32, at.y as u32)))
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Freeze the surface into a shareable image.
    pub fn into_image(self) -> ImageHandle {
        ImageHandle::from_rgba(self.pixels)
    }

    /// Encode the surface as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), AtlasError> {
        self.pixels.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        Ok(())
    }
}
