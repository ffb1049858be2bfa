use crate::error::AtlasError;
use crate::layout::LayoutItem;
use crate::primitives::{Point, Size};
use crate::surface::ImageHandle;

/// A list of same-sized images, one of which is shown.
///
/// On its own it is a static display (a label, a digit, a gauge); the
/// buttons and the wheel wrap it and drive `status` from input.
#[derive(Debug, Clone)]
pub struct BitmapControl {
    images: Vec<ImageHandle>,
    names: Vec<String>,
    status: usize,
    size: Size,
    position: Point,
}

impl BitmapControl {
    /// Fails with [`AtlasError::EmptyResult`] when `images` is empty.
    pub fn new(images: impl IntoIterator<Item = ImageHandle>) -> Result<Self, AtlasError> {
        let images: Vec<ImageHandle> = images.into_iter().collect();
        let size = images.first().ok_or(AtlasError::EmptyResult)?.size();
        Ok(Self {
            images,
            names: Vec::new(),
            status: 0,
            size,
            position: Point::ORIGIN,
        })
    }

    /// Name the images in order, for [`BitmapControl::set_value_by_name`].
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn value(&self) -> usize {
        self.status
    }

    /// Show image `status`. Out-of-range values show nothing.
    pub fn set_value(&mut self, status: usize) {
        self.status = status;
    }

    /// Show the image named `name`. Returns false and keeps the current
    /// image if no image has that name.
    pub fn set_value_by_name(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(index) => {
                self.status = index;
                true
            }
            None => {
                tracing::debug!(name, "no image with this name");
                false
            }
        }
    }

    /// Name of the current image, if names were given.
    pub fn name(&self) -> Option<&str> {
        self.names.get(self.status).map(String::as_str)
    }

    pub fn images(&self) -> &[ImageHandle] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl LayoutItem for BitmapControl {
    fn size(&self) -> Size {
        self.size
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn image(&self) -> Option<&ImageHandle> {
        self.images.get(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn digits() -> Vec<ImageHandle> {
        (1..=3)
            .map(|w| ImageHandle::from_rgba(RgbaImage::new(w * 4, 8)))
            .collect()
    }

    #[test]
    fn test_size_of_first_image() {
        let control = BitmapControl::new(digits()).unwrap();
        assert_eq!(control.size(), Size::new(4, 8));
        assert_eq!(control.len(), 3);
    }

    #[test]
    fn test_empty_rejected() {
        let err = BitmapControl::new(Vec::new()).unwrap_err();
        assert!(matches!(err, AtlasError::EmptyResult));
    }

    #[test]
    fn test_value_selects_image() {
        let mut control = BitmapControl::new(digits()).unwrap();
        control.set_value(2);
        assert_eq!(control.value(), 2);
        assert_eq!(control.image().map(|i| i.width()), Some(12));
        control.set_value(7);
        assert!(control.image().is_none());
    }

    #[test]
    fn test_value_by_name() {
        let mut control = BitmapControl::new(digits())
            .unwrap()
            .with_names(["zero", "one", "two"]);
        assert!(control.set_value_by_name("one"));
        assert_eq!(control.value(), 1);
        assert_eq!(control.name(), Some("one"));
        assert!(!control.set_value_by_name("nine"));
        assert_eq!(control.value(), 1);
    }
}
