//! Nine-slice decoration frames.
//!
//! A decoration is a sample bitmap plus insets `(l, r, t, b)`. Expanding it to
//! an arbitrary size keeps the four corners as-is and repeats the edge strips
//! at their native size; the centre is left as plain background.
//!
//! ```text
//!  sample                 output (w x h)
//! +--+----+--+           +--+------------+--+
//! |TL| T  |TR|           |TL| T  T  T  T |TR|
//! +--+----+--+           +--+------------+--+
//! |L |    | R|    ->     |L |            | R|
//! +--+----+--+           |L |            | R|
//! |BL| B  |BR|           +--+------------+--+
//! +--+----+--+           |BL| B  B  B  B |BR|
//!                        +--+------------+--+
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::primitives::{Color, Insets, Point, Rect, Size};
use crate::surface::{ImageHandle, Surface};
use crate::theme::Theme;

/// Side length of the built-in placeholder sample.
const PLACEHOLDER_SIZE: i32 = 32;
/// Insets of the built-in placeholder sample.
const PLACEHOLDER_INSETS: Insets = Insets::all(3);

/// A resolved decoration: sample bitmap and the insets that frame it.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub sample: ImageHandle,
    pub insets: Insets,
}

impl Decoration {
    /// Grey 1px outline on the theme background, used when a theme has no
    /// sample for the requested name.
    pub fn placeholder(background: Color) -> Self {
        let size = Size::new(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE);
        let mut sample = Surface::filled(size, background);
        sample.stroke_rect(
            Rect::new(1, 1, PLACEHOLDER_SIZE - 2, PLACEHOLDER_SIZE - 2),
            Color::GREY,
        );
        Self {
            sample: sample.into_image(),
            insets: PLACEHOLDER_INSETS,
        }
    }
}

/// Memoized decorations, keyed by name.
///
/// Lives as long as the application; entries are never invalidated. Uses
/// `RefCell`, so it is confined to one thread.
#[derive(Debug)]
pub struct DecorationCache {
    theme: Theme,
    entries: RefCell<HashMap<String, Rc<Decoration>>>,
}

impl DecorationCache {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            entries: RefCell::new(HashMap::new()),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.theme.background
    }

    /// Look up `name`, loading it from the theme on first use.
    pub fn resolve(&self, name: &str) -> Rc<Decoration> {
        if let Some(decoration) = self.entries.borrow().get(name) {
            return Rc::clone(decoration);
        }

        let decoration = match self.theme.decoration_sample(name) {
            Some(sample) => Decoration {
                sample,
                insets: self.theme.decoration_insets,
            },
            None => {
                tracing::debug!(name, "no themed decoration, using placeholder");
                Decoration::placeholder(self.theme.background)
            }
        };
        let decoration = Rc::new(decoration);
        self.entries
            .borrow_mut()
            .insert(name.to_string(), Rc::clone(&decoration));
        decoration
    }

    /// Insets of decoration `name`.
    pub fn insets(&self, name: &str) -> Insets {
        self.resolve(name).insets
    }

    /// Expand decoration `name` to `size`.
    pub fn tile(&self, name: &str, size: Size) -> Surface {
        let decoration = self.resolve(name);
        nine_slice(&decoration.sample, decoration.insets, size, self.theme.background)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.borrow().contains_key(name)
    }
}

/// Expand `sample` to `size`, keeping corners and repeating edges.
///
/// Sizes smaller than the insets are not guarded: strips with no room are
/// skipped and corners overlap.
pub fn nine_slice(sample: &ImageHandle, insets: Insets, size: Size, background: Color) -> Surface {
    let Insets {
        left,
        right,
        top,
        bottom,
    } = insets;
    let source = sample.size();
    let inner_width = source.width - left - right;
    let inner_height = source.height - top - bottom;

    let mut out = Surface::filled(size, background);

    // edges
    let strip = sample.sub_image(Rect::new(left, 0, inner_width, top));
    tile_horizontally(&mut out, &strip, Point::new(left, 0), size.width - left - right);
    let strip = sample.sub_image(Rect::new(left, source.height - bottom, inner_width, bottom));
    tile_horizontally(
        &mut out,
        &strip,
        Point::new(left, size.height - bottom),
        size.width - left - right,
    );
    let strip = sample.sub_image(Rect::new(0, top, left, inner_height));
    tile_vertically(&mut out, &strip, Point::new(0, top), size.height - top - bottom);
    let strip = sample.sub_image(Rect::new(source.width - right, top, right, inner_height));
    tile_vertically(
        &mut out,
        &strip,
        Point::new(size.width - right, top),
        size.height - top - bottom,
    );

    // corners
    let corners = [
        (Rect::new(0, 0, left, top), Point::new(0, 0)),
        (
            Rect::new(source.width - right, 0, right, top),
            Point::new(size.width - right, 0),
        ),
        (
            Rect::new(0, source.height - bottom, left, bottom),
            Point::new(0, size.height - bottom),
        ),
        (
            Rect::new(source.width - right, source.height - bottom, right, bottom),
            Point::new(size.width - right, size.height - bottom),
        ),
    ];
    for (clip, at) in corners {
        out.blit(&sample.sub_image(clip), at);
    }

    out
}

fn tile_horizontally(out: &mut Surface, strip: &ImageHandle, at: Point, span: i32) {
    let step = strip.size().width;
    if step <= 0 || strip.size().height <= 0 || span <= 0 {
        return;
    }
    let mut x = at.x;
    for _ in 0..span / step {
        out.blit(strip, Point::new(x, at.y));
        x += step;
    }
    let remainder = span % step;
    if remainder > 0 {
        let clip = strip.sub_image(Rect::new(0, 0, remainder, strip.size().height));
        out.blit(&clip, Point::new(x, at.y));
    }
}

fn tile_vertically(out: &mut Surface, strip: &ImageHandle, at: Point, span: i32) {
    let step = strip.size().height;
    if step <= 0 || strip.size().width <= 0 || span <= 0 {
        return;
    }
    let mut y = at.y;
    for _ in 0..span / step {
        out.blit(strip, Point::new(at.x, y));
        y += step;
    }
    let remainder = span % step;
    if remainder > 0 {
        let clip = strip.sub_image(Rect::new(0, 0, strip.size().width, remainder));
        out.blit(&clip, Point::new(at.x, y));
    }
}
