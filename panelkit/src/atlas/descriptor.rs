//! Sprite-sheet descriptor parsing.
//!
//! One entry per line:
//!
//! ```text
//! offsetX, offsetY, gridCols, gridRows, sizeW, sizeH, cellCol, cellRow, tag, tag, ...
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::collections::BTreeSet;

use crate::error::AtlasError;
use crate::primitives::{Point, Rect, Size};

/// Number of leading integer fields on a descriptor line.
const GEOMETRY_FIELDS: usize = 8;
/// Largest region size and offset magnitude accepted on a descriptor line.
const MAX_EXTENT: i32 = 1 << 14;

/// One tagged region of a sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasEntry {
    /// Pixel bias added to the centred cell position.
    pub offset: Point,
    /// Columns and rows dividing the sheet into equal cells.
    pub grid: (i32, i32),
    /// Size of the region cut out of the sheet.
    pub size: Size,
    /// 1-based `(column, row)` of the cell holding the region.
    pub cell: (i32, i32),
    pub tags: BTreeSet<String>,
}

impl AtlasEntry {
    /// Whether every tag in `required` is present.
    pub fn has_tags<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|tag| self.tags.contains(tag.as_ref()))
    }

    /// Pixel rectangle of this entry inside a sheet of `sheet` size.
    ///
    /// The region is centred in its grid cell, shifted by `offset`, and the
    /// origin truncated toward zero.
    pub fn clip_rect(&self, sheet: Size) -> Rect {
        let cell_width = f64::from(sheet.width) / f64::from(self.grid.0);
        let cell_height = f64::from(sheet.height) / f64::from(self.grid.1);
        let x = f64::from(self.cell.0 - 1) * cell_width
            + (cell_width - f64::from(self.size.width)) / 2.0
            + f64::from(self.offset.x);
        let y = f64::from(self.cell.1 - 1) * cell_height
            + (cell_height - f64::from(self.size.height)) / 2.0
            + f64::from(self.offset.y);
        Rect::new(x as i32, y as i32, self.size.width, self.size.height)
    }
}

/// Parse a whole descriptor file.
pub fn parse_descriptor(text: &str) -> Result<Vec<AtlasEntry>, AtlasError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Result<AtlasEntry, AtlasError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < GEOMETRY_FIELDS {
        return Err(AtlasError::format(
            line_no,
            format!("expected at least {GEOMETRY_FIELDS} fields, found {}", fields.len()),
        ));
    }

    let mut numbers = [0i32; GEOMETRY_FIELDS];
    for (slot, field) in numbers.iter_mut().zip(&fields[..GEOMETRY_FIELDS]) {
        *slot = field
            .trim()
            .parse()
            .map_err(|_| AtlasError::format(line_no, format!("not an integer: {:?}", field.trim())))?;
    }
    let [dx, dy, cols, rows, width, height, col, row] = numbers;

    if cols <= 0 || rows <= 0 {
        return Err(AtlasError::format(
            line_no,
            format!("grid must be positive, found {cols}x{rows}"),
        ));
    }
    if col < 1 || row < 1 {
        return Err(AtlasError::format(
            line_no,
            format!("cells are numbered from 1, found {col},{row}"),
        ));
    }
    if !(0..=MAX_EXTENT).contains(&width) || !(0..=MAX_EXTENT).contains(&height) {
        return Err(AtlasError::format(
            line_no,
            format!("size must be within 0..={MAX_EXTENT}, found {width}x{height}"),
        ));
    }
    let offsets = -MAX_EXTENT..=MAX_EXTENT;
    if !offsets.contains(&dx) || !offsets.contains(&dy) {
        return Err(AtlasError::format(
            line_no,
            format!("offset must be within -{MAX_EXTENT}..={MAX_EXTENT}, found {dx},{dy}"),
        ));
    }

    let tags = fields[GEOMETRY_FIELDS..]
        .iter()
        .map(|tag| tag.trim().to_string())
        .collect();

    Ok(AtlasEntry {
        offset: Point::new(dx, dy),
        grid: (cols, rows),
        size: Size::new(width, height),
        cell: (col, row),
        tags,
    })
}
