//! Sprite-sheet atlases.
//!
//! A sheet is a PNG holding many sub-images on a logical grid; its descriptor
//! (see [`descriptor`]) tags each region. Loading filters the regions by tag,
//! cuts them out of the sheet, and keeps the tags that were *not* used for
//! filtering so that later [`select`] calls can narrow or order the result.
//!
//! ```text
//! collect("leds.png", ["on"]) -> [ (img, {red}), (img, {blue}), ... ]
//! select(&leds, [], Some(["blue", "red"])) -> [blue img, red img]
//! ```

pub mod descriptor;
pub mod selection;

use std::collections::BTreeSet;
use std::fs;

pub use descriptor::{AtlasEntry, parse_descriptor};
pub use selection::Selection;

use crate::config::PanelConfig;
use crate::error::AtlasError;
use crate::resources::ResourcePaths;
use crate::surface::ImageHandle;

/// A slice of a sheet together with the tags left after filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasImage {
    pub image: ImageHandle,
    pub tags: BTreeSet<String>,
}

impl AtlasImage {
    pub fn has_tags(&self, required: &[&str]) -> bool {
        required.iter().all(|tag| self.tags.contains(*tag))
    }
}

/// Cut every entry carrying all `required` tags out of `sheet`.
///
/// The matched tags are removed from each result's tag set.
pub fn load_atlas(
    sheet: &ImageHandle,
    entries: &[AtlasEntry],
    required: &[&str],
) -> Selection<AtlasImage> {
    let sheet_size = sheet.size();
    entries
        .iter()
        .filter(|entry| entry.has_tags(required))
        .map(|entry| {
            let clip = entry.clip_rect(sheet_size);
            if clip.x < 0
                || clip.y < 0
                || clip.right() > sheet_size.width
                || clip.bottom() > sheet_size.height
            {
                tracing::warn!(?clip, ?sheet_size, tags = ?entry.tags, "atlas entry extends past sheet");
            }
            let mut tags = entry.tags.clone();
            for tag in required {
                tags.remove(*tag);
            }
            AtlasImage {
                image: sheet.sub_image(clip),
                tags,
            }
        })
        .collect()
}

/// Narrow a collection by tags and optionally order it.
///
/// With `order`, the output walks the order list and emits every filtered
/// image whose remaining tags contain the current name; an image matching
/// several names is emitted once per name. Without `order`, filtered images
/// keep their collection order.
pub fn select(
    collection: &[AtlasImage],
    required: &[&str],
    order: Option<&[&str]>,
) -> Selection<ImageHandle> {
    let filtered: Vec<(&ImageHandle, BTreeSet<&str>)> = collection
        .iter()
        .filter(|item| item.has_tags(required))
        .map(|item| {
            let remaining = item
                .tags
                .iter()
                .map(String::as_str)
                .filter(|tag| !required.contains(tag))
                .collect();
            (&item.image, remaining)
        })
        .collect();

    match order {
        Some(order) => order
            .iter()
            .flat_map(|name| {
                filtered
                    .iter()
                    .filter(move |(_, tags)| tags.contains(name))
                    .map(|(image, _)| (*image).clone())
            })
            .collect(),
        None => filtered.into_iter().map(|(image, _)| image.clone()).collect(),
    }
}

/// Loads sheets and their descriptors from a resource search path.
#[derive(Debug, Clone)]
pub struct AtlasLoader {
    paths: ResourcePaths,
    descriptor_suffix: String,
}

impl AtlasLoader {
    /// Default suffix appended to a sheet name to find its descriptor.
    pub const DEFAULT_DESCRIPTOR_SUFFIX: &'static str = ".descriptor";

    pub fn new(paths: ResourcePaths) -> Self {
        Self {
            paths,
            descriptor_suffix: Self::DEFAULT_DESCRIPTOR_SUFFIX.to_string(),
        }
    }

    pub fn from_config(config: &PanelConfig) -> Self {
        Self {
            paths: config.resource_paths(),
            descriptor_suffix: config.descriptor_suffix.clone(),
        }
    }

    pub fn with_descriptor_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.descriptor_suffix = suffix.into();
        self
    }

    pub fn paths(&self) -> &ResourcePaths {
        &self.paths
    }

    /// Load sheet `name` (e.g. `"leds.png"`) and keep the entries tagged with
    /// every `required` tag.
    pub fn collect(&self, name: &str, required: &[&str]) -> Result<Selection<AtlasImage>, AtlasError> {
        let sheet_path = self.paths.resolve(name)?;
        let descriptor_path = self
            .paths
            .resolve(&format!("{name}{}", self.descriptor_suffix))?;

        let entries = parse_descriptor(&fs::read_to_string(&descriptor_path)?)?;
        let sheet = ImageHandle::load_png(&sheet_path)?;
        let collection = load_atlas(&sheet, &entries, required);
        tracing::debug!(
            sheet = %sheet_path.display(),
            entries = entries.len(),
            matched = collection.len(),
            "collected atlas"
        );
        Ok(collection)
    }
}
