//! # colorlore - Color matching and color theory over cultural palettes
//!
//! Matches arbitrary colors against curated reference collections
//! (traditional Chinese and Japanese colors, Pantone colors of the year,
//! nature palettes), derives harmony palettes and exports swatches for
//! design tools.
//!
//! ## Components
//!
//! - [`color`]: hex, RGB, HSL and CIELAB conversions plus distance metrics
//! - [`harmony`]: complementary, analogous, triadic and monochromatic palettes
//! - [`catalog`]: the reference color database
//! - [`matcher`]: nearest-color lookup
//! - [`related`]: related-color ranking for comparisons
//! - [`swatch`]: binary swatch exchange encoding
//! - [`export`]: CSS and Figma snippets
//!
//! ## Quick Start
//!
//! ```
//! use colorlore_core::color::Rgb;
//!
//! // Nearest reference color to a sampled pixel
//! let sample: Rgb = "#9e2a34".parse()?;
//! let matched = colorlore_core::find_closest_color(sample).unwrap();
//! assert_eq!(matched.color.name, "Carmine");
//!
//! // Harmony palettes for the match
//! let palettes = colorlore_core::generate_palettes(&matched.color.hex)?;
//! assert_eq!(palettes.complementary.len(), 2);
//!
//! // Related colors for a comparison page
//! let related = colorlore_core::related_colors(Some(matched.color), 4);
//! assert_eq!(related.len(), 4);
//!
//! // Swatch file for download
//! let bytes = colorlore_core::encode_swatch(&matched.color.name, &matched.color.hex)?;
//! assert_eq!(&bytes[..4], b"ASEF");
//! # Ok::<(), colorlore_core::Error>(())
//! ```
//!
//! The accessors at the crate root operate on the built-in catalog. Use
//! [`Catalog`] directly to work with caller-provided data.

pub mod catalog;
pub mod color;
pub mod error;
pub mod export;
pub mod harmony;
pub mod matcher;
pub mod related;
pub mod swatch;

pub use catalog::{Catalog, CatalogBuilder, CollectionId, CollectionMetadata, ReferenceColor};
pub use color::{Hsl, Rgb, hex_to_hsl, hsl_to_hex};
pub use error::{Error, Result};
pub use harmony::{DerivedPalette, Harmony, HarmonyOptions, generate_palettes};
pub use matcher::{MatchOptions, MatchResult};
pub use related::{Relevance, relevance};
pub use swatch::{SwatchFile, SwatchOptions, encode_swatch};

/// Version of colorlore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Every built-in color in catalog order
pub fn all_colors() -> &'static [ReferenceColor] {
    catalog::builtin().all_colors()
}

/// Built-in color by id
pub fn color_by_id(id: &str) -> Option<&'static ReferenceColor> {
    catalog::builtin().color_by_id(id)
}

/// Built-in colors of one collection
pub fn collection(collection: CollectionId) -> Vec<&'static ReferenceColor> {
    catalog::builtin().collection(collection)
}

/// Built-in color by the slug of its English name
pub fn color_by_slug(slug: &str) -> Option<&'static ReferenceColor> {
    catalog::builtin().color_by_slug(slug)
}

/// Built-in colors most related to `color`
pub fn related_colors(
    color: Option<&ReferenceColor>,
    limit: usize,
) -> Vec<&'static ReferenceColor> {
    catalog::builtin().related_colors(color, limit)
}

/// Collection metadata in `locale`, English when unavailable
pub fn collection_metadata(collection: CollectionId, locale: &str) -> CollectionMetadata {
    collection.metadata(locale)
}

/// Closest built-in color by Euclidean RGB distance
pub fn find_closest_color(sample: Rgb) -> Option<MatchResult<'static>> {
    catalog::builtin().find_closest_color(sample)
}
