//! Reference color catalog
//!
//! The catalog is loaded and normalized once, then shared read-only by
//! every matching and ranking operation. Entries keep source order:
//! collections in the order they were added, records in file order.
//!
//! # Example
//!
//! ```
//! use colorlore_core::catalog::{self, CollectionId};
//!
//! let catalog = catalog::builtin();
//! let carmine = catalog.color_by_id("yanzhi").unwrap();
//! assert_eq!(carmine.collection, CollectionId::Chinese);
//! assert_eq!(carmine.native_name, "胭脂");
//! ```

mod browse;
mod collection;
mod record;

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

pub use browse::comparison_slug;
pub use collection::{CollectionId, CollectionMetadata, Locale};
pub use record::{ColorRecord, ReferenceColor, slugify};

use crate::{Error, Result};

/// Embedded reference data, one JSON array per collection
const BUILTIN_SOURCES: [(CollectionId, &str); 4] = [
    (CollectionId::Chinese, include_str!("../../data/chinese.json")),
    (CollectionId::Japanese, include_str!("../../data/japanese.json")),
    (CollectionId::Pantone, include_str!("../../data/pantone.json")),
    (CollectionId::Nature, include_str!("../../data/nature.json")),
];

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::load_builtin().unwrap_or_else(|err| {
        log::warn!("built-in catalog failed to load, continuing with an empty catalog: {err}");
        Catalog::empty()
    })
});

/// Process-wide catalog built from the embedded reference data
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

/// Immutable, order-stable list of reference colors
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    colors: Vec<ReferenceColor>,
    by_id: HashMap<String, usize>,
    collections: Vec<CollectionId>,
}

impl Catalog {
    /// A catalog with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start building a catalog
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Parse and normalize the embedded reference data
    pub fn load_builtin() -> Result<Self> {
        Self::from_sources(&BUILTIN_SOURCES)
    }

    /// Build from JSON arrays of [`ColorRecord`], one per collection
    pub fn from_sources(sources: &[(CollectionId, &str)]) -> Result<Self> {
        sources
            .iter()
            .try_fold(CatalogBuilder::new(), |builder, (collection, json)| {
                builder.add_json(*collection, json)
            })?
            .build()
    }

    /// All entries in catalog order
    pub fn all_colors(&self) -> &[ReferenceColor] {
        &self.colors
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Exact lookup by id
    pub fn color_by_id(&self, id: &str) -> Option<&ReferenceColor> {
        self.by_id.get(id).map(|&i| &self.colors[i])
    }

    /// Entries of one collection in source order
    pub fn collection(&self, collection: CollectionId) -> Vec<&ReferenceColor> {
        self.colors
            .iter()
            .filter(|c| c.collection == collection)
            .collect()
    }

    /// Entries of a collection named by string id
    ///
    /// Unknown ids fall back to the Chinese collection.
    pub fn collection_or_default(&self, collection: &str) -> Vec<&ReferenceColor> {
        let id = collection.parse().unwrap_or(CollectionId::Chinese);
        self.collection(id)
    }

    /// Lookup by the URL slug of the English name
    ///
    /// When two names share a slug the first in catalog order wins.
    pub fn color_by_slug(&self, slug: &str) -> Option<&ReferenceColor> {
        self.colors.iter().find(|c| c.slug() == slug)
    }

    /// Collections present, in catalog order
    pub fn collections(&self) -> &[CollectionId] {
        &self.collections
    }
}

/// Incremental catalog construction with validation at [`build`](Self::build)
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    colors: Vec<ReferenceColor>,
}

impl CatalogBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record
    pub fn add_record(mut self, collection: CollectionId, record: ColorRecord) -> Result<Self> {
        self.colors.push(record.normalize(collection)?);
        Ok(self)
    }

    /// Add every record from a JSON array
    pub fn add_json(self, collection: CollectionId, json: &str) -> Result<Self> {
        let records: Vec<ColorRecord> = serde_json::from_str(json)?;
        records
            .into_iter()
            .try_fold(self, |builder, record| builder.add_record(collection, record))
    }

    /// Add every record from a JSON file
    pub fn add_json_file(self, collection: CollectionId, path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        self.add_json(collection, &json)
    }

    /// Check id uniqueness and freeze
    pub fn build(self) -> Result<Catalog> {
        let mut by_id = HashMap::with_capacity(self.colors.len());
        let mut collections = Vec::new();

        for (i, color) in self.colors.iter().enumerate() {
            if by_id.insert(color.id.clone(), i).is_some() {
                return Err(Error::DuplicateId(color.id.clone()));
            }
            if !collections.contains(&color.collection) {
                collections.push(color.collection);
            }
        }

        for collection in &collections {
            log::debug!(
                "catalog collection {collection}: {} colors",
                self.colors.iter().filter(|c| c.collection == *collection).count()
            );
        }
        log::debug!("catalog built with {} colors", self.colors.len());

        Ok(Catalog {
            colors: self.colors,
            by_id,
            collections,
        })
    }
}
