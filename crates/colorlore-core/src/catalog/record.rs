//! Catalog records
//!
//! [`ColorRecord`] is the external data shape (one JSON object per color).
//! [`ReferenceColor`] is the normalized, validated entry every accessor
//! hands out: optional fields are always present (empty when the source
//! had none), the hex is lowercase `#rrggbb`, and tags are unique.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::CollectionId;
use crate::color::Rgb;
use crate::{Error, Result};

/// One color as stored in the reference data
///
/// Native-script and phonetic names are accepted under their
/// collection-specific keys (`chinese`/`pinyin`, `kanji`/`romaji`) or the
/// generic `native`/`phonetic`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub id: String,
    pub name: String,
    pub hex: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub names: BTreeMap<String, String>,
    #[serde(default, alias = "chinese", alias = "kanji")]
    pub native: Option<String>,
    #[serde(default, alias = "pinyin", alias = "romaji")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ColorRecord {
    /// Create a record with only the required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hex: hex.into(),
            ..Default::default()
        }
    }

    /// Replace the tag list
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the native-script name
    pub fn with_native(mut self, native: impl Into<String>) -> Self {
        self.native = Some(native.into());
        self
    }

    /// Validate and normalize into a catalog entry
    pub fn normalize(self, collection: CollectionId) -> Result<ReferenceColor> {
        let id = self.id.trim().to_string();
        if id.is_empty() {
            return Err(Error::CatalogEntry {
                id: self.name,
                reason: "empty id".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(Error::CatalogEntry {
                id,
                reason: "empty name".to_string(),
            });
        }

        let rgb = Rgb::from_hex(self.hex.trim()).map_err(|_| Error::CatalogEntry {
            id: id.clone(),
            reason: format!("invalid hex {:?}", self.hex),
        })?;

        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags {
            let tag = tag.trim().to_string();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Ok(ReferenceColor {
            id,
            name: self.name,
            names: self.names,
            hex: rgb.to_hex(),
            rgb,
            native_name: self.native.unwrap_or_default(),
            phonetic_name: self.phonetic.unwrap_or_default(),
            meaning: self.meaning.unwrap_or_default(),
            tags,
            code: self.code.unwrap_or_default(),
            collection,
        })
    }
}

/// A normalized catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceColor {
    /// Stable unique slug
    pub id: String,
    /// English display name
    pub name: String,
    /// Localized display names keyed by language subtag
    pub names: BTreeMap<String, String>,
    /// Canonical lowercase `#rrggbb`
    pub hex: String,
    /// Decoded canonical value
    pub rgb: Rgb,
    /// Native-script name (empty when the collection has none)
    pub native_name: String,
    /// Transliteration of the native name (empty when absent)
    pub phonetic_name: String,
    /// Cultural meaning or description
    pub meaning: String,
    /// Unique tags in source order
    pub tags: Vec<String>,
    /// Vendor code such as a Pantone number (empty when absent)
    pub code: String,
    pub collection: CollectionId,
}

impl ReferenceColor {
    /// URL-safe slug of the English name
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Localized display name, falling back to the English name
    pub fn display_name(&self, locale: &str) -> &str {
        let primary = locale.split(['-', '_']).next().unwrap_or_default();
        self.names
            .get(&primary.to_ascii_lowercase())
            .map(String::as_str)
            .unwrap_or(self.name.as_str())
    }

    /// Check whether the entry carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Number of tags shared with another entry
    pub fn shared_tags(&self, other: &ReferenceColor) -> usize {
        self.tags.iter().filter(|t| other.has_tag(t)).count()
    }
}

/// Lowercase and replace spaces with hyphens
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_fills_optional_fields() {
        let color = ColorRecord::new("test-red", "Test Red", "#F00")
            .normalize(CollectionId::Nature)
            .unwrap();
        assert_eq!(color.hex, "#ff0000");
        assert_eq!(color.rgb, Rgb::RED);
        assert_eq!(color.native_name, "");
        assert_eq!(color.phonetic_name, "");
        assert_eq!(color.meaning, "");
        assert!(color.tags.is_empty());
        assert_eq!(color.collection, CollectionId::Nature);
    }

    #[test]
    fn test_collection_specific_keys() {
        let chinese: ColorRecord = serde_json::from_str(
            r##"{"id": "yanzhi", "name": "Carmine", "hex": "#9D2933",
                 "chinese": "胭脂", "pinyin": "yānzhī"}"##,
        )
        .unwrap();
        assert_eq!(chinese.native.as_deref(), Some("胭脂"));
        assert_eq!(chinese.phonetic.as_deref(), Some("yānzhī"));

        let japanese: ColorRecord = serde_json::from_str(
            r##"{"id": "ai-iro", "name": "Japanese Indigo", "hex": "#165e83",
                 "kanji": "藍色", "romaji": "ai-iro"}"##,
        )
        .unwrap();
        assert_eq!(japanese.native.as_deref(), Some("藍色"));
        assert_eq!(japanese.phonetic.as_deref(), Some("ai-iro"));
    }

    #[test]
    fn test_tags_deduplicated_in_order() {
        let color = ColorRecord::new("c", "C", "#123456")
            .with_tags(["warm", "red", "warm", " ", "red", "autumn"])
            .normalize(CollectionId::Chinese)
            .unwrap();
        assert_eq!(color.tags, ["warm", "red", "autumn"]);
    }

    #[test]
    fn test_invalid_hex_names_the_entry() {
        let err = ColorRecord::new("broken", "Broken", "#12")
            .normalize(CollectionId::Chinese)
            .unwrap_err();
        assert!(matches!(err, Error::CatalogEntry { ref id, .. } if id == "broken"));
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(ColorRecord::new("  ", "Name", "#123456")
            .normalize(CollectionId::Chinese)
            .is_err());
    }

    #[test]
    fn test_slugify_replaces_each_space() {
        assert_eq!(slugify("Classic Blue"), "classic-blue");
        assert_eq!(slugify("Classic  Blue"), "classic--blue");
    }

    #[test]
    fn test_slug_and_display_name() {
        let mut record = ColorRecord::new("classic-blue", "Classic Blue", "#0f4c81");
        record.names.insert("es".into(), "Azul clásico".into());
        let color = record.normalize(CollectionId::Pantone).unwrap();

        assert_eq!(color.slug(), "classic-blue");
        assert_eq!(color.display_name("es-ES"), "Azul clásico");
        assert_eq!(color.display_name("fr"), "Classic Blue");
    }

    #[test]
    fn test_shared_tags() {
        let a = ColorRecord::new("a", "A", "#000")
            .with_tags(["x", "y", "z"])
            .normalize(CollectionId::Chinese)
            .unwrap();
        let b = ColorRecord::new("b", "B", "#fff")
            .with_tags(["y", "z", "w"])
            .normalize(CollectionId::Japanese)
            .unwrap();
        assert_eq!(a.shared_tags(&b), 2);
        assert_eq!(b.shared_tags(&a), 2);
    }
}
