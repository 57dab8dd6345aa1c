//! Nearest-color matching
//!
//! A linear scan over the catalog in catalog order. The catalog holds a
//! few hundred entries at most, so no spatial index is kept. Ties go to
//! the entry that comes first, which makes every query deterministic.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::catalog::{Catalog, CollectionId, ReferenceColor};
use crate::color::{ColorDistance, DistanceMetric, EuclideanRgb, Rgb};

/// Matching configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Distance metric, Euclidean RGB unless set
    pub metric: DistanceMetric,
    /// Restrict the scan to one collection
    pub collection: Option<CollectionId>,
}

impl MatchOptions {
    /// Match only within `collection`
    pub fn in_collection(collection: CollectionId) -> Self {
        Self {
            collection: Some(collection),
            ..Default::default()
        }
    }

    /// Use `metric` instead of Euclidean RGB
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }
}

/// The closest catalog entry to a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub color: &'a ReferenceColor,
    /// Distance under the metric used for the query
    pub distance: f64,
}

impl Catalog {
    /// Closest entry by Euclidean RGB distance over the whole catalog
    ///
    /// Returns `None` only when the catalog is empty.
    pub fn find_closest_color(&self, sample: Rgb) -> Option<MatchResult<'_>> {
        self.closest(sample, &EuclideanRgb, None)
    }

    /// Closest entry under `options`
    pub fn find_closest_with(
        &self,
        sample: Rgb,
        options: &MatchOptions,
    ) -> Option<MatchResult<'_>> {
        self.closest(sample, &options.metric, options.collection)
    }

    /// Closest entry under a caller-supplied metric
    pub fn find_closest_by<D: ColorDistance>(
        &self,
        sample: Rgb,
        metric: &D,
    ) -> Option<MatchResult<'_>> {
        self.closest(sample, metric, None)
    }

    /// Parse a hex sample and match it
    pub fn find_closest_hex(&self, hex: &str) -> Result<Option<MatchResult<'_>>> {
        let sample = Rgb::from_hex(hex)?;
        Ok(self.find_closest_color(sample))
    }

    /// The `n` closest entries in ascending distance
    ///
    /// Equal distances keep catalog order.
    pub fn nearest_n(&self, sample: Rgb, n: usize, options: &MatchOptions) -> Vec<MatchResult<'_>> {
        let mut results: Vec<MatchResult<'_>> = self
            .candidates(options.collection)
            .map(|color| MatchResult {
                color,
                distance: options.metric.distance(sample, color.rgb),
            })
            .collect();
        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results.truncate(n);
        results
    }

    fn candidates(
        &self,
        collection: Option<CollectionId>,
    ) -> impl Iterator<Item = &ReferenceColor> {
        self.all_colors()
            .iter()
            .filter(move |c| collection.is_none_or(|id| c.collection == id))
    }

    fn closest<D: ColorDistance + ?Sized>(
        &self,
        sample: Rgb,
        metric: &D,
        collection: Option<CollectionId>,
    ) -> Option<MatchResult<'_>> {
        // min_by keeps the first of equal elements
        let best = self
            .candidates(collection)
            .map(|color| MatchResult {
                color,
                distance: metric.distance(sample, color.rgb),
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance));

        match &best {
            Some(m) => log::trace!("closest to {sample}: {} at {:.3}", m.color.id, m.distance),
            None => log::trace!("closest to {sample}: no candidates"),
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColorRecord, builtin};
    use crate::color::Ciede2000;

    fn catalog(entries: &[(&str, &str, CollectionId)]) -> Catalog {
        entries
            .iter()
            .try_fold(Catalog::builder(), |b, (id, hex, collection)| {
                b.add_record(*collection, ColorRecord::new(*id, *id, *hex))
            })
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_exact_match_has_zero_distance() {
        let catalog = builtin();
        for color in catalog.all_colors() {
            let m = catalog.find_closest_color(color.rgb).unwrap();
            assert_eq!(m.color.id, color.id);
            assert_eq!(m.distance, 0.0);
        }
    }

    #[test]
    fn test_empty_catalog_is_none() {
        let empty = Catalog::empty();
        assert!(empty.find_closest_color(Rgb::RED).is_none());
        assert!(empty.find_closest_hex("#ff0000").unwrap().is_none());
        assert!(empty.nearest_n(Rgb::RED, 3, &MatchOptions::default()).is_empty());
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        // #7f0000 and #810000 are both 1 away from #800000
        let catalog = catalog(&[
            ("low", "#7f0000", CollectionId::Chinese),
            ("high", "#810000", CollectionId::Chinese),
        ]);
        let sample = Rgb::new(0x80, 0, 0);
        for _ in 0..3 {
            let m = catalog.find_closest_color(sample).unwrap();
            assert_eq!(m.color.id, "low");
            assert_eq!(m.distance, 1.0);
        }
    }

    #[test]
    fn test_nearest_color_in_builtin() {
        let m = builtin().find_closest_hex("#9e2a34").unwrap().unwrap();
        assert_eq!(m.color.id, "yanzhi");
        assert!((m.distance - 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_collection_restriction() {
        let catalog = builtin();
        let options = MatchOptions::in_collection(CollectionId::Japanese);
        let m = catalog.find_closest_with(Rgb::new(0x0f, 0x4c, 0x81), &options).unwrap();
        assert_eq!(m.color.collection, CollectionId::Japanese);

        let unrestricted = catalog.find_closest_color(Rgb::new(0x0f, 0x4c, 0x81)).unwrap();
        assert_eq!(unrestricted.color.id, "pantone-classic-blue");
    }

    #[test]
    fn test_metric_choice() {
        let catalog = builtin();
        let sample = Rgb::new(120, 60, 160);
        let options = MatchOptions::default().with_metric(DistanceMetric::Ciede2000);
        let by_enum = catalog.find_closest_with(sample, &options).unwrap();
        let by_trait = catalog.find_closest_by(sample, &Ciede2000).unwrap();
        assert_eq!(by_enum.color.id, by_trait.color.id);
        assert_eq!(by_enum.distance, by_trait.distance);
    }

    #[test]
    fn test_nearest_n_sorted() {
        let catalog = catalog(&[
            ("far", "#000000", CollectionId::Chinese),
            ("near-a", "#fe0000", CollectionId::Chinese),
            ("mid", "#c00000", CollectionId::Nature),
            ("near-b", "#ff0001", CollectionId::Nature),
        ]);
        let results = catalog.nearest_n(Rgb::RED, 3, &MatchOptions::default());
        let ids: Vec<&str> = results.iter().map(|m| m.color.id.as_str()).collect();
        assert_eq!(ids, ["near-a", "near-b", "mid"]);

        let options = MatchOptions::in_collection(CollectionId::Nature);
        let nature = catalog.nearest_n(Rgb::RED, 10, &options);
        assert_eq!(nature.len(), 2);
    }

    #[test]
    fn test_invalid_hex_sample() {
        assert!(builtin().find_closest_hex("red").is_err());
    }

    #[test]
    fn test_options_from_json() {
        let options: MatchOptions =
            serde_json::from_str(r#"{"metric": "cie76", "collection": "pantone"}"#).unwrap();
        assert_eq!(options.metric, DistanceMetric::Cie76);
        assert_eq!(options.collection, Some(CollectionId::Pantone));
        let empty: MatchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, MatchOptions::default());
    }
}
