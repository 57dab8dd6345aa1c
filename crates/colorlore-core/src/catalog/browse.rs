//! Route enumeration over the catalog
//!
//! Data behind per-tag category pages and `<id>-vs-<id>` comparison pages.
//! Nothing here renders or routes; callers get ids and entries back.

use super::{Catalog, ReferenceColor};

const VS: &str = "-vs-";

impl Catalog {
    /// Every tag in the catalog, in first-seen order
    pub fn unique_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.colors.iter().flat_map(|c| c.tags.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Entries carrying `tag`, in catalog order
    pub fn colors_with_tag(&self, tag: &str) -> Vec<&ReferenceColor> {
        self.colors.iter().filter(|c| c.has_tag(tag)).collect()
    }

    /// Comparison candidates grouped by tag
    ///
    /// For each tag, every unordered pair among the first `per_tag` entries
    /// carrying it. Pairs already produced by an earlier tag are skipped, so
    /// each pair appears once.
    pub fn comparison_pairs<S: AsRef<str>>(
        &self,
        tags: &[S],
        per_tag: usize,
    ) -> Vec<(&ReferenceColor, &ReferenceColor)> {
        let mut pairs: Vec<(&ReferenceColor, &ReferenceColor)> = Vec::new();
        for tag in tags {
            let group: Vec<&ReferenceColor> = self
                .colors
                .iter()
                .filter(|c| c.has_tag(tag.as_ref()))
                .take(per_tag)
                .collect();

            for (i, a) in group.iter().enumerate() {
                for b in &group[i + 1..] {
                    let seen = pairs.iter().any(|(x, y)| {
                        (x.id == a.id && y.id == b.id) || (x.id == b.id && y.id == a.id)
                    });
                    if !seen {
                        pairs.push((*a, *b));
                    }
                }
            }
        }
        pairs
    }

    /// Resolve a `<id>-vs-<id>` slug to its two entries
    ///
    /// Ids may themselves contain hyphens, so every `-vs-` split point is
    /// tried from the left and the first one naming two known ids wins.
    pub fn resolve_comparison(&self, slug: &str) -> Option<(&ReferenceColor, &ReferenceColor)> {
        slug.match_indices(VS).find_map(|(at, _)| {
            let left = self.color_by_id(&slug[..at])?;
            let right = self.color_by_id(&slug[at + VS.len()..])?;
            Some((left, right))
        })
    }
}

/// Comparison page slug for two entries
pub fn comparison_slug(a: &ReferenceColor, b: &ReferenceColor) -> String {
    format!("{}{VS}{}", a.id, b.id)
}
