//! Related-color ranking
//!
//! Candidates for "compare with" suggestions. Membership in the target's
//! collection always outranks tag overlap; within each class more shared
//! tags rank higher and equal ranks keep catalog order.

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::{Catalog, ReferenceColor};

/// Relevance of one candidate to a target color
///
/// Orders by `same_collection` first, then `shared_tags`. Greater means
/// more relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Relevance {
    pub same_collection: bool,
    pub shared_tags: usize,
}

impl Ord for Relevance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.same_collection
            .cmp(&other.same_collection)
            .then(self.shared_tags.cmp(&other.shared_tags))
    }
}

impl PartialOrd for Relevance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Score `candidate` against `target`
pub fn relevance(target: &ReferenceColor, candidate: &ReferenceColor) -> Relevance {
    Relevance {
        same_collection: target.collection == candidate.collection,
        shared_tags: target.shared_tags(candidate),
    }
}

impl Catalog {
    /// Up to `limit` entries most related to `color`, most relevant first
    ///
    /// `color` itself is never included. An absent color yields an empty
    /// list.
    pub fn related_colors(
        &self,
        color: Option<&ReferenceColor>,
        limit: usize,
    ) -> Vec<&ReferenceColor> {
        let Some(target) = color else {
            return Vec::new();
        };

        let mut ranked: Vec<(Relevance, &ReferenceColor)> = self
            .all_colors()
            .iter()
            .filter(|c| c.id != target.id)
            .map(|c| (relevance(target, c), c))
            .collect();

        // sort_by is stable, so equal relevance keeps catalog order
        ranked.sort_by(|(a, _), (b, _)| b.cmp(a));

        ranked.into_iter().take(limit).map(|(_, c)| c).collect()
    }
}
