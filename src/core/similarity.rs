use crate::models::Listing;

/// Default number of similar listings shown under a listing
pub const DEFAULT_SIMILAR_LIMIT: usize = 3;

/// Selects related listings for a reference listing
///
/// A candidate is similar when it shares the reference's area or its
/// category. Results keep catalog order; there is no relevance ranking.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityMatcher {
    limit: usize,
}

impl SimilarityMatcher {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Find up to the configured number of listings similar to `reference`
    pub fn similar_to<'a>(&self, reference: &Listing, catalog: &'a [Listing]) -> Vec<&'a Listing> {
        similar_listings(reference, catalog, self.limit)
    }
}

impl Default for SimilarityMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILAR_LIMIT)
    }
}

/// Check if `candidate` is related to `reference`
#[inline]
pub fn is_similar(reference: &Listing, candidate: &Listing) -> bool {
    candidate.id != reference.id
        && (candidate.area_id == reference.area_id || candidate.category == reference.category)
}

/// Take the first `limit` listings related to `reference`, in catalog order
///
/// The reference itself is never part of the result. An empty result is
/// a normal outcome.
pub fn similar_listings<'a>(reference: &Listing, catalog: &'a [Listing], limit: usize) -> Vec<&'a Listing> {
    catalog
        .iter()
        .filter(|candidate| is_similar(reference, candidate))
        .take(limit)
        .collect()
}
