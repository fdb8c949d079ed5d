// Core query exports
pub mod aggregates;
pub mod filters;
pub mod pricing;
pub mod similarity;

pub use aggregates::{area_counts, area_property_count, counts, filtered_count, refresh_area_counts, total_count, AreaCount, CatalogCounts};
pub use filters::{apply_filters, matches_filters, matches_search, parse_price_bound};
pub use pricing::{format_price, price_ranges, PriceRange};
pub use similarity::{is_similar, similar_listings, SimilarityMatcher, DEFAULT_SIMILAR_LIMIT};
