use crate::models::domain::{active_bound, FilterSpec, Listing};

/// Check if a listing matches the free-text query
///
/// Case-insensitive substring match against title, location or description.
/// `needle` must already be lowercased.
#[inline]
pub fn matches_search(listing: &Listing, needle: &str) -> bool {
    listing.title.to_lowercase().contains(needle)
        || listing.location.to_lowercase().contains(needle)
        || listing.description.to_lowercase().contains(needle)
}

/// Check if a listing satisfies every active criterion of the filter
///
/// Criteria are evaluated in a fixed order and the first failure rejects
/// the listing. The order only affects cost, never the result.
#[inline]
pub fn matches_filters(listing: &Listing, spec: &FilterSpec) -> bool {
    let needle = search_needle(spec);
    matches_with_needle(listing, spec, needle.as_deref())
}

/// Lowercased free-text query, `None` when the query is inactive
fn search_needle(spec: &FilterSpec) -> Option<String> {
    spec.search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

#[inline]
fn matches_with_needle(listing: &Listing, spec: &FilterSpec, needle: Option<&str>) -> bool {
    // Free-text query
    if let Some(needle) = needle {
        if !matches_search(listing, needle) {
            return false;
        }
    }

    // Area
    if let Some(area_id) = spec.area_id.as_deref().filter(|a| !a.is_empty()) {
        if listing.area_id != area_id {
            return false;
        }
    }

    // Sale or rent
    if !spec.kind.accepts(listing.kind) {
        return false;
    }

    // Category
    if let Some(category) = spec.category.as_deref().filter(|c| !c.is_empty()) {
        if listing.category.as_str() != category {
            return false;
        }
    }

    // Price range, compared on the listing's own scale
    let price = listing.price as f64;
    if let Some(min) = active_bound(spec.min_price) {
        if price < min {
            return false;
        }
    }
    if let Some(max) = active_bound(spec.max_price) {
        if price > max {
            return false;
        }
    }

    true
}

/// Apply a filter to the catalog, keeping catalog order
///
/// The search query is lowercased once for the whole pass.
pub fn apply_filters<'a>(listings: &'a [Listing], spec: &FilterSpec) -> Vec<&'a Listing> {
    if spec.is_empty() {
        return listings.iter().collect();
    }

    let needle = search_needle(spec);
    listings
        .iter()
        .filter(|listing| matches_with_needle(listing, spec, needle.as_deref()))
        .collect()
}

/// Parse a raw price bound from user input
///
/// Empty, non-numeric, negative and non-finite input yields `None`,
/// which leaves the bound inactive.
pub fn parse_price_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => {
            tracing::debug!("Ignoring invalid price bound: {:?}", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Category, KindFilter, TransactionKind};

    fn create_test_listing(id: &str, area: &str, kind: TransactionKind, category: Category, price: u64) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Listing {}", id),
            location: format!("{} Main Street", id),
            area_id: area.to_string(),
            price,
            kind,
            category,
            bedrooms: 2,
            bathrooms: 1,
            sqft: 1200,
            images: vec!["/cover.jpg".to_string()],
            featured: false,
            description: "A quiet place near the park".to_string(),
            amenities: vec![],
            coordinates: None,
        }
    }

    fn create_test_catalog() -> Vec<Listing> {
        vec![
            create_test_listing("a", "downtown", TransactionKind::Sale, Category::Penthouse, 2_000_000),
            create_test_listing("b", "hills", TransactionKind::Rent, Category::House, 9_000),
            create_test_listing("c", "downtown", TransactionKind::Rent, Category::Studio, 3_000),
        ]
    }

    #[test]
    fn test_empty_spec_matches_everything() {
        let catalog = create_test_catalog();
        let result = apply_filters(&catalog, &FilterSpec::default());
        let ids: Vec<_> = result.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let listing = create_test_listing("a", "downtown", TransactionKind::Sale, Category::Villa, 1);
        assert!(matches_filters(&listing, &FilterSpec::default().with_search("PARK")));
        assert!(matches_filters(&listing, &FilterSpec::default().with_search("main STREET")));
        assert!(!matches_filters(&listing, &FilterSpec::default().with_search("ocean")));
    }

    #[test]
    fn test_mixed_case_query_matches_in_batch_and_single() {
        let catalog = create_test_catalog();
        let spec = FilterSpec::default().with_search("QuIeT PaRk");
        assert_eq!(apply_filters(&catalog, &spec).len(), catalog.len());
        assert!(catalog.iter().all(|l| matches_filters(l, &spec)));
        assert_eq!(search_needle(&spec).as_deref(), Some("quiet park"));
        assert_eq!(search_needle(&FilterSpec::default().with_search("")), None);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let catalog = create_test_catalog();
        let spec = FilterSpec::default()
            .with_area("downtown")
            .with_kind(KindFilter::Rent);
        let result = apply_filters(&catalog, &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "c");
    }

    #[test]
    fn test_category_filter() {
        let catalog = create_test_catalog();
        let result = apply_filters(&catalog, &FilterSpec::default().with_category(Category::House));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b");
    }

    #[test]
    fn test_unknown_area_and_category_yield_empty() {
        let catalog = create_test_catalog();
        assert!(apply_filters(&catalog, &FilterSpec::default().with_area("atlantis")).is_empty());

        let spec = FilterSpec {
            category: Some("castle".to_string()),
            ..Default::default()
        };
        assert!(apply_filters(&catalog, &spec).is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let catalog = create_test_catalog();
        let spec = FilterSpec::default().with_price_range(Some(3_000.0), Some(9_000.0));
        let ids: Vec<_> = apply_filters(&catalog, &spec).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn test_inverted_price_range_is_empty() {
        let catalog = create_test_catalog();
        let spec = FilterSpec::default().with_price_range(Some(10_000.0), Some(5_000.0));
        assert!(apply_filters(&catalog, &spec).is_empty());
    }

    #[test]
    fn test_negative_bound_is_inactive() {
        let catalog = create_test_catalog();
        let spec = FilterSpec::default().with_price_range(Some(-5.0), Some(f64::NAN));
        assert_eq!(apply_filters(&catalog, &spec).len(), catalog.len());
    }

    #[test]
    fn test_parse_price_bound() {
        assert_eq!(parse_price_bound("5000000"), Some(5_000_000.0));
        assert_eq!(parse_price_bound(" 1500 "), Some(1_500.0));
        assert_eq!(parse_price_bound("0"), Some(0.0));
        assert_eq!(parse_price_bound(""), None);
        assert_eq!(parse_price_bound("cheap"), None);
        assert_eq!(parse_price_bound("-1"), None);
        assert_eq!(parse_price_bound("inf"), None);
    }
}
