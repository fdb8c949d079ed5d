// Unit tests for Luxe Catalog

use luxe_catalog::core::{
    aggregates::{area_counts, area_property_count},
    filters::{matches_filters, parse_price_bound},
    pricing::{format_price, price_ranges},
    similarity::is_similar,
};
use luxe_catalog::models::{Area, Category, FilterSpec, KindFilter, Listing, TransactionKind};

fn create_listing(id: &str, area: &str, category: Category, kind: TransactionKind, price: u64) -> Listing {
    Listing {
        id: id.to_string(),
        title: "Harbor View Residence".to_string(),
        location: "10 Pier Road, Waterfront".to_string(),
        area_id: area.to_string(),
        price,
        kind,
        category,
        bedrooms: 3,
        bathrooms: 2,
        sqft: 1800,
        images: vec!["/harbor.jpg".to_string()],
        featured: false,
        description: "Bright rooms overlooking the marina".to_string(),
        amenities: vec!["Concierge".to_string()],
        coordinates: None,
    }
}

#[test]
fn test_search_checks_each_text_field() {
    let listing = create_listing("1", "waterfront", Category::Apartment, TransactionKind::Sale, 900_000);

    assert!(matches_filters(&listing, &FilterSpec::default().with_search("harbor")));
    assert!(matches_filters(&listing, &FilterSpec::default().with_search("PIER ROAD")));
    assert!(matches_filters(&listing, &FilterSpec::default().with_search("Marina")));
    assert!(!matches_filters(&listing, &FilterSpec::default().with_search("mountain")));
}

#[test]
fn test_kind_filter_all_is_inactive() {
    let sale = create_listing("1", "waterfront", Category::Villa, TransactionKind::Sale, 1);
    let rent = create_listing("2", "waterfront", Category::Villa, TransactionKind::Rent, 1);
    let spec = FilterSpec::default().with_kind(KindFilter::All);

    assert!(matches_filters(&sale, &spec));
    assert!(matches_filters(&rent, &spec));
}

#[test]
fn test_zero_max_price_is_active() {
    let listing = create_listing("1", "waterfront", Category::Villa, TransactionKind::Sale, 10);
    let spec = FilterSpec::default().with_price_range(None, Some(0.0));
    assert!(!matches_filters(&listing, &spec));
}

#[test]
fn test_price_bound_parsing_never_fails() {
    for raw in ["", "  ", "abc", "-100", "1e400", "NaN", "12abc"] {
        assert_eq!(parse_price_bound(raw), None, "{:?} should be inactive", raw);
    }
    assert_eq!(parse_price_bound("2500.50"), Some(2500.5));
}

#[test]
fn test_similarity_rule() {
    let reference = create_listing("1", "hills", Category::House, TransactionKind::Sale, 1);
    let same_area = create_listing("2", "hills", Category::Studio, TransactionKind::Rent, 1);
    let same_category = create_listing("3", "lakeside", Category::House, TransactionKind::Rent, 1);
    let unrelated = create_listing("4", "lakeside", Category::Studio, TransactionKind::Sale, 1);

    assert!(!is_similar(&reference, &reference));
    assert!(is_similar(&reference, &same_area));
    assert!(is_similar(&reference, &same_category));
    assert!(!is_similar(&reference, &unrelated));
}

#[test]
fn test_area_counts() {
    let areas = vec![
        Area {
            id: "hills".to_string(),
            name: "The Hills".to_string(),
            description: String::new(),
            image: "/hills.jpg".to_string(),
            property_count: 12,
        },
        Area {
            id: "lakeside".to_string(),
            name: "Lakeside".to_string(),
            description: String::new(),
            image: "/lake.jpg".to_string(),
            property_count: 10,
        },
    ];
    let catalog = vec![
        create_listing("1", "hills", Category::House, TransactionKind::Sale, 1),
        create_listing("2", "hills", Category::Villa, TransactionKind::Sale, 1),
    ];

    assert_eq!(area_property_count(&areas[0], &catalog), 2);
    let counts = area_counts(&areas, &catalog);
    assert_eq!(counts.iter().map(|c| c.count).collect::<Vec<_>>(), vec![2, 0]);
}

#[test]
fn test_price_display_by_kind() {
    assert_eq!(format_price(4_800_000, TransactionKind::Sale), "$4,800,000");
    assert_eq!(format_price(15_000, TransactionKind::Rent), "$15,000/mo");
}

#[test]
fn test_sale_and_rent_buckets_differ() {
    let sale = price_ranges(TransactionKind::Sale);
    let rent = price_ranges(TransactionKind::Rent);
    assert_eq!(sale.last().and_then(|r| r.min), Some(5_000_000));
    assert_eq!(rent.last().and_then(|r| r.min), Some(20_000));
}
