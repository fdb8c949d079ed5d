//! Luxe Catalog - read-only property catalog for the Luxe real-estate site
//!
//! This library holds the listing catalog and the pure query logic behind
//! the properties pages: filter composition, similar-listing matching and
//! display counts. The HTTP layer is a thin adapter over these functions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{apply_filters, similar_listings, CatalogCounts, SimilarityMatcher};
pub use models::{Area, Category, FilterSpec, KindFilter, Listing, TransactionKind};
pub use services::{Catalog, CatalogError};
