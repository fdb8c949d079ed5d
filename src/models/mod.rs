// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Area, Category, Coordinates, FilterSpec, KindFilter, Listing, TransactionKind};
pub use requests::{ListingQuery, PriceRangeQuery, SimilarQuery};
pub use responses::{AreaDetailResponse, CatalogResponse, ErrorResponse, HealthResponse, ListingsResponse, PriceRangesResponse, SimilarResponse};
