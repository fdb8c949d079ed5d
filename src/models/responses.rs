use serde::{Deserialize, Serialize};
use crate::core::aggregates::CatalogCounts;
use crate::core::pricing::PriceRange;
use crate::models::domain::{Area, Listing};

/// Full catalog payload for initial page load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub listings: Vec<Listing>,
    pub areas: Vec<Area>,
}

/// Filtered listings with the header counts shown above the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub listings: Vec<Listing>,
    #[serde(flatten)]
    pub counts: CatalogCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarResponse {
    #[serde(rename = "listingId")]
    pub listing_id: String,
    pub similar: Vec<Listing>,
}

/// Area detail page payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaDetailResponse {
    pub area: Area,
    pub listings: Vec<Listing>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRangesResponse {
    pub sale: Vec<PriceRange>,
    pub rent: Vec<PriceRange>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub listings: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
