use crate::core::{aggregates, filters, similarity::SimilarityMatcher};
use crate::core::aggregates::CatalogCounts;
use crate::models::{Area, FilterSpec, Listing};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Sample catalog compiled into the binary
const EMBEDDED_SEED: &str = include_str!("../../data/catalog.json");

/// Errors that can occur when loading or querying the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate listing id: {0}")]
    DuplicateListing(String),

    #[error("Duplicate area id: {0}")]
    DuplicateArea(String),

    #[error("Listing {listing} references unknown area {area}")]
    UnknownArea { listing: String, area: String },

    #[error("Listing {0} has no images")]
    MissingImages(String),

    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    #[error("Area not found: {0}")]
    AreaNotFound(String),
}

/// Raw seed document as supplied by the seed loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub areas: Vec<Area>,
    pub listings: Vec<Listing>,
}

/// Read-only store of listings and areas
///
/// Loaded once at startup and never mutated afterwards, so it can be
/// shared across workers behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
    areas: Vec<Area>,
}

impl Catalog {
    /// Build a catalog from seed data, checking referential integrity
    pub fn from_seed(seed: SeedData) -> Result<Self, CatalogError> {
        let mut area_ids = HashSet::with_capacity(seed.areas.len());
        for area in &seed.areas {
            if !area_ids.insert(area.id.as_str()) {
                return Err(CatalogError::DuplicateArea(area.id.clone()));
            }
        }

        let mut listing_ids = HashSet::with_capacity(seed.listings.len());
        for listing in &seed.listings {
            if !listing_ids.insert(listing.id.as_str()) {
                return Err(CatalogError::DuplicateListing(listing.id.clone()));
            }
            if !area_ids.contains(listing.area_id.as_str()) {
                return Err(CatalogError::UnknownArea {
                    listing: listing.id.clone(),
                    area: listing.area_id.clone(),
                });
            }
            if listing.images.is_empty() {
                return Err(CatalogError::MissingImages(listing.id.clone()));
            }
        }

        for area in &seed.areas {
            let live = aggregates::area_property_count(area, &seed.listings);
            if live != area.property_count {
                tracing::warn!(
                    "Area {} cached count {} differs from live count {}, serving live count",
                    area.id,
                    area.property_count,
                    live
                );
            }
        }

        tracing::info!(
            "Catalog loaded: {} listings across {} areas",
            seed.listings.len(),
            seed.areas.len()
        );

        Ok(Self {
            listings: seed.listings,
            areas: seed.areas,
        })
    }

    /// Parse and validate a JSON seed document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let seed: SeedData = serde_json::from_str(json)?;
        Self::from_seed(seed)
    }

    /// Load the sample catalog shipped with the crate
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Load a seed file from disk
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::info!("Loading catalog seed from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn find_listing_by_id(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn find_area_by_id(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    /// Listings in one area, in catalog order. Unknown areas yield nothing.
    pub fn listings_by_area(&self, area_id: &str) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.area_id == area_id).collect()
    }

    pub fn featured_listings(&self) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.featured).collect()
    }

    pub fn apply_filters(&self, spec: &FilterSpec) -> Vec<&Listing> {
        filters::apply_filters(&self.listings, spec)
    }

    pub fn counts_for(&self, spec: &FilterSpec) -> CatalogCounts {
        let result = self.apply_filters(spec);
        aggregates::counts(&self.listings, &result)
    }

    /// Listings similar to the listing with `listing_id`
    ///
    /// Only the reference lookup can fail; an empty match set is `Ok`.
    pub fn similar_to(&self, listing_id: &str, matcher: &SimilarityMatcher) -> Result<Vec<&Listing>, CatalogError> {
        let reference = self
            .find_listing_by_id(listing_id)
            .ok_or_else(|| CatalogError::ListingNotFound(listing_id.to_string()))?;
        Ok(matcher.similar_to(reference, &self.listings))
    }

    /// Areas with their cached count replaced by the live count
    pub fn areas_with_live_counts(&self) -> Vec<Area> {
        aggregates::refresh_area_counts(&self.areas, &self.listings)
    }
}
