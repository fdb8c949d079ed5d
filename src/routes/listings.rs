use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{counts, price_ranges, SimilarityMatcher};
use crate::models::{
    AreaDetailResponse, CatalogResponse, ErrorResponse, HealthResponse, Listing, ListingQuery,
    ListingsResponse, PriceRangeQuery, PriceRangesResponse, SimilarQuery, SimilarResponse,
    TransactionKind,
};
use crate::services::{Catalog, CatalogError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: SimilarityMatcher,
    /// Upper bound for a caller-supplied similar-listing limit
    pub max_similar: usize,
}

/// Configure all catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/catalog", web::get().to(get_catalog))
        .route("/listings", web::get().to(search_listings))
        .route("/listings/featured", web::get().to(featured_listings))
        .route("/listings/{id}", web::get().to(get_listing))
        .route("/listings/{id}/similar", web::get().to(similar_listings))
        .route("/counts", web::get().to(get_counts))
        .route("/areas", web::get().to(list_areas))
        .route("/areas/{id}", web::get().to(get_area))
        .route("/price-ranges", web::get().to(get_price_ranges));
}

fn owned(listings: Vec<&Listing>) -> Vec<Listing> {
    listings.into_iter().cloned().collect()
}

fn bad_request(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn not_found(err: CatalogError) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Not found".to_string(),
        message: err.to_string(),
        status_code: 404,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        listings: state.catalog.listings().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Full catalog for initial load
///
/// GET /api/v1/catalog
async fn get_catalog(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CatalogResponse {
        listings: state.catalog.listings().to_vec(),
        areas: state.catalog.areas().to_vec(),
    })
}

/// Filtered listings with header counts
///
/// GET /api/v1/listings?search=villa&area=waterfront&kind=sale&category=villa&minPrice=1000000&maxPrice=5000000
async fn search_listings(
    state: web::Data<AppState>,
    query: web::Query<ListingQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for listing search: {:?}", errors);
        return bad_request(errors);
    }

    let spec = query.to_filter_spec();
    let result = state.catalog.apply_filters(&spec);
    let counts = counts(state.catalog.listings(), &result);

    tracing::info!(
        "Listing search returned {} of {} listings",
        counts.filtered,
        counts.total
    );
    tracing::debug!("Applied filter: {:?}", spec);

    HttpResponse::Ok().json(ListingsResponse {
        listings: owned(result),
        counts,
    })
}

/// GET /api/v1/listings/featured
async fn featured_listings(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(owned(state.catalog.featured_listings()))
}

/// GET /api/v1/listings/{id}
async fn get_listing(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.find_listing_by_id(&id) {
        Some(listing) => HttpResponse::Ok().json(listing),
        None => {
            tracing::debug!("Listing {} not found", id);
            not_found(CatalogError::ListingNotFound(id))
        }
    }
}

/// Similar listings for a listing detail page
///
/// GET /api/v1/listings/{id}/similar?limit=3
async fn similar_listings(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<SimilarQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return bad_request(errors);
    }

    let id = path.into_inner();
    let matcher = match query.limit {
        Some(limit) => SimilarityMatcher::new(limit.min(state.max_similar)),
        None => state.matcher,
    };

    match state.catalog.similar_to(&id, &matcher) {
        Ok(similar) => {
            tracing::debug!("Found {} similar listings for {}", similar.len(), id);
            HttpResponse::Ok().json(SimilarResponse {
                listing_id: id,
                similar: owned(similar),
            })
        }
        Err(e) => not_found(e),
    }
}

/// Total and filtered counts without the listings themselves
///
/// GET /api/v1/counts?kind=rent
async fn get_counts(
    state: web::Data<AppState>,
    query: web::Query<ListingQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return bad_request(errors);
    }

    HttpResponse::Ok().json(state.catalog.counts_for(&query.to_filter_spec()))
}

/// Areas with live listing counts
///
/// GET /api/v1/areas
async fn list_areas(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.areas_with_live_counts())
}

/// Area detail with its listings
///
/// GET /api/v1/areas/{id}
async fn get_area(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    let Some(area) = state.catalog.find_area_by_id(&id) else {
        return not_found(CatalogError::AreaNotFound(id));
    };

    let listings = owned(state.catalog.listings_by_area(&id));
    let mut area = area.clone();
    area.property_count = listings.len();

    HttpResponse::Ok().json(AreaDetailResponse { area, listings })
}

/// Preset price buckets for the filter bar
///
/// GET /api/v1/price-ranges?kind=rent
async fn get_price_ranges(query: web::Query<PriceRangeQuery>) -> impl Responder {
    let (sale, rent) = match query.kind {
        Some(TransactionKind::Sale) => (price_ranges(TransactionKind::Sale), vec![]),
        Some(TransactionKind::Rent) => (vec![], price_ranges(TransactionKind::Rent)),
        None => (
            price_ranges(TransactionKind::Sale),
            price_ranges(TransactionKind::Rent),
        ),
    };

    HttpResponse::Ok().json(PriceRangesResponse { sale, rent })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn create_state() -> AppState {
        AppState {
            catalog: Arc::new(Catalog::embedded().unwrap()),
            matcher: SimilarityMatcher::default(),
            max_similar: 5,
        }
    }

    #[actix_web::test]
    async fn test_health_check_response() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.listings, 8);
    }

    #[actix_web::test]
    async fn test_similar_limit_is_capped() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        // listing 3 is a house: 4 and 6 share the category, nothing shares the area
        let req = test::TestRequest::get().uri("/listings/3/similar?limit=50").to_request();
        let resp: SimilarResponse = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<_> = resp.similar.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "6"]);
    }
}
