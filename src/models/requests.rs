use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use validator::Validate;
use crate::core::filters::parse_price_bound;
use crate::models::domain::{FilterSpec, KindFilter, TransactionKind};

/// Listing search parameters as they arrive on the query string
///
/// Price bounds stay raw strings so that garbage input degrades to an
/// inactive bound instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ListingQuery {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub search: Option<String>,
    #[validate(length(max = 64))]
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default, alias = "priceType", deserialize_with = "blank_as_none")]
    pub kind: Option<KindFilter>,
    #[validate(length(max = 32))]
    #[serde(default, alias = "type", alias = "propertyType")]
    pub category: Option<String>,
    #[serde(default, rename = "minPrice", alias = "min_price")]
    pub min_price: Option<String>,
    #[serde(default, rename = "maxPrice", alias = "max_price")]
    pub max_price: Option<String>,
}

impl ListingQuery {
    pub fn to_filter_spec(&self) -> FilterSpec {
        FilterSpec {
            search: non_empty(&self.search),
            area_id: non_empty(&self.area),
            kind: self.kind.unwrap_or_default(),
            category: non_empty(&self.category),
            min_price: self.min_price.as_deref().and_then(parse_price_bound),
            max_price: self.max_price.as_deref().and_then(parse_price_bound),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Similar-listing request parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SimilarQuery {
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Price bucket request parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceRangeQuery {
    #[serde(default, alias = "priceType", deserialize_with = "blank_as_none")]
    pub kind: Option<TransactionKind>,
}

/// Parse a closed-set query value, treating `kind=` like an absent parameter
///
/// Unknown non-empty values are still rejected.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => raw.parse().map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
