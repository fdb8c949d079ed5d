use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Property category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Apartment,
    House,
    Villa,
    Penthouse,
    Studio,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Apartment,
        Category::House,
        Category::Villa,
        Category::Penthouse,
        Category::Studio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Apartment => "apartment",
            Category::House => "house",
            Category::Villa => "villa",
            Category::Penthouse => "penthouse",
            Category::Studio => "studio",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Whether a listing is offered for sale or for rent.
///
/// Sale prices are one-time amounts, rent prices are monthly amounts.
/// The two scales are never compared against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[serde(alias = "for-sale")]
    Sale,
    #[serde(alias = "for-rent")]
    Rent,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Sale => "sale",
            TransactionKind::Rent => "rent",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" | "for-sale" => Ok(TransactionKind::Sale),
            "rent" | "for-rent" => Ok(TransactionKind::Rent),
            other => Err(format!("unknown transaction kind: {}", other)),
        }
    }
}

/// Transaction-kind criterion of a filter; `All` is inactive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    #[serde(alias = "for-sale")]
    Sale,
    #[serde(alias = "for-rent")]
    Rent,
}

impl KindFilter {
    #[inline]
    pub fn accepts(&self, kind: TransactionKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Sale => kind == TransactionKind::Sale,
            KindFilter::Rent => kind == TransactionKind::Rent,
        }
    }

    pub fn is_active(&self) -> bool {
        *self != KindFilter::All
    }
}

impl FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(KindFilter::All),
            "sale" | "for-sale" => Ok(KindFilter::Sale),
            "rent" | "for-rent" => Ok(KindFilter::Rent),
            other => Err(format!("unknown transaction kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One property record in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Neighborhood reference into the area collection
    #[serde(rename = "area")]
    pub area_id: String,
    pub price: u64,
    #[serde(rename = "priceType")]
    pub kind: TransactionKind,
    #[serde(rename = "type")]
    pub category: Category,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl Listing {
    /// First image of the listing, shown on cards
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A neighborhood grouping listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Cached display count. The live count from the catalog wins when they differ.
    #[serde(rename = "propertyCount", default)]
    pub property_count: usize,
}

/// Set of search criteria applied to the catalog in one query.
///
/// Every field is independently inactive when empty or default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(rename = "area", default)]
    pub area_id: Option<String>,
    #[serde(default)]
    pub kind: KindFilter,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "minPrice", default)]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice", default)]
    pub max_price: Option<f64>,
}

impl FilterSpec {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_area(mut self, area_id: impl Into<String>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    pub fn with_kind(mut self, kind: KindFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category.as_str().to_string());
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// True when no criterion is active, so the filter matches the whole catalog
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, str::is_empty)
            && self.area_id.as_deref().map_or(true, str::is_empty)
            && !self.kind.is_active()
            && self.category.as_deref().map_or(true, str::is_empty)
            && active_bound(self.min_price).is_none()
            && active_bound(self.max_price).is_none()
    }
}

/// A price bound only counts when it is finite and non-negative
#[inline]
pub(crate) fn active_bound(bound: Option<f64>) -> Option<f64> {
    bound.filter(|b| b.is_finite() && *b >= 0.0)
}
