use serde::{Deserialize, Serialize};
use crate::models::{FilterSpec, TransactionKind};

/// Preset price bucket offered by the filter bar
///
/// A bucket only carries raw bounds; the filter engine never sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub label: String,
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl PriceRange {
    fn new(label: &str, min: Option<u64>, max: Option<u64>) -> Self {
        Self {
            label: label.to_string(),
            min,
            max,
        }
    }

    /// Copy the bucket bounds onto a filter
    pub fn apply_to(&self, spec: FilterSpec) -> FilterSpec {
        spec.with_price_range(self.min.map(|v| v as f64), self.max.map(|v| v as f64))
    }
}

/// Preset buckets for one transaction kind, "any price" first
pub fn price_ranges(kind: TransactionKind) -> Vec<PriceRange> {
    match kind {
        TransactionKind::Sale => vec![
            PriceRange::new("Any Price", None, None),
            PriceRange::new("Under $1M", Some(0), Some(1_000_000)),
            PriceRange::new("$1M - $3M", Some(1_000_000), Some(3_000_000)),
            PriceRange::new("$3M - $5M", Some(3_000_000), Some(5_000_000)),
            PriceRange::new("$5M+", Some(5_000_000), None),
        ],
        TransactionKind::Rent => vec![
            PriceRange::new("Any Price", None, None),
            PriceRange::new("Under $5K/mo", Some(0), Some(5_000)),
            PriceRange::new("$5K - $10K/mo", Some(5_000), Some(10_000)),
            PriceRange::new("$10K - $20K/mo", Some(10_000), Some(20_000)),
            PriceRange::new("$20K+/mo", Some(20_000), None),
        ],
    }
}

/// Render a price for display, e.g. `$2,500,000` or `$4,500/mo`
pub fn format_price(price: u64, kind: TransactionKind) -> String {
    let amount = group_thousands(price);
    match kind {
        TransactionKind::Sale => format!("${}", amount),
        TransactionKind::Rent => format!("${}/mo", amount),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
