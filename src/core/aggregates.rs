use serde::{Deserialize, Serialize};
use crate::models::{Area, Listing};

/// Header counts for the listing grid ("Showing N of M")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCounts {
    pub total: usize,
    pub filtered: usize,
}

/// Live listing count for one area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCount {
    #[serde(rename = "areaId")]
    pub area_id: String,
    pub count: usize,
}

#[inline]
pub fn total_count(catalog: &[Listing]) -> usize {
    catalog.len()
}

#[inline]
pub fn filtered_count(result: &[&Listing]) -> usize {
    result.len()
}

pub fn counts(catalog: &[Listing], result: &[&Listing]) -> CatalogCounts {
    CatalogCounts {
        total: total_count(catalog),
        filtered: filtered_count(result),
    }
}

/// Number of listings whose neighborhood is `area`
pub fn area_property_count(area: &Area, catalog: &[Listing]) -> usize {
    catalog.iter().filter(|l| l.area_id == area.id).count()
}

/// Live count per area, in area order
pub fn area_counts(areas: &[Area], catalog: &[Listing]) -> Vec<AreaCount> {
    areas
        .iter()
        .map(|area| AreaCount {
            area_id: area.id.clone(),
            count: area_property_count(area, catalog),
        })
        .collect()
}

/// Copy of `areas` with each cached `property_count` replaced by the live count
///
/// The live value wins whenever the two disagree.
pub fn refresh_area_counts(areas: &[Area], catalog: &[Listing]) -> Vec<Area> {
    areas
        .iter()
        .map(|area| {
            let live = area_property_count(area, catalog);
            if live != area.property_count {
                tracing::debug!(
                    "Area {} caches {} listings but catalog holds {}",
                    area.id,
                    area.property_count,
                    live
                );
            }
            Area {
                property_count: live,
                ..area.clone()
            }
        })
        .collect()
}
