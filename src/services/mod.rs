// Service exports
pub mod catalog;

pub use catalog::{Catalog, CatalogError, SeedData};
