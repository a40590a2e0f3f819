//! Parcel and pricing types plus the fixed, compiled-in parcel catalog.
//!
//! The catalog is loaded once from the CSV fixtures under `fixtures/` and is
//! read-only afterwards. A parcel's position in the catalog is its only
//! identifier.

pub mod catalog;
pub mod error;
pub mod format;
pub mod parcel;
pub mod pricing;

pub use catalog::{Catalog, CatalogEntry};
pub use error::{CatalogError, Result};
pub use parcel::{Bounds, LatLng, LegalTone, ParcelRecord};
pub use pricing::{PricingSnapshot, Transaction, TrendPoint};
