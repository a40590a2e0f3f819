//! Address resolution and selection state for the parcel valuation app.
//!
//! This crate provides:
//! - `resolver`: fuzzy address matching over the catalog (suggest and commit modes)
//! - `selection`: the `Searching → Editing → Reviewing` session state
//! - `edit`: typed edits applied to the working copy of a parcel
//! - `config`: resolver tuning

pub mod config;
pub mod edit;
pub mod error;
mod matching;
pub mod resolver;
pub mod selection;

pub use config::ResolverConfig;
pub use edit::{FieldEdit, FACILITY_CHECKLIST};
pub use error::{ConfigError, ResolveError, SelectionError};
pub use resolver::{AddressResolver, Match, Resolution};
pub use selection::{ParcelView, Phase, SelectionController};
