//! `tractsum-engine` — Surface acreage inventory engine.
//!
//! Pure engine crate: receives pre-loaded ownership records, returns the
//! classified trust tracts and the acreage rollup. No file I/O.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod summary;
pub mod unity;

pub use config::InventoryConfig;
pub use engine::run;
pub use error::InventoryError;
pub use model::{AcreageSummary, Extract, InventoryResult, OwnershipRecord, SummaryRow};
