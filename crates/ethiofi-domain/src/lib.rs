//! ethiofi Domain Layer
//!
//! Core data model for the Ethiopia financial-inclusion dataset. The only
//! external dependency is `chrono` for calendar values; spreadsheet, JSON and
//! chart concerns live in the infrastructure crates.
//!
//! ## Key Concepts
//!
//! - **Record**: a row of the unified dataset, tagged by `record_type`
//!   (observation, event, target, impact link)
//! - **Table**: an ordered set of columns with rows of [`CellValue`]s, the
//!   in-memory shape of one spreadsheet sheet
//! - **Dataset**: the main sheet plus the impact-links sheet
//! - **IdAllocator**: the per-session source of `REC_`/`EVT_`/`IMP_` ids
//!
//! ## Architecture
//!
//! - Pure data and business rules only
//! - Trait definitions ([`traits::DatasetSource`]) for the loading seam

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cell;
pub mod confidence;
pub mod dataset;
pub mod error;
pub mod ids;
pub mod impact;
pub mod record;
pub mod record_type;
pub mod table;
pub mod traits;

// Re-exports for convenience
pub use cell::CellValue;
pub use confidence::Confidence;
pub use dataset::Dataset;
pub use error::DomainError;
pub use ids::{IdAllocator, IdPrefix, RecordId};
pub use impact::ImpactDirection;
pub use record::{Event, Extras, ImpactLink, Observation, Record};
pub use record_type::RecordType;
pub use table::{Row, Table};
