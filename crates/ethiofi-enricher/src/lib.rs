//! ethiofi Enricher
//!
//! Accumulates new observations, events and impact links in an append-only
//! session log and merges them into a persisted dataset.
//!
//! # Overview
//!
//! Records are created in memory by explicit calls, kept in insertion order,
//! and become durable only when merged into the two-sheet workbook. Ids come
//! from an [`IdAllocator`](ethiofi_domain::IdAllocator) owned by the session.
//!
//! # Architecture
//!
//! ```text
//! add_* → enrichment log → merge_enrichments → (data, impact_links) → xlsx
//!                        ↘ save_enrichment_log → JSON audit file
//! ```
//!
//! The log is never cleared implicitly: merging twice without calling
//! [`DataEnricher::clear_enrichment_log`] appends the same rows twice.
//!
//! # Example Usage
//!
//! ```no_run
//! use ethiofi_enricher::{DataEnricher, EnricherConfig, EventInput, ImpactLinkInput};
//! use ethiofi_domain::ImpactDirection;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut enricher = DataEnricher::new(EnricherConfig::default());
//!
//! let event = enricher.add_event(EventInput::new(
//!     "policy",
//!     "2024-07-29",
//!     "National Bank of Ethiopia",
//!     "https://nbe.gov.et",
//!     "Foreign exchange liberalization",
//! ))?;
//! enricher.add_impact_link(ImpactLinkInput::new(
//!     event.id.as_str(),
//!     "usage",
//!     "USG_DIGITAL_PAYMENT",
//!     ImpactDirection::Increase,
//! ))?;
//!
//! let merged = enricher.merge_enrichments(
//!     Path::new("data/raw/ethiopia_fi_unified_data.xlsx"),
//!     Some(Path::new("data/processed/enriched.xlsx")),
//! )?;
//! println!("{} rows", merged.data.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod clock;
mod config;
mod enricher;
mod error;
mod log;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EnricherConfig;
pub use enricher::DataEnricher;
pub use error::EnricherError;
pub use log::{EnrichmentEntry, EntryKind, PendingCounts};
pub use types::{EventInput, ImpactLinkInput, ObservationInput};

#[cfg(test)]
mod tests;
