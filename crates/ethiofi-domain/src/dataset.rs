//! The two-sheet dataset

use crate::record_type::RecordType;
use crate::table::Table;

/// The unified dataset: main records plus impact links
///
/// The two tables are independent; observations, events and targets live in
/// `data`, impact links only in `impact_links`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Main sheet (observations, events, targets)
    pub data: Table,

    /// Impact-links sheet
    pub impact_links: Table,
}

impl Dataset {
    /// Create a dataset from its two sheets
    pub fn new(data: Table, impact_links: Table) -> Self {
        Self { data, impact_links }
    }

    /// Number of main-sheet rows tagged with `record_type`
    ///
    /// Zero when the main sheet has no `record_type` column.
    pub fn count_by_type(&self, record_type: RecordType) -> usize {
        self.data.count_where("record_type", record_type.as_str())
    }
}
