//! Record identifiers and the per-session id allocator

use crate::dataset::Dataset;
use crate::error::DomainError;
use std::fmt;

/// Prefix of a generated record id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdPrefix {
    /// Observations (and targets entered as observations)
    Rec,
    /// Events
    Evt,
    /// Impact links
    Imp,
}

impl IdPrefix {
    /// Prefix text as it appears in ids
    pub fn as_str(&self) -> &'static str {
        match self {
            IdPrefix::Rec => "REC",
            IdPrefix::Evt => "EVT",
            IdPrefix::Imp => "IMP",
        }
    }
}

/// Identifier of a dataset record, e.g. `REC_1001`
///
/// Generated ids have the shape `PREFIX_####` (at least four digits).
/// Persisted ids are kept as read, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Build the id for `prefix` and counter value `number`
    pub fn generated(prefix: IdPrefix, number: u64) -> Self {
        Self(format!("{}_{:04}", prefix.as_str(), number))
    }

    /// Wrap an existing id string (e.g. a `parent_id` supplied by a caller)
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Parse a generated id, checking the `PREFIX_####` shape
    pub fn parse_generated(s: &str) -> Result<(IdPrefix, u64), DomainError> {
        let invalid = || DomainError::InvalidRecordId(s.to_string());
        let (prefix, digits) = s.split_once('_').ok_or_else(invalid)?;
        let prefix = match prefix {
            "REC" => IdPrefix::Rec,
            "EVT" => IdPrefix::Evt,
            "IMP" => IdPrefix::Imp,
            _ => return Err(invalid()),
        };
        if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number = digits.parse().map_err(|_| invalid())?;
        Ok((prefix, number))
    }

    /// Trailing run of digits, if any (`"ACC_0042"` → `42`)
    pub fn trailing_number(&self) -> Option<u64> {
        let digits: String = self
            .0
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        digits.parse().ok()
    }

    /// Borrow the id text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotonic id source owned by one enrichment session
///
/// One counter is shared by all prefixes, so `REC_1001` and `EVT_1001` can
/// never both be issued. The seed is always explicit; use
/// [`IdAllocator::above_existing`] to start past the ids already persisted
/// in a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    /// Allocator whose first id number is `seed + 1`
    pub fn starting_after(seed: u64) -> Self {
        Self { last: seed }
    }

    /// Allocator seeded past every numbered id in `dataset`
    ///
    /// Scans the `record_id` column of both sheets; the seed is the larger of
    /// `floor` and the highest trailing number found.
    pub fn above_existing(dataset: &Dataset, floor: u64) -> Self {
        let highest = [&dataset.data, &dataset.impact_links]
            .into_iter()
            .flat_map(|table| table.column_values("record_id"))
            .filter_map(|cell| match cell {
                crate::CellValue::Text(s) => RecordId::from_string(s.as_str()).trailing_number(),
                crate::CellValue::Int(i) => u64::try_from(*i).ok(),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        Self::starting_after(highest.max(floor))
    }

    /// Issue the next id for `prefix`
    pub fn allocate(&mut self, prefix: IdPrefix) -> RecordId {
        self.last += 1;
        RecordId::generated(prefix, self.last)
    }

    /// The most recently issued counter value (the seed before any issue)
    pub fn current(&self) -> u64 {
        self.last
    }
}
