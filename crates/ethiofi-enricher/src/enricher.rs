//! Enrichment session: record construction, merging, and the audit log

use crate::clock::{Clock, SystemClock};
use crate::config::EnricherConfig;
use crate::error::EnricherError;
use crate::log::{EnrichmentEntry, EntryKind, PendingCounts};
use crate::types::{EventInput, ImpactLinkInput, ObservationInput};
use ethiofi_domain::record::{EVENT_COLUMNS, IMPACT_LINK_COLUMNS, OBSERVATION_COLUMNS};
use ethiofi_domain::{
    Dataset, Event, Extras, IdAllocator, IdPrefix, ImpactLink, Observation, Record, RecordId,
    RecordType, Table,
};
use ethiofi_store::config::SheetNames;
use ethiofi_store::workbook;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

type Result<T> = std::result::Result<T, EnricherError>;

/// An enrichment session
///
/// Owns the id allocator and the log of records added since creation (or
/// since the last [`clear_enrichment_log`](Self::clear_enrichment_log)).
pub struct DataEnricher {
    config: EnricherConfig,
    ids: IdAllocator,
    log: Vec<EnrichmentEntry>,
    clock: Box<dyn Clock + Send + Sync>,
}

impl DataEnricher {
    /// Start a session whose first id number is `config.id_seed + 1`
    pub fn new(config: EnricherConfig) -> Self {
        let ids = IdAllocator::starting_after(config.id_seed);
        Self::with_allocator(config, ids)
    }

    /// Start a session whose ids sort above every numbered id in `dataset`
    pub fn for_dataset(config: EnricherConfig, dataset: &Dataset) -> Self {
        let ids = IdAllocator::above_existing(dataset, config.id_seed);
        debug!("Seeded id counter at {}", ids.current());
        Self::with_allocator(config, ids)
    }

    /// Start a session with an explicit allocator
    pub fn with_allocator(config: EnricherConfig, ids: IdAllocator) -> Self {
        Self {
            config,
            ids,
            log: Vec::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Session configuration
    pub fn config(&self) -> &EnricherConfig {
        &self.config
    }

    /// Current id allocator state
    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Record a new observation (or target)
    ///
    /// # Errors
    ///
    /// [`EnricherError::InvalidInput`] when `record_type` is neither
    /// observation nor target, [`EnricherError::ReservedField`] when an extra
    /// names a core column. Nothing is logged on error.
    pub fn add_observation(&mut self, input: ObservationInput) -> Result<Observation> {
        if !matches!(input.record_type, RecordType::Observation | RecordType::Target) {
            return Err(EnricherError::InvalidInput(format!(
                "add_observation cannot record type '{}'",
                input.record_type
            )));
        }
        check_extras(&input.extras, OBSERVATION_COLUMNS, "observation")?;

        let now = self.clock.now();
        let observation = Observation {
            id: self.ids.allocate(IdPrefix::Rec),
            record_type: input.record_type,
            pillar: input.pillar,
            indicator: input.indicator,
            indicator_code: input.indicator_code,
            value_numeric: input.value_numeric,
            observation_date: input.observation_date,
            source_name: input.source_name,
            source_url: input.source_url,
            confidence: input.confidence,
            collected_by: self.collector(input.collected_by),
            collection_date: now.date(),
            original_text: input.original_text.unwrap_or_default(),
            notes: input.notes.unwrap_or_default(),
            extras: input.extras,
        };

        info!(
            "Added observation: {} = {} on {}",
            observation.indicator_code, observation.value_numeric, observation.observation_date
        );
        self.push(EntryKind::Observation, observation.clone().into(), now);
        Ok(observation)
    }

    /// Record a new event
    ///
    /// The indicator code is derived as `EVT_<CATEGORY>_<nnnn>` from the
    /// upper-cased category and the id number just issued. Events carry no
    /// pillar.
    pub fn add_event(&mut self, input: EventInput) -> Result<Event> {
        check_extras(&input.extras, EVENT_COLUMNS, "event")?;

        let now = self.clock.now();
        let id = self.ids.allocate(IdPrefix::Evt);
        let indicator_code = format!(
            "EVT_{}_{:04}",
            input.category.to_uppercase(),
            self.ids.current()
        );
        let event = Event {
            id,
            category: input.category,
            description: input.description,
            indicator_code,
            event_date: input.event_date,
            source_name: input.source_name,
            source_url: input.source_url,
            confidence: input.confidence,
            collected_by: self.collector(input.collected_by),
            collection_date: now.date(),
            original_text: input.original_text.unwrap_or_default(),
            notes: input.notes.unwrap_or_default(),
            extras: input.extras,
        };

        info!("Added event: {} on {}", event.description, event.event_date);
        self.push(EntryKind::Event, event.clone().into(), now);
        Ok(event)
    }

    /// Record a new impact link
    ///
    /// The parent id is stored as given and not checked against any event.
    pub fn add_impact_link(&mut self, input: ImpactLinkInput) -> Result<ImpactLink> {
        check_extras(&input.extras, IMPACT_LINK_COLUMNS, "impact_link")?;

        let now = self.clock.now();
        let link = ImpactLink {
            id: self.ids.allocate(IdPrefix::Imp),
            parent_id: RecordId::from_string(input.parent_id),
            pillar: input.pillar,
            related_indicator: input.related_indicator,
            impact_direction: input.impact_direction,
            impact_magnitude: input.impact_magnitude,
            lag_months: input.lag_months,
            evidence_basis: input.evidence_basis,
            confidence: input.confidence,
            collected_by: self.collector(input.collected_by),
            collection_date: now.date(),
            notes: input.notes.unwrap_or_default(),
            extras: input.extras,
        };

        info!(
            "Added impact link: Event {} → {}",
            link.parent_id, link.related_indicator
        );
        self.push(EntryKind::ImpactLink, link.clone().into(), now);
        Ok(link)
    }

    /// Append the logged records to an in-memory dataset
    ///
    /// Main sheet: original rows, then observations, then events, each block
    /// in log order. Impact sheet: original rows, then links in log order.
    /// The log is left untouched.
    pub fn merge_into(&self, original: &Dataset) -> Dataset {
        let observations = self.block(EntryKind::Observation);
        let events = self.block(EntryKind::Event);
        let links = self.block(EntryKind::ImpactLink);

        let data = Table::concat(&[&original.data, &observations, &events]);
        let impact_links = Table::concat(&[&original.impact_links, &links]);
        Dataset::new(data, impact_links)
    }

    /// Merge the log into the workbook at `original_data_path`
    ///
    /// The original is read with the source sheet names. When `output_path`
    /// is given the result is written there with the enriched sheet names.
    ///
    /// # Errors
    ///
    /// Read and write failures are logged and returned; nothing is written
    /// when the read fails.
    pub fn merge_enrichments(
        &self,
        original_data_path: &Path,
        output_path: Option<&Path>,
    ) -> Result<Dataset> {
        info!("Merging enrichments with existing data...");

        let original = workbook::read_dataset(original_data_path, SheetNames::SOURCE)
            .map_err(|e| {
                error!("Error loading original data: {}", e);
                e
            })?;

        let merged = self.merge_into(&original);
        let counts = self.pending_counts();
        info!(
            "Merged data: {} records ({} new)",
            merged.data.len(),
            counts.observations + counts.events
        );
        info!(
            "Merged impact links: {} records ({} new)",
            merged.impact_links.len(),
            counts.impact_links
        );

        if let Some(output) = output_path {
            workbook::write_dataset(output, &merged, SheetNames::ENRICHED).map_err(|e| {
                error!("Error saving enriched data: {}", e);
                e
            })?;
            info!("Saved enriched data to {}", output.display());
        }

        Ok(merged)
    }

    /// Records added since the last clear, in insertion order
    pub fn enrichment_log(&self) -> &[EnrichmentEntry] {
        &self.log
    }

    /// Forget every logged record; ids keep counting
    pub fn clear_enrichment_log(&mut self) {
        self.log.clear();
        info!("Enrichment log cleared");
    }

    /// Write the log as a pretty-printed JSON array of `{type, data, timestamp}`
    pub fn save_enrichment_log(&self, path: &Path) -> Result<()> {
        let entries: Vec<Value> = self.log.iter().map(EnrichmentEntry::to_json).collect();
        let json = serde_json::to_string_pretty(&Value::Array(entries))?;
        fs::write(path, json)?;
        info!("Saved enrichment log to {}", path.display());
        Ok(())
    }

    /// Unmerged record counts per kind
    pub fn pending_counts(&self) -> PendingCounts {
        let mut counts = PendingCounts::default();
        for entry in &self.log {
            match entry.kind {
                EntryKind::Observation => counts.observations += 1,
                EntryKind::Event => counts.events += 1,
                EntryKind::ImpactLink => counts.impact_links += 1,
            }
        }
        counts
    }

    fn collector(&self, given: Option<String>) -> String {
        given.unwrap_or_else(|| self.config.default_collector.clone())
    }

    fn push(&mut self, kind: EntryKind, record: Record, timestamp: chrono::NaiveDateTime) {
        self.log.push(EnrichmentEntry {
            kind,
            record,
            timestamp,
        });
    }

    fn block(&self, kind: EntryKind) -> Table {
        Table::from_rows(
            self.log
                .iter()
                .filter(|entry| entry.kind == kind)
                .map(|entry| entry.record.to_row()),
        )
    }
}

fn check_extras(extras: &Extras, core: &[&str], record_type: &'static str) -> Result<()> {
    match extras.keys().find(|key| core.contains(&key.as_str())) {
        Some(field) => Err(EnricherError::ReservedField {
            field: field.clone(),
            record_type,
        }),
        None => Ok(()),
    }
}
