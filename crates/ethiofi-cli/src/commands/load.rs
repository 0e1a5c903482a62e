//! Load command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use ethiofi_domain::RecordType;
use ethiofi_store::DataLoader;

/// Execute the load command.
pub fn execute_load(config: &Config, formatter: &Formatter) -> Result<()> {
    let loader = DataLoader::new(config.data.paths());
    let dataset = loader.load_unified_data()?;

    let counts = [
        ("data rows", dataset.data.len()),
        (
            RecordType::Observation.as_str(),
            dataset.count_by_type(RecordType::Observation),
        ),
        (RecordType::Event.as_str(), dataset.count_by_type(RecordType::Event)),
        (RecordType::Target.as_str(), dataset.count_by_type(RecordType::Target)),
        (RecordType::ImpactLink.as_str(), dataset.impact_links.len()),
    ];

    println!("{}", formatter.format_counts(&counts)?);
    Ok(())
}
