//! Command implementations.

pub mod dashboard;
pub mod enrich;
pub mod load;
pub mod paths;
pub mod summary;
pub mod trend;

pub use self::dashboard::execute_dashboard;
pub use self::enrich::execute_enrich;
pub use self::load::execute_load;
pub use self::paths::execute_paths;
pub use self::summary::execute_summary;
pub use self::trend::execute_trend;
