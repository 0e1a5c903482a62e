//! ethiofi Storage Layer
//!
//! Filesystem configuration and two-sheet workbook persistence for the
//! unified dataset.
//!
//! # Architecture
//!
//! - [`config`]: project-relative data paths and the sheet-name constants
//! - [`workbook`]: xlsx read (calamine) and write (rust_xlsxwriter)
//! - [`loader`]: the [`DataLoader`] used by the enricher, explorer and CLI
//!
//! # Examples
//!
//! ```no_run
//! use ethiofi_store::{DataLoader, DataPaths};
//!
//! let paths = DataPaths::init(".").unwrap();
//! let loader = DataLoader::new(paths);
//! let dataset = loader.load_unified_data().unwrap();
//! println!("{} main rows", dataset.data.len());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod loader;
pub mod workbook;

pub use config::{DataPaths, SheetNames};
pub use error::StoreError;
pub use loader::DataLoader;
