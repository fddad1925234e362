//! Session state and data loading
//!
//! The session holds the transactions and budgets the dashboard is computed
//! from. It lives only as long as the process; data files are read, never
//! written back.

pub mod dataset;
pub mod import;
pub mod store;

pub use dataset::{DataFormat, Dataset};
pub use import::{ColumnMapping, CsvImporter, ImportResult, ParsedRow};
pub use store::SessionStore;
