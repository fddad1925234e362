//! finance-dashboard - personal finance dashboard engine and CLI
//!
//! This library turns a collection of expense transactions and monthly
//! category budgets into dashboard views: monthly totals, spending per
//! category, a chronological monthly series, budget versus actual, and
//! spending insights.
//!
//! # Architecture
//!
//! - `models`: transactions, budgets, categories, money and month periods
//! - `engine`: pure aggregation functions producing every dashboard view
//! - `session`: in-memory session store and data file loading
//! - `display`: terminal renderers
//! - `export`: JSON, YAML and CSV export
//! - `config`: settings and path management
//! - `cli`: command handlers for the `findash` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_dashboard::engine::Dashboard;
//! use finance_dashboard::models::MonthPeriod;
//!
//! let period = MonthPeriod::new(2025, 1)?;
//! let dashboard = Dashboard::build(&transactions, &budgets, period);
//! println!("{}", dashboard.summary.total);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod session;

pub use error::{DashboardError, DashboardResult};
