//! Read-only HTTP backend for a monthly sales dashboard.
//!
//! The service holds a fixed twelve-month sales table in memory and answers
//! three kinds of questions about it:
//!
//! ```text
//! GET /api/sales?start_month=三月&end_month=五月   raw records in a month range
//! GET /api/kpi                                    total sales over the year
//! GET /api/month_pct?start_month=二月             month-over-month growth (%)
//! ```
//!
//! Month labels that are missing or not in the catalog fall back to the
//! first/last month, and an inverted range is swapped rather than rejected.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`sales`]: Dataset, range selection and growth computation
//! - [`api`]: HTTP routes, handlers, CORS and OpenAPI docs
//! - [`metrics`]: Prometheus request metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod sales;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServerError};
