//! Sales dataset and the read-only queries served over it.
//!
//! This module handles:
//! - The fixed month catalog and sales table
//! - Resolving optional month labels to an index range
//! - Month-over-month growth computation

pub mod dataset;
pub mod growth;
pub mod range;
pub mod types;

pub use dataset::{SalesDataset, MONTHLY_SALES, MONTHS};
pub use growth::{growth_rate, month_over_month};
pub use range::{select_range, MonthRange};
pub use types::{GrowthRecord, KpiSummary, SalesRecord};
