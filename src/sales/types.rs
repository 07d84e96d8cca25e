//! Record types returned by the sales queries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sales figure for a single month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SalesRecord {
    /// Month label from the catalog (e.g., "三月").
    pub month: String,
    /// Units sold in that month.
    pub sales: u64,
}

/// Month-over-month growth for a single month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GrowthRecord {
    /// Month label from the catalog.
    pub month: String,
    /// Percentage change against the preceding month, 2 decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 24.0)]
    pub growth_rate: Decimal,
}

/// Headline KPIs over the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KpiSummary {
    /// Sum of sales over every month.
    pub total_sales: u64,
}
