//! The in-memory sales table.

use std::collections::HashSet;

use tracing::debug;

use super::growth::month_over_month;
use super::range::{select_range, MonthRange};
use super::types::{GrowthRecord, KpiSummary, SalesRecord};
use crate::error::DatasetError;

/// Month catalog in calendar order.
pub const MONTHS: [&str; 12] = [
    "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月", "十二月",
];

/// Sales per month, parallel to [`MONTHS`].
pub const MONTHLY_SALES: [u64; 12] = [250, 310, 280, 400, 350, 420, 480, 450, 500, 550, 600, 620];

/// Immutable sales table: month labels and their sales values, index-aligned.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesDataset {
    months: Vec<String>,
    sales: Vec<u64>,
}

impl SalesDataset {
    /// Build a dataset from parallel month/sales sequences.
    ///
    /// Fails if either sequence is empty, their lengths differ, or a month
    /// label repeats.
    pub fn new(months: Vec<String>, sales: Vec<u64>) -> Result<Self, DatasetError> {
        if months.is_empty() {
            return Err(DatasetError::Empty);
        }

        if months.len() != sales.len() {
            return Err(DatasetError::LengthMismatch {
                months: months.len(),
                sales: sales.len(),
            });
        }

        let mut seen = HashSet::with_capacity(months.len());
        for month in &months {
            if !seen.insert(month.as_str()) {
                return Err(DatasetError::DuplicateMonth(month.clone()));
            }
        }

        Ok(Self { months, sales })
    }

    /// The built-in twelve-month dataset, checked like any other.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::new(
            MONTHS.iter().map(|m| m.to_string()).collect(),
            MONTHLY_SALES.to_vec(),
        )
    }

    /// Month labels in catalog order.
    pub fn months(&self) -> &[String] {
        &self.months
    }

    /// Sales values in catalog order.
    pub fn sales(&self) -> &[u64] {
        &self.sales
    }

    /// Number of months in the catalog.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Never true for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Resolve optional month labels against this dataset's catalog.
    pub fn select_range(&self, start_month: Option<&str>, end_month: Option<&str>) -> MonthRange {
        let range = select_range(start_month, end_month, &self.months);
        debug!(?start_month, ?end_month, start = range.start, end = range.end, "Resolved month range");
        range
    }

    /// Sales records for every month in `range`, in catalog order.
    pub fn sales_in_range(&self, range: MonthRange) -> Vec<SalesRecord> {
        let (Some(months), Some(sales)) = (
            self.months.get(range.indices()),
            self.sales.get(range.indices()),
        ) else {
            return Vec::new();
        };

        months
            .iter()
            .zip(sales)
            .map(|(month, &sales)| SalesRecord {
                month: month.clone(),
                sales,
            })
            .collect()
    }

    /// Total sales over the whole dataset.
    pub fn kpi(&self) -> KpiSummary {
        KpiSummary {
            total_sales: self.sales.iter().sum(),
        }
    }

    /// Month-over-month growth for every month in `range`.
    pub fn growth_in_range(&self, range: MonthRange) -> Vec<GrowthRecord> {
        month_over_month(self, range)
    }
}
