//! Month range resolution.
//!
//! Labels are matched exactly against the catalog. Anything that does not
//! match (missing, empty, misspelled) keeps the default endpoint, so a query
//! never fails here.

use std::ops::RangeInclusive;

/// Inclusive index range over the month catalog.
///
/// Always satisfies `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    /// Index of the first selected month.
    pub start: usize,
    /// Index of the last selected month.
    pub end: usize,
}

impl MonthRange {
    /// Index range suitable for slicing the catalog.
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Start index widened by one month to include the growth baseline.
    ///
    /// Stays at 0 when the range already starts at the first month.
    pub fn extended_start(&self) -> usize {
        self.start.saturating_sub(1)
    }
}

/// Resolve optional start/end labels to an index range over `catalog`.
///
/// Unknown labels fall back to the first/last month, and an inverted pair is
/// swapped. An empty catalog resolves to `0..=0`.
pub fn select_range<S: AsRef<str>>(
    start_label: Option<&str>,
    end_label: Option<&str>,
    catalog: &[S],
) -> MonthRange {
    let position = |label: Option<&str>| {
        label
            .filter(|label| !label.is_empty())
            .and_then(|label| catalog.iter().position(|month| month.as_ref() == label))
    };

    let start = position(start_label).unwrap_or(0);
    let end = position(end_label).unwrap_or_else(|| catalog.len().saturating_sub(1));

    if start > end {
        MonthRange { start: end, end: start }
    } else {
        MonthRange { start, end }
    }
}
