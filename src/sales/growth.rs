//! Month-over-month growth computation.

use rust_decimal::Decimal;

use super::dataset::SalesDataset;
use super::range::MonthRange;
use super::types::GrowthRecord;

/// Percentage change from `previous` to `current`, rounded to 2 places.
///
/// Rounding is half-to-even. A zero baseline has no defined change and
/// yields 0.
pub fn growth_rate(previous: u64, current: u64) -> Decimal {
    if previous == 0 {
        return Decimal::ZERO;
    }

    let previous = Decimal::from(previous);
    let current = Decimal::from(current);

    ((current - previous) / previous * Decimal::ONE_HUNDRED).round_dp(2)
}

/// Growth records for exactly the months in `range`.
///
/// The window is widened one month to the left when possible so the first
/// selected month has a baseline; that baseline month is dropped from the
/// output. When the range starts at the first catalog month its growth is 0.
pub fn month_over_month(dataset: &SalesDataset, range: MonthRange) -> Vec<GrowthRecord> {
    let extended_start = range.extended_start();
    let window = extended_start..=range.end;

    let (Some(months), Some(sales)) = (
        dataset.months().get(window.clone()),
        dataset.sales().get(window),
    ) else {
        return Vec::new();
    };

    let rates = std::iter::once(Decimal::ZERO)
        .chain(sales.windows(2).map(|pair| growth_rate(pair[0], pair[1])));

    months
        .iter()
        .zip(rates)
        .skip(range.start - extended_start)
        .map(|(month, growth_rate)| GrowthRecord {
            month: month.clone(),
            growth_rate,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn growth(start: Option<&str>, end: Option<&str>) -> Vec<(String, Decimal)> {
        let dataset = SalesDataset::builtin().unwrap();
        let range = dataset.select_range(start, end);
        month_over_month(&dataset, range)
            .into_iter()
            .map(|r| (r.month, r.growth_rate))
            .collect()
    }

    #[test]
    fn growth_rate_rounds_to_two_places() {
        assert_eq!(growth_rate(250, 310), dec!(24.00));
        assert_eq!(growth_rate(310, 280), dec!(-9.68));
        assert_eq!(growth_rate(280, 400), dec!(42.86));
        assert_eq!(growth_rate(600, 620), dec!(3.33));
    }

    #[test]
    fn growth_rate_with_zero_baseline_is_zero() {
        assert_eq!(growth_rate(0, 100), Decimal::ZERO);
        assert_eq!(growth_rate(0, 0), Decimal::ZERO);
    }

    #[test]
    fn first_month_alone_has_zero_growth() {
        assert_eq!(growth(Some("一月"), Some("一月")), vec![("一月".to_string(), dec!(0))]);
    }

    #[test]
    fn single_month_uses_previous_month_as_baseline() {
        assert_eq!(growth(Some("二月"), Some("二月")), vec![("二月".to_string(), dec!(24))]);
    }

    #[test]
    fn baseline_month_is_not_returned() {
        let records = growth(Some("三月"), Some("五月"));

        assert_eq!(
            records,
            vec![
                ("三月".to_string(), dec!(-9.68)),
                ("四月".to_string(), dec!(42.86)),
                ("五月".to_string(), dec!(-12.50)),
            ]
        );
    }

    #[test]
    fn whole_year_starts_at_zero() {
        let records = growth(None, None);

        assert_eq!(records.len(), 12);
        assert_eq!(records[0], ("一月".to_string(), Decimal::ZERO));
        assert_eq!(records[1], ("二月".to_string(), dec!(24)));
        assert_eq!(records[11], ("十二月".to_string(), dec!(3.33)));
    }

    #[test]
    fn growth_covers_same_months_as_sales() {
        let dataset = SalesDataset::builtin().unwrap();
        let range = dataset.select_range(Some("十一月"), Some("六月"));

        let sales_months: Vec<_> = dataset.sales_in_range(range).into_iter().map(|r| r.month).collect();
        let growth_months: Vec<_> = month_over_month(&dataset, range).into_iter().map(|r| r.month).collect();

        assert_eq!(sales_months, growth_months);
    }
}
