//! Summary statistics derived from the monthly dataset.
//!
//! The summary is recomputed from the records on every render. The fold is
//! over twelve elements, so there is nothing worth caching.

use crate::{Error, data::MonthlyRecord};

/// The four headline figures shown in the summary cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Summary {
    /// Sum of revenue across all months.
    pub total_revenue: f64,
    /// Sum of expenses across all months.
    pub total_expenses: f64,
    /// Sum of profit across all months.
    pub total_profit: f64,
    /// Arithmetic mean of the monthly growth percentages.
    pub avg_growth: f64,
}

/// Folds the monthly records into totals and an average growth rate.
///
/// # Errors
/// Returns [Error::EmptyDataset] for an empty slice so the average growth
/// never divides by zero.
pub(super) fn summarize(records: &[MonthlyRecord]) -> Result<Summary, Error> {
    if records.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut summary = Summary {
        total_revenue: 0.0,
        total_expenses: 0.0,
        total_profit: 0.0,
        avg_growth: 0.0,
    };

    for record in records {
        summary.total_revenue += record.revenue;
        summary.total_expenses += record.expenses;
        summary.total_profit += record.profit;
        summary.avg_growth += record.growth;
    }

    summary.avg_growth /= records.len() as f64;

    Ok(summary)
}
