//! The summary cards showing the headline figures.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::Summary,
    html::{CARD_STYLE, format_currency, format_percentage},
};

/// Renders the grid of four summary cards derived from the monthly dataset.
pub(super) fn summary_cards_view(summary: &Summary) -> Markup {
    html! {
        section id="summary-cards" class="w-full mx-auto mb-6" {
            div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4" {
                (summary_card(
                    "Total Revenue",
                    &format_currency(summary.total_revenue),
                    "+12.5% from last year",
                ))
                (summary_card(
                    "Total Expenses",
                    &format_currency(summary.total_expenses),
                    "+8.2% from last year",
                ))
                (summary_card(
                    "Net Profit",
                    &format_currency(summary.total_profit),
                    "+18.7% from last year",
                ))
                (summary_card(
                    "Avg Growth",
                    &format_percentage(summary.avg_growth),
                    "Monthly average growth rate",
                ))
            }
        }
    }
}

/// Renders a single summary card.
fn summary_card(title: &str, value: &str, context: &str) -> Markup {
    html! {
        div class=(CARD_STYLE) {
            h4 class="text-sm font-medium text-gray-600 dark:text-gray-400 mb-2" {
                (title)
            }

            div class="text-2xl font-bold text-gray-900 dark:text-white mb-1" {
                (value)
            }

            p class="text-xs text-gray-600 dark:text-gray-400" {
                (context)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Summary, summary_cards_view};

    #[test]
    fn renders_all_four_headline_figures() {
        let summary = Summary {
            total_revenue: 792_000.0,
            total_expenses: 490_000.0,
            total_profit: 302_000.0,
            avg_growth: 24.783333333333335,
        };

        let html = summary_cards_view(&summary).into_string();

        assert!(html.contains("Total Revenue"));
        assert!(html.contains("$792,000"));
        assert!(html.contains("Total Expenses"));
        assert!(html.contains("$490,000"));
        assert!(html.contains("Net Profit"));
        assert!(html.contains("$302,000"));
        assert!(html.contains("Avg Growth"));
        assert!(html.contains("24.8%"));
    }
}
