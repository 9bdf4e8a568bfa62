//! The data table listing the monthly financial metrics.

use maud::{Markup, html};

use crate::{
    data::MonthlyRecord,
    html::{
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_count, format_currency,
        format_percentage,
    },
};

// Months with profit above this threshold get the "Strong" badge.
const STRONG_PROFIT_THRESHOLD: f64 = 20_000.0;

const BADGE_STRONG_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 \
    text-xs font-semibold text-green-800 bg-green-100 rounded-full \
    dark:bg-green-900 dark:text-green-300";

const BADGE_MODERATE_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 \
    text-xs font-semibold text-gray-800 bg-gray-100 rounded-full \
    dark:bg-gray-700 dark:text-gray-300";

/// The label on a month's status badge.
fn profit_status(profit: f64) -> &'static str {
    if profit > STRONG_PROFIT_THRESHOLD {
        "Strong"
    } else {
        "Moderate"
    }
}

/// Renders a table with one row per month, in dataset order.
pub(super) fn financial_table(records: &[MonthlyRecord]) -> Markup {
    html! {
        section id="financial-table" class="w-full mx-auto mb-8" {
            div class="flex justify-between items-baseline mb-4" {
                h3 class="text-xl font-semibold" {
                    "Financial Data Table"
                }
                span class="text-sm text-gray-600 dark:text-gray-400" {
                    "Detailed monthly financial metrics"
                }
            }

            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Month" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Revenue" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Expenses" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Profit" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Growth %" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Customers" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Status" }
                        }
                    }
                    tbody {
                        @for record in records {
                            tr class=(TABLE_ROW_STYLE) {
                                th scope="row"
                                    class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"}
                                {
                                    (record.month)
                                }
                                td class={(TABLE_CELL_STYLE) " text-right"} {
                                    (format_currency(record.revenue))
                                }
                                td class={(TABLE_CELL_STYLE) " text-right"} {
                                    (format_currency(record.expenses))
                                }
                                td class={(TABLE_CELL_STYLE) " text-right"} {
                                    (format_currency(record.profit))
                                }
                                td class={(TABLE_CELL_STYLE) " text-right"} {
                                    (format_percentage(record.growth))
                                }
                                td class={(TABLE_CELL_STYLE) " text-right"} {
                                    (format_count(record.customers))
                                }
                                td class={(TABLE_CELL_STYLE) " text-right"} {
                                    @let status = profit_status(record.profit);
                                    span class=(badge_style(status)) { (status) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn badge_style(status: &str) -> &'static str {
    if status == "Strong" {
        BADGE_STRONG_STYLE
    } else {
        BADGE_MODERATE_STYLE
    }
}
