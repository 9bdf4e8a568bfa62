//! Chart generation and rendering for the dashboard.
//!
//! This module creates the ECharts visualizations for the sample data:
//! - **Performance Chart**: revenue, expenses and profit by month, switchable
//!   between bar, line and area renderings
//! - **Expense Breakdown**: pie chart of yearly expenses by category
//! - **Growth Rate Chart**: monthly growth percentage over time
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization
//! code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, JsFunction, Label,
        Tooltip, Trigger,
    },
    series::{Line, Pie, bar},
};
use maud::PreEscaped;

use crate::{
    dashboard::chart_kind::ChartKind,
    data::{ExpenseCategory, MonthlyRecord},
    html::HeadElement,
};

/// The element ID of the switchable performance chart container.
pub(super) const PERFORMANCE_CHART_ID: &str = "performance-chart";

// Series colors matching the pie palette: blue revenue, red expenses,
// green profit, yellow growth.
const REVENUE_COLOR: &str = "#5470c6";
const EXPENSES_COLOR: &str = "#ee6666";
const PROFIT_COLOR: &str = "#91cc75";
const GROWTH_COLOR: &str = "#fac858";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Generates JavaScript initialization code for charts that are only rendered
/// on the full page load.
///
/// # Arguments
/// * `charts` - The charts to generate initialization scripts for
///
/// # Returns
/// HeadElement containing the initialization JavaScript.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| init_script(chart))
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Generates the inline initialization script for the performance chart.
///
/// Unlike [charts_script] this runs as soon as it is inserted, so it works
/// both on the initial page load and when HTMX swaps in a new chart panel.
/// Any ECharts instance already attached to the container is disposed first.
pub(super) fn swap_script(chart: &DashboardChart) -> PreEscaped<String> {
    PreEscaped(init_script(chart))
}

fn init_script(chart: &DashboardChart) -> String {
    format!(
        r#"(function() {{
            const chartDom = document.getElementById("{}");
            const existing = echarts.getInstanceByDom(chartDom);
            if (existing) {{
                existing.dispose();
            }}
            const chart = echarts.init(chartDom);
            const option = {};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);
        }})();"#,
        chart.id, chart.options
    )
}

/// Creates the performance chart for the given rendering mode.
///
/// Bar and line render revenue, expenses and profit as three series; area
/// renders revenue and expenses as overlaid area series.
pub(super) fn performance_chart(kind: ChartKind, records: &[MonthlyRecord]) -> Chart {
    let labels = month_labels(records);
    let revenue: Vec<f64> = records.iter().map(|record| record.revenue).collect();
    let expenses: Vec<f64> = records.iter().map(|record| record.expenses).collect();
    let profit: Vec<f64> = records.iter().map(|record| record.profit).collect();

    // The panel heading names this chart, so no ECharts title here.
    let chart = Chart::new()
        .color::<Color>(vec![
            REVENUE_COLOR.into(),
            EXPENSES_COLOR.into(),
            PROFIT_COLOR.into(),
        ])
        .tooltip(currency_tooltip())
        .legend(Legend::new().bottom(0))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("10%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        );

    match kind {
        ChartKind::Bar => chart
            .series(bar::Bar::new().name("Revenue").data(revenue))
            .series(bar::Bar::new().name("Expenses").data(expenses))
            .series(bar::Bar::new().name("Profit").data(profit)),
        ChartKind::Line => chart
            .series(Line::new().name("Revenue").smooth(0.5).data(revenue))
            .series(Line::new().name("Expenses").smooth(0.5).data(expenses))
            .series(Line::new().name("Profit").smooth(0.5).data(profit)),
        ChartKind::Area => chart
            .series(
                Line::new()
                    .name("Revenue")
                    .smooth(0.5)
                    .area_style(AreaStyle::new().opacity(0.6))
                    .data(revenue),
            )
            .series(
                Line::new()
                    .name("Expenses")
                    .smooth(0.5)
                    .area_style(AreaStyle::new().opacity(0.6))
                    .data(expenses),
            ),
    }
}

/// Creates the pie chart showing the distribution of expenses by category.
pub(super) fn expense_pie(categories: &[ExpenseCategory]) -> Chart {
    let colors: Vec<Color> = categories
        .iter()
        .map(|category| category.color.into())
        .collect();
    let data: Vec<(f64, &str)> = categories
        .iter()
        .map(|category| (category.amount, category.category))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Expense Breakdown")
                .subtext("Distribution of expenses by category"),
        )
        .color(colors)
        .tooltip(currency_tooltip_for_items())
        .series(
            Pie::new()
                .name("Expenses")
                .radius("65%")
                .label(Label::new().formatter("{b} {d}%"))
                .data(data),
        )
}

/// Creates the line chart showing the monthly growth percentage over time.
pub(super) fn growth_chart(records: &[MonthlyRecord]) -> Chart {
    let labels = month_labels(records);
    let values: Vec<f64> = records.iter().map(|record| record.growth).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Growth Rate Trend")
                .subtext("Monthly growth percentage over time"),
        )
        .color::<Color>(vec![GROWTH_COLOR.into()])
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(percentage_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(percentage_formatter())),
        )
        .series(Line::new().name("Growth %").smooth(0.5).data(values))
}

fn month_labels(records: &[MonthlyRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.month.to_owned())
        .collect()
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD',
              maximumFractionDigits: 0
            });
            return (number || number === 0) ? currencyFormatter.format(number) : \"-\";",
    )
}

#[inline]
fn percentage_formatter() -> JsFunction {
    JsFunction::new_with_args("number", "return number.toFixed(1) + '%';")
}

/// Creates a tooltip configuration for currency values on Cartesian charts.
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

/// Creates a tooltip configuration for currency values on the pie chart,
/// which triggers per item rather than per axis.
fn currency_tooltip_for_items() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Item)
        .value_formatter(currency_formatter())
}
