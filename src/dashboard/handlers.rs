//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for the full dashboard page
//! - The HTMX fragment handler that swaps the performance chart panel
//! - The HTML view functions for the page and the panel

use axum::{
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    dashboard::{
        aggregation::summarize,
        cards::summary_cards_view,
        chart_kind::ChartKind,
        charts::{
            DashboardChart, PERFORMANCE_CHART_ID, charts_script, expense_pie, growth_chart,
            performance_chart, swap_script,
        },
        tables::financial_table,
    },
    data::{EXPENSE_BREAKDOWN, MONTHLY_RECORDS},
    endpoints,
    html::{HeadElement, base},
};

const SELECTOR_ACTIVE_STYLE: &str = "px-3 py-1.5 text-sm font-medium rounded \
    text-white bg-blue-600 dark:bg-blue-500";

const SELECTOR_INACTIVE_STYLE: &str = "px-3 py-1.5 text-sm font-medium rounded \
    text-gray-900 bg-white border border-gray-200 hover:bg-gray-100 \
    dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600 \
    dark:hover:bg-gray-700 dark:hover:text-white";

/// The query parameters selecting the performance chart rendering mode.
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// The chart kind to render. Defaults to bar.
    #[serde(default)]
    pub kind: ChartKind,
}

/// Display the dashboard page with the selected performance chart.
pub async fn get_dashboard_page(Query(query): Query<ChartQuery>) -> Result<Response, Error> {
    let summary = summarize(&MONTHLY_RECORDS)?;

    let static_charts = [
        DashboardChart {
            id: "expense-breakdown-chart",
            options: expense_pie(&EXPENSE_BREAKDOWN).to_string(),
        },
        DashboardChart {
            id: "growth-chart",
            options: growth_chart(&MONTHLY_RECORDS).to_string(),
        },
    ];

    let content = html!(
        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            header class="w-full mx-auto mb-6" {
                h1 class="text-3xl font-bold tracking-tight" { "Financial Dashboard" }
                p class="text-gray-600 dark:text-gray-400" {
                    "Comprehensive view of your financial performance and key metrics"
                }
            }

            (summary_cards_view(&summary))

            (performance_panel(query.kind))

            section id="secondary-charts" class="w-full mx-auto mb-6" {
                div class="grid grid-cols-1 xl:grid-cols-2 gap-4" {
                    @for chart in &static_charts {
                        div
                            id=(chart.id)
                            class="min-h-[340px] rounded dark:bg-gray-100"
                        {}
                    }
                }
            }

            (financial_table(&MONTHLY_RECORDS))
        }
    );

    let scripts = [charts_script(&static_charts)];

    Ok(base("Dashboard", &scripts, &content).into_response())
}

/// HTMX endpoint that returns the performance chart panel for the requested
/// chart kind.
///
/// Direct (non-HTMX) requests are redirected to the full page so the URL
/// stays shareable.
pub async fn get_performance_chart(
    HxRequest(is_htmx): HxRequest,
    Query(query): Query<ChartQuery>,
) -> Response {
    if !is_htmx {
        let target = format!("{}?kind={}", endpoints::DASHBOARD_VIEW, query.kind);
        return Redirect::to(&target).into_response();
    }

    performance_panel(query.kind).into_response()
}

/// Renders the switchable performance chart panel: the selector buttons, the
/// chart container and the inline script that (re)initializes the chart.
///
/// The panel replaces itself via `hx-swap="outerHTML"` whenever a selector
/// button is pressed, so only one chart kind is ever present.
fn performance_panel(kind: ChartKind) -> Markup {
    let chart = DashboardChart {
        id: PERFORMANCE_CHART_ID,
        options: performance_chart(kind, &MONTHLY_RECORDS).to_string(),
    };

    html!(
        section
            id="performance-panel"
            data-kind=(kind)
            class="w-full mx-auto mb-6"
        {
            div class="flex justify-between items-baseline mb-4" {
                div {
                    h3 class="text-xl font-semibold" { "Financial Performance" }
                    p class="text-sm text-gray-600 dark:text-gray-400" {
                        "Monthly revenue, expenses, and profit trends"
                    }
                }

                div class="flex gap-2" {
                    @for selectable in ChartKind::ALL {
                        button
                            type="button"
                            hx-get={(endpoints::DASHBOARD_CHART) "?kind=" (selectable)}
                            hx-target="#performance-panel"
                            hx-swap="outerHTML"
                            aria-pressed=(selectable == kind)
                            class=(selector_style(selectable == kind))
                        {
                            (selectable.label())
                        }
                    }
                }
            }

            div
                id=(chart.id)
                class="min-h-[400px] rounded dark:bg-gray-100"
            {}

            script { (swap_script(&chart)) }
        }
    )
}

fn selector_style(is_active: bool) -> &'static str {
    if is_active {
        SELECTOR_ACTIVE_STYLE
    } else {
        SELECTOR_INACTIVE_STYLE
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::Query,
        http::{Response, StatusCode},
    };
    use axum_htmx::HxRequest;
    use scraper::{Html, Selector};

    use crate::dashboard::chart_kind::ChartKind;

    use super::{ChartQuery, get_dashboard_page, get_performance_chart};

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let query = Query(ChartQuery {
            kind: ChartKind::Bar,
        });

        let response = get_dashboard_page(query).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html(response).await;
        assert_valid_html(&html);

        assert_chart_exists(&html, "performance-chart");
        assert_chart_exists(&html, "expense-breakdown-chart");
        assert_chart_exists(&html, "growth-chart");

        assert_table_exists(&html);
    }

    #[tokio::test]
    async fn dashboard_page_shows_summary_figures() {
        let query = Query(ChartQuery {
            kind: ChartKind::Bar,
        });

        let response = get_dashboard_page(query).await.unwrap();
        let html = parse_html(response).await;
        let text = html.html();

        assert!(text.contains("$792,000"));
        assert!(text.contains("$490,000"));
        assert!(text.contains("$302,000"));
        assert!(text.contains("24.8%"));
    }

    #[tokio::test]
    async fn only_the_selected_chart_kind_is_rendered() {
        for kind in ChartKind::ALL {
            let response = get_dashboard_page(Query(ChartQuery { kind })).await.unwrap();
            let html = parse_html(response).await;

            let panel_selector = Selector::parse("#performance-panel").unwrap();
            let panels: Vec<_> = html.select(&panel_selector).collect();
            assert_eq!(panels.len(), 1, "expected exactly one panel for {kind}");
            assert_eq!(panels[0].attr("data-kind"), Some(kind.as_str()));

            let chart_selector = Selector::parse("#performance-chart").unwrap();
            assert_eq!(
                html.select(&chart_selector).count(),
                1,
                "expected exactly one chart container for {kind}"
            );

            let script = panel_script(&html);
            match kind {
                ChartKind::Bar => {
                    assert!(script.contains(r#""type":"bar""#));
                    assert!(!script.contains(r#""type":"line""#));
                }
                ChartKind::Line | ChartKind::Area => {
                    assert!(script.contains(r#""type":"line""#));
                    assert!(!script.contains(r#""type":"bar""#));
                }
            }
        }
    }

    #[tokio::test]
    async fn selector_marks_only_the_active_kind_as_pressed() {
        let query = Query(ChartQuery {
            kind: ChartKind::Line,
        });

        let response = get_dashboard_page(query).await.unwrap();
        let html = parse_html(response).await;

        let button_selector = Selector::parse("#performance-panel button").unwrap();
        let pressed: Vec<_> = html
            .select(&button_selector)
            .map(|button| button.attr("aria-pressed").unwrap().to_owned())
            .collect();

        assert_eq!(pressed, vec!["false", "true", "false"]);
    }

    #[tokio::test]
    async fn htmx_request_gets_the_panel_fragment() {
        let response = get_performance_chart(
            HxRequest(true),
            Query(ChartQuery {
                kind: ChartKind::Area,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        // The fragment is just the panel, not a full page.
        assert!(!text.contains("<head>"));

        let html = Html::parse_fragment(&text);
        let panel_selector = Selector::parse("#performance-panel").unwrap();
        let panel = html.select(&panel_selector).next().unwrap();
        assert_eq!(panel.attr("data-kind"), Some("area"));
    }

    #[tokio::test]
    async fn direct_request_redirects_to_the_full_page() {
        let response = get_performance_chart(
            HxRequest(false),
            Query(ChartQuery {
                kind: ChartKind::Line,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, "/dashboard?kind=line");
    }

    /// The panel's init script with whitespace stripped, so assertions do not
    /// depend on how the option JSON is formatted.
    fn panel_script(html: &Html) -> String {
        let selector = Selector::parse("#performance-panel script").unwrap();
        let script: String = html
            .select(&selector)
            .next()
            .expect("panel should contain its init script")
            .text()
            .collect();

        script.split_whitespace().collect()
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    #[track_caller]
    fn assert_chart_exists(html: &Html, chart_id: &str) {
        let selector = Selector::parse(&format!("#{}", chart_id)).unwrap();
        assert!(
            html.select(&selector).next().is_some(),
            "Chart with id '{}' not found",
            chart_id
        );
    }

    #[track_caller]
    fn assert_table_exists(html: &Html) {
        let selector = Selector::parse("table").unwrap();
        assert!(
            html.select(&selector).next().is_some(),
            "Financial data table not found"
        );
    }
}
