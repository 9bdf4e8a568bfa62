//! Shared HTML building blocks: the base page shell, common styles and the
//! pure formatting functions used across the dashboard views.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Card style shared by the summary cards
pub const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md";

/// An element to place in the `<head>` of a page.
pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

/// Wraps `content` in the base page shell.
///
/// The shell loads Tailwind, HTMX and ECharts, then any page-specific
/// `head_elements` such as chart initialization scripts.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Finboard" }

                script src="https://cdn.tailwindcss.com" {}
                script src="https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js" {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

/// Renders a full error page with a header, description and suggested fix.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to the Dashboard"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// Formats a dollar amount rounded to the nearest whole dollar,
/// e.g. `45000.0` becomes `"$45,000"`.
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    let number = number.round();

    if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0".to_owned()
    }
}

/// Formats a percentage with one decimal place, e.g. `8.5` becomes `"8.5%"`.
pub fn format_percentage(number: f64) -> String {
    format!("{number:.1}%")
}

/// Formats a count with thousands separators, e.g. `1250` becomes `"1,250"`.
pub fn format_count(number: u32) -> String {
    static COUNT_FMT: OnceLock<Formatter> = OnceLock::new();

    let count_fmt = COUNT_FMT.get_or_init(|| {
        Formatter::new()
            .separator(',')
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    count_fmt.fmt_string(number as f64)
}

#[cfg(test)]
mod tests {
    use super::{format_count, format_currency, format_percentage};

    #[test]
    fn currency_rounds_to_whole_dollars_with_separators() {
        assert_eq!(format_currency(45000.0), "$45,000");
        assert_eq!(format_currency(858000.0), "$858,000");
        assert_eq!(format_currency(1234.56), "$1,235");
    }

    #[test]
    fn currency_handles_zero_and_negatives() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-1500.0), "-$1,500");
    }

    #[test]
    fn percentage_keeps_one_decimal_place() {
        assert_eq!(format_percentage(8.5), "8.5%");
        assert_eq!(format_percentage(30.0), "30.0%");
        assert_eq!(format_percentage(24.783333333333335), "24.8%");
    }

    #[test]
    fn count_uses_thousands_separators() {
        assert_eq!(format_count(1250), "1,250");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(2280), "2,280");
    }
}
