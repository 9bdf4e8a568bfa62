//! The three-way selector for the performance chart.

use std::fmt;

use serde::Deserialize;

/// The rendering mode of the performance chart.
///
/// The selected kind is carried in the `kind` query parameter, so the server
/// stays stateless and each response renders exactly one chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Grouped bars for revenue, expenses and profit.
    #[default]
    Bar,
    /// Lines for revenue, expenses and profit.
    Line,
    /// Overlaid area series for revenue and expenses.
    Area,
}

impl ChartKind {
    /// All chart kinds in the order they appear in the selector.
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Area];

    /// The lowercase form used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Area => "area",
        }
    }

    /// The human-readable label shown on the selector button.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Area => "Area",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::ChartKind;

    #[derive(Deserialize)]
    struct Query {
        #[serde(default)]
        kind: ChartKind,
    }

    #[test]
    fn deserializes_from_lowercase_query_values() {
        for (text, want) in [
            ("kind=bar", ChartKind::Bar),
            ("kind=line", ChartKind::Line),
            ("kind=area", ChartKind::Area),
        ] {
            let query: Query = serde_urlencoded::from_str(text).unwrap();
            assert_eq!(query.kind, want);
        }
    }

    #[test]
    fn defaults_to_bar_when_absent() {
        let query: Query = serde_urlencoded::from_str("").unwrap();
        assert_eq!(query.kind, ChartKind::Bar);
    }

    #[test]
    fn display_matches_query_form() {
        assert_eq!(ChartKind::Bar.to_string(), "bar");
        assert_eq!(ChartKind::Line.to_string(), "line");
        assert_eq!(ChartKind::Area.to_string(), "area");
    }
}
