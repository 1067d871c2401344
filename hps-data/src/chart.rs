//! Chart specifications handed to the renderer.
//!
//! A spec carries everything D3 needs (title, axis labels, data points) plus
//! the underlying aggregate table so headless consumers can print it.

use serde::Serialize;

/// Value axis / hover label used by every chart.
pub const VALUE_LABEL: &str = "Number of Facilities";

/// One stacked segment of a year bar.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarSegment {
    pub x: i32,
    /// Colour group (state or city); `None` for a plain bar.
    pub color: Option<String>,
    pub value: i64,
}

/// One pie slice. Percentages are relative to the chart's denominator scope.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    Bar {
        x_label: String,
        color_label: Option<String>,
        bars: Vec<BarSegment>,
    },
    Pie {
        name_label: String,
        slices: Vec<PieSlice>,
    },
}

/// Aggregate result as a plain string table (header + rows).
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct AggregateTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl AggregateTable {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

/// A single chart widget to render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub value_label: String,
    #[serde(flatten)]
    pub kind: ChartKind,
    #[serde(skip)]
    pub table: AggregateTable,
}

impl ChartSpec {
    pub fn bar(
        title: impl Into<String>,
        color_label: Option<&str>,
        bars: Vec<BarSegment>,
        table: AggregateTable,
    ) -> Self {
        Self {
            title: title.into(),
            value_label: VALUE_LABEL.to_string(),
            kind: ChartKind::Bar {
                x_label: "Year".to_string(),
                color_label: color_label.map(str::to_string),
                bars,
            },
            table,
        }
    }

    pub fn pie(
        title: impl Into<String>,
        name_label: &str,
        slices: Vec<PieSlice>,
        table: AggregateTable,
    ) -> Self {
        Self {
            title: title.into(),
            value_label: VALUE_LABEL.to_string(),
            kind: ChartKind::Pie {
                name_label: name_label.to_string(),
                slices,
            },
            table,
        }
    }

    /// True when the chart has no bars/slices to draw.
    pub fn is_empty(&self) -> bool {
        match &self.kind {
            ChartKind::Bar { bars, .. } => bars.is_empty(),
            ChartKind::Pie { slices, .. } => slices.is_empty(),
        }
    }

    pub fn is_pie(&self) -> bool {
        matches!(self.kind, ChartKind::Pie { .. })
    }
}
