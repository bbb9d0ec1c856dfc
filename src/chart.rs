use serde::Serialize;

use crate::color::HexColor;
use crate::data::model::NumericField;

// ---------------------------------------------------------------------------
// Chart specifications handed to the plotting layer
// ---------------------------------------------------------------------------

/// A renderable chart. `Empty` means "no data, no layout".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Empty,
    Scatter(ScatterChart),
    Bar(BarChart),
}

impl Chart {
    /// Total number of plotted marks (points or bars).
    pub fn point_count(&self) -> usize {
        match self {
            Chart::Empty => 0,
            Chart::Scatter(s) => s.series.iter().map(|g| g.points.len()).sum(),
            Chart::Bar(b) => b.bars.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

/// Scatter plot, one series per colour category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub x_field: NumericField,
    pub y_field: NumericField,
    pub series: Vec<ScatterSeries>,
    pub background: HexColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    /// Category label (the genre).
    pub name: String,
    pub color: HexColor,
    /// `[x, y]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// Categorical bar chart: x = track name, y = popularity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub bars: Vec<BarSpec>,
    pub background: HexColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSpec {
    pub label: String,
    pub value: f64,
    pub color: HexColor,
}
