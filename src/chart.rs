//! Horizontal bar-chart layout for extracted statement figures.
//!
//! The engine maps each `(metric, value)` pair through [`parse_value`],
//! drops entries that did not yield a chartable magnitude, keeps the first
//! ten survivors, and computes pixel geometry for a fixed-width chart that
//! may mix positive and negative values around a zero axis.

use log::debug;

use crate::schema::ExtractedDatum;
use crate::value::parse_value;

pub const CHART_WIDTH: f64 = 500.0;
pub const LABEL_COLUMN_WIDTH: f64 = 200.0;
pub const VALUE_COLUMN_WIDTH: f64 = 100.0;
pub const BAR_AREA_WIDTH: f64 = CHART_WIDTH - LABEL_COLUMN_WIDTH - VALUE_COLUMN_WIDTH;
pub const ROW_HEIGHT: f64 = 40.0;
pub const BAR_HEIGHT: f64 = 20.0;
pub const BAR_CORNER_RADIUS: f64 = 3.0;

/// Entries beyond this count are dropped, first survivors win.
pub const MAX_ROWS: usize = 10;

/// Metric labels longer than this are shortened for display.
const LABEL_DISPLAY_LIMIT: usize = 25;
const LABEL_TRUNCATED_LEN: usize = 22;

const VALUE_LABEL_OFFSET: f64 = 5.0;
const LABEL_COLUMN_PADDING: f64 = 10.0;
const TEXT_BASELINE_OFFSET: f64 = 25.0;
const BAR_TOP_INSET: f64 = 10.0;

/// A statement figure augmented with its parsed magnitude.
///
/// `numeric_value` is `0.0` both for genuine zeros and for strings the
/// parser could not interpret; either way the entry is not chartable.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub metric: String,
    pub value: String,
    pub numeric_value: f64,
}

/// Which side of its x-coordinate a text label extends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    End,
}

impl TextAnchor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::End => "end",
        }
    }
}

/// Pixel geometry for a single chart row.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub metric: String,
    /// Metric text as rendered, possibly shortened with an ellipsis.
    pub display_label: String,
    /// The original formatted value string, rendered next to the bar.
    pub value: String,
    pub numeric_value: f64,
    pub y: f64,
    pub bar_x: f64,
    pub bar_width: f64,
    pub value_label_x: f64,
    pub value_anchor: TextAnchor,
}

impl BarRow {
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numeric_value < 0.0
    }

    /// y-coordinate of the bar rectangle's top edge.
    #[must_use]
    pub fn bar_y(&self) -> f64 {
        self.y + BAR_TOP_INSET
    }

    /// Baseline used by both the metric label and the value label.
    #[must_use]
    pub fn text_baseline_y(&self) -> f64 {
        self.y + TEXT_BASELINE_OFFSET
    }
}

/// Complete geometry for one chart render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    /// x-position of the value-zero reference line. Centered in the bar area
    /// when any entry is negative, otherwise flush with the label column.
    pub zero_axis_x: f64,
    pub has_negative: bool,
    /// Normalization denominator, strictly positive for a non-empty layout.
    pub max_magnitude: f64,
    pub rows: Vec<BarRow>,
}

impl ChartLayout {
    /// x-coordinate metric labels are anchored to (right-aligned).
    #[must_use]
    pub fn metric_label_x(&self) -> f64 {
        LABEL_COLUMN_WIDTH - LABEL_COLUMN_PADDING
    }
}

/// Builds the chartable dataset: parses every value, drops zero/unparseable
/// entries, and keeps the first [`MAX_ROWS`] survivors in original order.
pub fn chart_data(data: &[ExtractedDatum]) -> Vec<ChartDatum> {
    let mut dataset: Vec<ChartDatum> = data
        .iter()
        .map(|item| ChartDatum {
            metric: item.metric.clone(),
            value: item.value.clone(),
            numeric_value: parse_value(&item.value),
        })
        .filter(|item| item.numeric_value != 0.0)
        .collect();

    if data.len() > dataset.len() {
        debug!(
            "Dropped {} non-chartable entries out of {}",
            data.len() - dataset.len(),
            data.len()
        );
    }
    if dataset.len() > MAX_ROWS {
        debug!("Truncating chart dataset from {} to {} rows", dataset.len(), MAX_ROWS);
        dataset.truncate(MAX_ROWS);
    }

    dataset
}

/// Computes the bar-chart geometry for a set of extracted figures.
///
/// Returns `None` when nothing is chartable; callers should render a
/// placeholder rather than treat this as an error. The computation is pure:
/// identical input always produces identical geometry.
pub fn layout(data: &[ExtractedDatum]) -> Option<ChartLayout> {
    let dataset = chart_data(data);
    if dataset.is_empty() {
        return None;
    }

    // max_magnitude > 0 here: zero-valued entries were already filtered out,
    // so the divisions below cannot hit zero.
    let max_magnitude = dataset
        .iter()
        .map(|d| d.numeric_value.abs())
        .fold(0.0_f64, f64::max);
    let has_negative = dataset.iter().any(|d| d.numeric_value < 0.0);

    let zero_axis_x = if has_negative {
        LABEL_COLUMN_WIDTH + BAR_AREA_WIDTH / 2.0
    } else {
        LABEL_COLUMN_WIDTH
    };
    // Mixed-sign charts split the bar area between the two sides, so the
    // largest bar spans half the width it would in a positive-only chart.
    let side_width = if has_negative {
        BAR_AREA_WIDTH / 2.0
    } else {
        BAR_AREA_WIDTH
    };

    let height = dataset.len() as f64 * ROW_HEIGHT;

    let rows = dataset
        .into_iter()
        .enumerate()
        .map(|(index, datum)| {
            let y = index as f64 * ROW_HEIGHT;
            let negative = datum.numeric_value < 0.0;
            let bar_width = datum.numeric_value.abs() / max_magnitude * side_width;
            let bar_x = if negative { zero_axis_x - bar_width } else { zero_axis_x };
            let (value_label_x, value_anchor) = if negative {
                (bar_x - VALUE_LABEL_OFFSET, TextAnchor::End)
            } else {
                (bar_x + bar_width + VALUE_LABEL_OFFSET, TextAnchor::Start)
            };

            BarRow {
                display_label: truncate_label(&datum.metric),
                metric: datum.metric,
                value: datum.value,
                numeric_value: datum.numeric_value,
                y,
                bar_x,
                bar_width,
                value_label_x,
                value_anchor,
            }
        })
        .collect();

    Some(ChartLayout {
        width: CHART_WIDTH,
        height,
        zero_axis_x,
        has_negative,
        max_magnitude,
        rows,
    })
}

/// Shortens a metric label for display. Only the rendered text changes; the
/// underlying metric identity is untouched.
pub fn truncate_label(metric: &str) -> String {
    if metric.chars().count() > LABEL_DISPLAY_LIMIT {
        let head: String = metric.chars().take(LABEL_TRUNCATED_LEN).collect();
        format!("{}...", head)
    } else {
        metric.to_string()
    }
}
