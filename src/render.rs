//! Materializes chart geometry as a standalone SVG document.

use crate::chart::{self, ChartLayout, BAR_CORNER_RADIUS, BAR_HEIGHT};
use crate::schema::ExtractedDatum;
use crate::theme::Theme;

/// Placeholder text callers should show when there is nothing to draw.
pub const NO_DATA_MESSAGE: &str = "No data available for visualization.";

/// Lays out and renders the chart in one step. `None` means the dataset had
/// no chartable entries; show [`NO_DATA_MESSAGE`] instead.
pub fn chart_svg(data: &[ExtractedDatum], theme: Theme) -> Option<String> {
    chart::layout(data).map(|layout| render_layout(&layout, theme))
}

/// Renders precomputed geometry with the given theme's palette.
pub fn render_layout(layout: &ChartLayout, theme: Theme) -> String {
    let palette = theme.palette();
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg width=\"100%\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        w = layout.width,
        h = layout.height,
    ));

    if layout.has_negative {
        svg.push_str(&format!(
            "  <line x1=\"{x}\" y1=\"0\" x2=\"{x}\" y2=\"{h}\" stroke=\"{stroke}\" stroke-width=\"1\"/>\n",
            x = layout.zero_axis_x,
            h = layout.height,
            stroke = palette.subtle,
        ));
    }

    for row in &layout.rows {
        let fill = if row.is_negative() {
            palette.bar_negative
        } else {
            palette.bar_positive
        };

        svg.push_str("  <g>\n");
        svg.push_str(&format!(
            "    <text x=\"{x}\" y=\"{y}\" fill=\"{fill}\" text-anchor=\"end\" font-size=\"14\">{label}</text>\n",
            x = layout.metric_label_x(),
            y = row.text_baseline_y(),
            fill = palette.text,
            label = escape_text(&row.display_label),
        ));
        svg.push_str(&format!(
            "    <rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"{fill}\" rx=\"{r}\" ry=\"{r}\"><title>{title}</title></rect>\n",
            x = row.bar_x,
            y = row.bar_y(),
            w = row.bar_width,
            h = BAR_HEIGHT,
            fill = fill,
            r = BAR_CORNER_RADIUS,
            title = escape_text(&format!("{}: {}", row.metric, row.value)),
        ));
        svg.push_str(&format!(
            "    <text x=\"{x}\" y=\"{y}\" fill=\"{fill}\" text-anchor=\"{anchor}\" font-size=\"12\" font-family=\"monospace\" font-weight=\"bold\">{value}</text>\n",
            x = row.value_label_x,
            y = row.text_baseline_y(),
            fill = palette.accent,
            anchor = row.value_anchor.as_str(),
            value = escape_text(&row.value),
        ));
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datum(metric: &str, value: &str) -> ExtractedDatum {
        ExtractedDatum {
            metric: metric.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_empty_dataset_renders_nothing() {
        assert!(chart_svg(&[], Theme::Dark).is_none());
        assert!(chart_svg(&[datum("X", "N/A")], Theme::Dark).is_none());
    }

    #[test]
    fn test_axis_line_only_with_negatives() {
        let positive = chart_svg(&[datum("Revenue", "500")], Theme::Dark).unwrap();
        assert!(!positive.contains("<line"));

        let mixed = chart_svg(
            &[datum("Revenue", "500"), datum("Loss", "(100)")],
            Theme::Dark,
        )
        .unwrap();
        assert!(mixed.contains("<line"));
    }

    #[test]
    fn test_theme_palettes_are_applied() {
        let data = vec![datum("Revenue", "500"), datum("Loss", "(100)")];

        let dark = chart_svg(&data, Theme::Dark).unwrap();
        assert!(dark.contains("#007A7A"));
        assert!(dark.contains("#E53E3E"));

        let light = chart_svg(&data, Theme::Light).unwrap();
        assert!(light.contains("#047857"));
        assert!(light.contains("#DC2626"));
    }

    #[test]
    fn test_tooltip_carries_original_value_text() {
        let svg = chart_svg(&[datum("Net Profit", "AED 1.5M")], Theme::Light).unwrap();
        assert!(svg.contains("<title>Net Profit: AED 1.5M</title>"));
    }

    #[test]
    fn test_labels_are_xml_escaped() {
        let svg = chart_svg(&[datum("R&D <costs>", "200")], Theme::Dark).unwrap();
        assert!(svg.contains("R&amp;D &lt;costs&gt;"));
        assert!(!svg.contains("R&D <costs>"));
    }
}
