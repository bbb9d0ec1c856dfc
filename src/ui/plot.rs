use eframe::egui::{self, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::chart::Chart;
use crate::color::PLOT_BACKGROUND;

const PLOT_HEIGHT: f32 = 380.0;

// ---------------------------------------------------------------------------
// Chart rendering
// ---------------------------------------------------------------------------

/// Render a chart spec. `Empty` draws bare axes, like an empty figure.
pub fn chart(ui: &mut Ui, id: &str, chart: &Chart) {
    let background = match chart {
        Chart::Scatter(s) => s.background,
        Chart::Bar(b) => b.background,
        Chart::Empty => PLOT_BACKGROUND,
    };

    egui::Frame::default()
        .fill(background.to_color32())
        .show(ui, |ui: &mut Ui| match chart {
            Chart::Empty => {
                Plot::new(id)
                    .height(PLOT_HEIGHT)
                    .show_background(false)
                    .show(ui, |_plot_ui| {});
            }
            Chart::Scatter(scatter) => {
                Plot::new(id)
                    .legend(Legend::default())
                    .height(PLOT_HEIGHT)
                    .show_background(false)
                    .x_axis_label(scatter.x_field.name())
                    .y_axis_label(scatter.y_field.name())
                    .allow_boxed_zoom(true)
                    .allow_drag(true)
                    .allow_scroll(true)
                    .allow_zoom(true)
                    .show(ui, |plot_ui| {
                        for series in &scatter.series {
                            let points = Points::new(series.points.clone())
                                .name(&series.name)
                                .color(series.color.to_color32())
                                .radius(2.5);
                            plot_ui.points(points);
                        }
                    });
            }
            Chart::Bar(bars) => {
                // Category axis: bar `i` sits at x = i.
                let labels: Vec<String> = bars.bars.iter().map(|b| b.label.clone()).collect();
                Plot::new(id)
                    .legend(Legend::default())
                    .height(PLOT_HEIGHT)
                    .show_background(false)
                    .x_axis_label("track_name")
                    .y_axis_label("popularity")
                    .x_axis_formatter(move |mark, _range| {
                        let slot = mark.value.round();
                        if (mark.value - slot).abs() > 1e-6 || slot < 0.0 {
                            return String::new();
                        }
                        labels.get(slot as usize).cloned().unwrap_or_default()
                    })
                    .allow_drag(false)
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        for (i, spec) in bars.bars.iter().enumerate() {
                            let color = spec.color.to_color32();
                            let bar = Bar::new(i as f64, spec.value).width(0.7).fill(color);
                            plot_ui.bar_chart(
                                BarChart::new(vec![bar]).name(&spec.label).color(color),
                            );
                        }
                    });
            }
        });

    if !matches!(chart, Chart::Empty) && chart.is_empty() {
        ui.label(egui::RichText::new("No matching tracks.").italics());
    }
}
