use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Discovery table
// ---------------------------------------------------------------------------

/// Render the paged discovery table (artists, track name, genre).
pub fn discovery_table(ui: &mut Ui, state: &mut AppState) {
    if state.outputs.table_rows.is_empty() {
        ui.label(RichText::new("No genres selected.").italics());
        return;
    }

    ui.push_id("discovery_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .column(Column::initial(220.0).at_least(120.0))
            .column(Column::initial(320.0).at_least(160.0))
            .column(Column::remainder().at_least(100.0))
            .header(22.0, |mut header| {
                for title in ["artists", "track_name", "track_genre"] {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for row in state.page_rows() {
                    body.row(20.0, |mut r| {
                        r.col(|ui: &mut Ui| {
                            ui.label(&row.artists);
                        });
                        r.col(|ui: &mut Ui| {
                            ui.label(&row.track_name);
                        });
                        r.col(|ui: &mut Ui| {
                            ui.label(&row.track_genre);
                        });
                    });
                }
            });
    });

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("◀").clicked() {
            state.prev_page();
        }
        ui.label(format!("page {} / {}", state.table_page + 1, state.page_count()));
        if ui.small_button("▶").clicked() {
            state.next_page();
        }
    });
}
