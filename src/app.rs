use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TrackExplorerApp {
    pub state: AppState,
}

impl TrackExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for TrackExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply last frame's selection changes before drawing.
        self.state.refresh();

        // ---- Top panel: title bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui: &mut Ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: the three dashboard sections ----
        egui::CentralPanel::default().show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::intro(ui);
                    ui.separator();
                    panels::discovery_section(ui, &mut self.state);
                    ui.separator();
                    panels::comparison_section(ui, &mut self.state);
                    ui.separator();
                    panels::artist_section(ui, &mut self.state);
                });
        });

        if self.state.is_dirty() {
            ctx.request_repaint();
        }
    }
}
