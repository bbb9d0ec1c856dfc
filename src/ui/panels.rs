use std::collections::BTreeSet;

use eframe::egui::{self, PopupCloseBehavior, Ui};

use crate::data::model::NumericField;
use crate::state::AppState;
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Spotify Data Center");
        ui.separator();
        let ds = state.engine.dataset();
        ui.label(format!(
            "{} tracks, {} genres",
            ds.len(),
            ds.distinct_genres().len()
        ));
        ui.separator();
        ui.hyperlink_to("Open Spotify", "https://www.spotify.com/");
    });
}

/// Headline and short description above the sections.
pub fn intro(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Get to Know the Numbers Behind the Songs");
        ui.label(
            "An interactive look at Spotify data across more than a hundred genres: \
             discover new tracks, compare audio features between genres, and see how \
             an artist's songs stack up in popularity.",
        );
    });
}

// ---------------------------------------------------------------------------
// Dashboard sections
// ---------------------------------------------------------------------------

/// Genre picker plus the sampled track table.
pub fn discovery_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Discover");
    ui.label(format!(
        "Select a genre to explore: each pick suggests {} random tracks to add to your playlists.",
        state.engine.config().sample_size
    ));

    let genres = state.engine.dataset().genres_in_order().to_vec();
    ui.horizontal(|ui: &mut Ui| {
        let picked = state.selection.selected_genres.clone();
        multi_select(ui, "genre_select", "-Select a Genre-", &genres, &picked, |g| {
            state.toggle_genre(g)
        });
        if ui.button("Shuffle").clicked() {
            state.shuffle();
        }
        if ui.button("Clear").clicked() {
            state.clear_genres();
        }
    });
    ui.add_space(6.0);
    table::discovery_table(ui, state);
}

/// Two axis selectors, the group-by genre picker and the scatter plot.
pub fn comparison_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Compare");
    ui.label("Pick any two numeric features to compare, then choose the genres to plot.");

    let mut y_axis = state.selection.y_axis;
    let mut x_axis = state.selection.x_axis;
    axis_radio_row(ui, "y axis", &mut y_axis);
    axis_radio_row(ui, "x axis", &mut x_axis);
    state.set_y_axis(y_axis);
    state.set_x_axis(x_axis);

    let genres = state.engine.dataset().genres_in_order().to_vec();
    let picked = state.selection.group_by_genres.clone();
    multi_select(ui, "group_by_select", "-Select Genres-", &genres, &picked, |g| {
        state.toggle_group_genre(g)
    });

    ui.add_space(6.0);
    plot::chart(ui, "comparison_plot", &state.outputs.comparison_chart);
}

/// Artist dropdown, track picker and the popularity bars.
pub fn artist_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Artists");
    ui.label("Select an artist, then any of their tracks to compare popularity.");

    let artists = state.engine.config().artists.clone();
    let current = state.selection.selected_artist.clone().unwrap_or_default();
    let options = state.outputs.track_options.clone();
    let picked = state.selection.selected_tracks.clone();
    let stale = state.stale_tracks();

    ui.horizontal(|ui: &mut Ui| {
        egui::ComboBox::from_id_salt("artist_select")
            .selected_text(&current)
            .width(220.0)
            .show_ui(ui, |ui: &mut Ui| {
                for artist in &artists {
                    if ui.selectable_label(current == *artist, artist).clicked() {
                        state.set_artist(artist);
                    }
                }
            });

        // Tracks kept from a previous artist are listed after the options.
        let entries: Vec<String> = options.iter().chain(&stale).cloned().collect();
        multi_select(ui, "track_select", "-Select a Track-", &entries, &picked, |t| {
            state.toggle_track(t)
        });
        if ui.button("Clear").clicked() {
            state.clear_tracks();
        }
    });

    ui.add_space(6.0);
    plot::chart(ui, "artist_plot", &state.outputs.artist_chart);
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

fn axis_radio_row(ui: &mut Ui, label: &str, value: &mut NumericField) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.strong(label);
        for field in NumericField::ALL {
            ui.radio_value(value, field, field.name());
        }
    });
}

/// Drop-down with one checkbox per option; stays open while ticking.
fn multi_select(
    ui: &mut Ui,
    id: &str,
    placeholder: &str,
    options: &[String],
    selected: &BTreeSet<String>,
    mut on_toggle: impl FnMut(&str),
) {
    let summary = match selected.len() {
        0 => placeholder.to_string(),
        1..=3 => selected.iter().cloned().collect::<Vec<_>>().join(", "),
        n => format!("{n} selected"),
    };

    egui::ComboBox::from_id_salt(id)
        .selected_text(summary)
        .width(320.0)
        .height(320.0)
        .close_behavior(PopupCloseBehavior::CloseOnClickOutside)
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                let mut checked = selected.contains(option);
                if ui.checkbox(&mut checked, option).changed() {
                    on_toggle(option);
                }
            }
        });
}
