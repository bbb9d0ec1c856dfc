use std::collections::BTreeSet;
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::chart::{BarChart, BarSpec, Chart, ScatterChart, ScatterSeries};
use crate::color::PLOT_BACKGROUND;
use crate::config::DashboardConfig;
use crate::data::filter;
use crate::data::model::{NumericField, Track, TrackDataset};

// ---------------------------------------------------------------------------
// Selection state → derived outputs
// ---------------------------------------------------------------------------

/// Everything the user can pick on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    /// Genres to draw discovery samples from.
    pub selected_genres: BTreeSet<String>,
    pub y_axis: NumericField,
    pub x_axis: NumericField,
    /// Genres plotted on the comparison scatter.
    pub group_by_genres: BTreeSet<String>,
    pub selected_artist: Option<String>,
    pub selected_tracks: BTreeSet<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            selected_genres: BTreeSet::new(),
            y_axis: NumericField::Danceability,
            x_axis: NumericField::Energy,
            group_by_genres: BTreeSet::from(["acoustic".to_string()]),
            selected_artist: Some("Billie Eilish".to_string()),
            selected_tracks: BTreeSet::new(),
        }
    }
}

/// The first three columns of a track, as shown in the discovery table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub artists: String,
    pub track_name: String,
    pub track_genre: String,
}

impl From<&Track> for TableRow {
    fn from(track: &Track) -> Self {
        Self {
            artists: track.artist.clone(),
            track_name: track.track_name.clone(),
            track_genre: track.genre.clone(),
        }
    }
}

/// All outputs of one recomputation, delivered together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedOutputs {
    pub table_rows: Vec<TableRow>,
    pub comparison_chart: Chart,
    pub track_options: Vec<String>,
    /// The track selection, re-asserted after the options change.
    pub selected_tracks: BTreeSet<String>,
    pub artist_chart: Chart,
}

impl Default for DerivedOutputs {
    fn default() -> Self {
        Self {
            table_rows: Vec::new(),
            comparison_chart: Chart::Empty,
            track_options: Vec::new(),
            selected_tracks: BTreeSet::new(),
            artist_chart: Chart::Empty,
        }
    }
}

/// Recomputes [`DerivedOutputs`] from a [`Selection`] over a fixed dataset.
#[derive(Debug, Clone)]
pub struct Engine {
    dataset: Arc<TrackDataset>,
    config: DashboardConfig,
}

impl Engine {
    pub fn new(dataset: Arc<TrackDataset>, config: DashboardConfig) -> Self {
        Self { dataset, config }
    }

    pub fn dataset(&self) -> &TrackDataset {
        &self.dataset
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Recompute every output. Only the discovery table uses `rng`.
    pub fn recompute<R: Rng + ?Sized>(&self, selection: &Selection, rng: &mut R) -> DerivedOutputs {
        let outputs = DerivedOutputs {
            table_rows: self.discovery_rows(&selection.selected_genres, rng),
            comparison_chart: self.comparison_chart(selection),
            track_options: self.track_options(selection.selected_artist.as_deref()),
            selected_tracks: selection.selected_tracks.clone(),
            artist_chart: self.artist_chart(selection),
        };
        log::debug!(
            "recomputed: {} table rows, {} scatter points, {} track options, {} bars",
            outputs.table_rows.len(),
            outputs.comparison_chart.point_count(),
            outputs.track_options.len(),
            outputs.artist_chart.point_count()
        );
        outputs
    }

    /// Random sample of `sample_size` tracks per selected genre, grouped by genre.
    pub fn discovery_rows<R: Rng + ?Sized>(
        &self,
        genres: &BTreeSet<String>,
        rng: &mut R,
    ) -> Vec<TableRow> {
        let mut rows = Vec::new();
        for genre in genres {
            let picked = filter::sample_genre(&self.dataset, genre, self.config.sample_size, rng);
            if picked.len() < self.config.sample_size {
                log::debug!(
                    "genre '{genre}' has only {} tracks, showing all of them",
                    picked.len()
                );
            }
            rows.extend(picked.into_iter().map(TableRow::from));
        }
        rows
    }

    /// Scatter of `x_axis` against `y_axis`, coloured by genre.
    pub fn comparison_chart(&self, selection: &Selection) -> Chart {
        if selection.group_by_genres.is_empty() {
            return Chart::Empty;
        }

        // Series appear in the order their genre first shows up.
        let mut series: Vec<ScatterSeries> = Vec::new();
        for track in filter::in_genres(&self.dataset, &selection.group_by_genres) {
            let point = [
                selection.x_axis.value_of(track),
                selection.y_axis.value_of(track),
            ];
            match series.iter_mut().find(|s| s.name == track.genre) {
                Some(s) => s.points.push(point),
                None => series.push(ScatterSeries {
                    name: track.genre.clone(),
                    color: self.config.palette.color_at(series.len()),
                    points: vec![point],
                }),
            }
        }

        Chart::Scatter(ScatterChart {
            x_field: selection.x_axis,
            y_field: selection.y_axis,
            series,
            background: PLOT_BACKGROUND,
        })
    }

    /// Distinct track names by `artist`, in file order.
    pub fn track_options(&self, artist: Option<&str>) -> Vec<String> {
        match artist {
            Some(artist) => filter::distinct_in_order(
                filter::by_artist(&self.dataset, artist),
                |t| t.track_name.as_str(),
            ),
            None => Vec::new(),
        }
    }

    /// Popularity bars for the selected tracks of the selected artist.
    pub fn artist_chart(&self, selection: &Selection) -> Chart {
        let Some(artist) = selection.selected_artist.as_deref() else {
            return Chart::Empty;
        };
        if selection.selected_tracks.is_empty() {
            return Chart::Empty;
        }

        let rows: Vec<&Track> =
            filter::by_artist_and_names(&self.dataset, artist, &selection.selected_tracks)
                .collect();
        let names = filter::distinct_in_order(rows.iter().copied(), |t| t.track_name.as_str());

        let bars = rows
            .iter()
            .map(|t| {
                let slot = names.iter().position(|n| *n == t.track_name).unwrap_or(0);
                BarSpec {
                    label: t.track_name.clone(),
                    value: f64::from(t.popularity),
                    color: self.config.palette.color_at(slot),
                }
            })
            .collect();

        Chart::Bar(BarChart {
            bars,
            background: PLOT_BACKGROUND,
        })
    }
}
