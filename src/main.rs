mod app;
mod chart;
mod color;
mod config;
mod data;
mod engine;
mod error;
mod state;
mod ui;

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use app::TrackExplorerApp;
use color::TrackPalette;
use config::{parse_sample_size, DashboardConfig};
use data::model::NumericField;
use engine::{Engine, Selection};
use state::AppState;

/// Interactive dashboard over a CSV of Spotify track metadata.
#[derive(Parser, Debug)]
#[command(version, about)]
struct CliArgs {
    /// Path to the tracks CSV.
    #[arg(default_value = "data.csv")]
    data: PathBuf,

    /// Tracks drawn per genre in the discovery table.
    #[arg(long, value_parser = parse_sample_size)]
    sample_size: Option<usize>,

    /// Comma-separated hex colours used for chart categories.
    #[arg(long, value_parser = TrackPalette::parse_list)]
    palette: Option<TrackPalette>,

    /// Artist offered in the artist dropdown (repeatable; replaces the built-in list).
    #[arg(long = "artist")]
    artists: Vec<String>,

    /// Print the distinct values of a column (e.g. `track_genre`) and exit.
    #[arg(long, value_name = "COLUMN", conflicts_with = "dump")]
    list: Option<String>,

    /// Print the outputs for the selection below as JSON instead of opening a window.
    #[arg(long)]
    dump: bool,

    /// Genre to sample for the discovery table (repeatable).
    #[arg(long = "genre", requires = "dump")]
    genres: Vec<String>,

    /// Genre to plot on the comparison chart (repeatable).
    #[arg(long = "group-genre", requires = "dump")]
    group_genres: Vec<String>,

    #[arg(short = 'x', long, default_value = "energy", value_parser = parse_field)]
    x_axis: NumericField,

    #[arg(short = 'y', long, default_value = "danceability", value_parser = parse_field)]
    y_axis: NumericField,

    /// Artist whose tracks are listed and charted.
    #[arg(long, requires = "dump")]
    select_artist: Option<String>,

    /// Track of the selected artist to chart (repeatable).
    #[arg(long = "track", requires = "dump")]
    tracks: Vec<String>,

    /// Seed for discovery sampling, for repeatable dumps.
    #[arg(long, requires = "dump")]
    seed: Option<u64>,
}

fn parse_field(s: &str) -> Result<NumericField, error::InvalidFieldError> {
    s.parse()
}

impl CliArgs {
    /// The headless selection. The artist must be one the dashboard offers.
    fn dump_selection(&self, config: &DashboardConfig) -> Result<Selection> {
        if let Some(artist) = &self.select_artist {
            if !config.artists.contains(artist) {
                anyhow::bail!(
                    "artist '{artist}' is not in the configured list: {}",
                    config.artists.join(", ")
                );
            }
        }
        Ok(Selection {
            selected_genres: self.genres.iter().cloned().collect(),
            y_axis: self.y_axis,
            x_axis: self.x_axis,
            group_by_genres: self.group_genres.iter().cloned().collect::<BTreeSet<_>>(),
            selected_artist: self.select_artist.clone(),
            selected_tracks: self.tracks.iter().cloned().collect(),
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let dataset = data::loader::load_csv(&args.data)
        .inspect_err(|e| log::error!("Failed to load dataset: {e}"))
        .with_context(|| format!("loading dataset {}", args.data.display()))?;
    let config =
        DashboardConfig::with_overrides(args.artists.clone(), args.palette.clone(), args.sample_size);
    let engine = Engine::new(Arc::new(dataset), config);
    if engine.dataset().is_empty() {
        log::warn!("{} has no track rows; every view will be empty", args.data.display());
    }

    if let Some(column) = &args.list {
        let values = engine.dataset().distinct_values(column)?;
        for value in values {
            println!("{value}");
        }
        return Ok(());
    }
    if args.dump {
        return dump(&engine, &args);
    }

    let mut selection = Selection {
        x_axis: args.x_axis,
        y_axis: args.y_axis,
        ..Selection::default()
    };
    if !engine.config().artists.iter().any(|a| Some(a) == selection.selected_artist.as_ref()) {
        selection.selected_artist = engine.config().artists.first().cloned();
    }
    let state = AppState::with_selection(engine, selection);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Track Explorer – Spotify Data Center",
        options,
        Box::new(move |_cc| Ok(Box::new(TrackExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}

/// Headless mode: one recompute, printed as pretty JSON.
fn dump(engine: &Engine, args: &CliArgs) -> Result<()> {
    let selection = args.dump_selection(engine.config())?;
    let outputs = match args.seed {
        Some(seed) => engine.recompute(&selection, &mut StdRng::seed_from_u64(seed)),
        None => engine.recompute(&selection, &mut rand::rng()),
    };
    let json = serde_json::to_string_pretty(&outputs).context("serializing outputs")?;
    println!("{json}");
    Ok(())
}
