use std::collections::BTreeSet;

use rand::Rng;

use crate::data::model::NumericField;
use crate::engine::{DerivedOutputs, Engine, Selection, TableRow};

/// Rows per page of the discovery table.
pub const PAGE_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub engine: Engine,

    /// Current user selections.
    pub selection: Selection,

    /// Outputs of the last recomputation.
    pub outputs: DerivedOutputs,

    /// Zero-based page of the discovery table.
    pub table_page: usize,

    /// Set whenever `selection` changes; cleared by [`AppState::refresh`].
    dirty: bool,
}

impl AppState {
    #[cfg(test)]
    pub fn new(engine: Engine) -> Self {
        Self::with_selection(engine, Selection::default())
    }

    pub fn with_selection(engine: Engine, selection: Selection) -> Self {
        Self {
            engine,
            selection,
            outputs: DerivedOutputs::default(),
            table_page: 0,
            dirty: true,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recompute outputs with the thread-local RNG if anything changed.
    pub fn refresh(&mut self) {
        self.refresh_with(&mut rand::rng());
    }

    /// Recompute outputs with the given RNG if anything changed.
    pub fn refresh_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.dirty {
            return;
        }
        let outputs = self.engine.recompute(&self.selection, rng);
        self.selection.selected_tracks = outputs.selected_tracks.clone();
        self.outputs = outputs;
        self.table_page = self.table_page.min(self.page_count().saturating_sub(1));
        self.dirty = false;
    }

    /// Draw a fresh discovery sample without changing the selection.
    pub fn shuffle(&mut self) {
        self.dirty = true;
    }

    pub fn toggle_genre(&mut self, genre: &str) {
        toggle(&mut self.selection.selected_genres, genre);
        self.table_page = 0;
        self.dirty = true;
    }

    pub fn clear_genres(&mut self) {
        self.selection.selected_genres.clear();
        self.table_page = 0;
        self.dirty = true;
    }

    pub fn toggle_group_genre(&mut self, genre: &str) {
        toggle(&mut self.selection.group_by_genres, genre);
        self.dirty = true;
    }

    pub fn set_x_axis(&mut self, field: NumericField) {
        if self.selection.x_axis != field {
            self.selection.x_axis = field;
            self.dirty = true;
        }
    }

    pub fn set_y_axis(&mut self, field: NumericField) {
        if self.selection.y_axis != field {
            self.selection.y_axis = field;
            self.dirty = true;
        }
    }

    pub fn set_artist(&mut self, artist: &str) {
        if self.selection.selected_artist.as_deref() != Some(artist) {
            self.selection.selected_artist = Some(artist.to_string());
            self.dirty = true;
        }
    }

    pub fn toggle_track(&mut self, track_name: &str) {
        toggle(&mut self.selection.selected_tracks, track_name);
        self.dirty = true;
    }

    pub fn clear_tracks(&mut self) {
        self.selection.selected_tracks.clear();
        self.dirty = true;
    }

    /// Selected tracks that the current artist does not have. They stay
    /// selected across an artist change, so the picker lists them separately.
    pub fn stale_tracks(&self) -> Vec<String> {
        self.selection
            .selected_tracks
            .iter()
            .filter(|t| !self.outputs.track_options.contains(*t))
            .cloned()
            .collect()
    }

    // ---- Discovery table paging ----

    pub fn page_count(&self) -> usize {
        self.outputs.table_rows.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> &[TableRow] {
        let rows = &self.outputs.table_rows;
        let start = (self.table_page * PAGE_SIZE).min(rows.len());
        let end = (start + PAGE_SIZE).min(rows.len());
        &rows[start..end]
    }

    pub fn next_page(&mut self) {
        if self.table_page + 1 < self.page_count() {
            self.table_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.table_page = self.table_page.saturating_sub(1);
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::config::DashboardConfig;
    use crate::data::model::tests::track;
    use crate::data::model::TrackDataset;

    fn state() -> AppState {
        let mut tracks = Vec::new();
        for g in ["rock", "pop", "jazz"] {
            for i in 0..6 {
                tracks.push(track("Weezer", &format!("{g} {i}"), g, 50, 0.5));
            }
        }
        let engine = Engine::new(
            Arc::new(TrackDataset::from_tracks(tracks)),
            DashboardConfig::default(),
        );
        AppState::new(engine)
    }

    #[test]
    fn refresh_only_recomputes_when_dirty() {
        let mut s = state();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(s.is_dirty());
        s.toggle_genre("rock");
        s.refresh_with(&mut rng);
        assert!(!s.is_dirty());
        assert_eq!(s.outputs.table_rows.len(), 5);

        // Unchanged axis does not trigger a recompute.
        s.set_x_axis(s.selection.x_axis);
        assert!(!s.is_dirty());
        s.set_x_axis(NumericField::Tempo);
        assert!(s.is_dirty());
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut s = state();
        s.toggle_group_genre("pop");
        assert!(s.selection.group_by_genres.contains("pop"));
        s.toggle_group_genre("pop");
        assert!(!s.selection.group_by_genres.contains("pop"));
    }

    #[test]
    fn pages_through_discovery_rows() {
        let mut s = state();
        let mut rng = StdRng::seed_from_u64(3);
        for g in ["rock", "pop", "jazz"] {
            s.toggle_genre(g);
        }
        s.refresh_with(&mut rng);
        assert_eq!(s.outputs.table_rows.len(), 15);
        assert_eq!(s.page_count(), 2);
        assert_eq!(s.page_rows().len(), 10);
        s.next_page();
        assert_eq!(s.page_rows().len(), 5);
        s.next_page();
        assert_eq!(s.table_page, 1);

        // Shrinking the result clamps the page.
        s.clear_genres();
        s.toggle_genre("rock");
        s.table_page = 1;
        s.refresh_with(&mut rng);
        assert_eq!(s.table_page, 0);
        s.prev_page();
        assert_eq!(s.table_page, 0);
    }

    #[test]
    fn artist_change_keeps_track_selection() {
        let mut s = state();
        let mut rng = StdRng::seed_from_u64(3);
        s.set_artist("Weezer");
        s.toggle_track("rock 1");
        s.refresh_with(&mut rng);
        assert_eq!(s.outputs.artist_chart.point_count(), 1);
        assert_eq!(s.outputs.track_options.len(), 18);

        s.set_artist("Blondie");
        s.refresh_with(&mut rng);
        assert!(s.outputs.track_options.is_empty());
        assert!(s.selection.selected_tracks.contains("rock 1"));
        assert!(s.outputs.artist_chart.is_empty());
    }

    #[test]
    fn stale_track_can_be_unticked_after_artist_switch() {
        let mut s = state();
        let mut rng = StdRng::seed_from_u64(3);
        s.set_artist("Weezer");
        s.toggle_track("rock 1");
        s.refresh_with(&mut rng);
        assert!(s.stale_tracks().is_empty());

        s.set_artist("Blondie");
        s.refresh_with(&mut rng);
        assert_eq!(s.stale_tracks(), ["rock 1"]);

        s.toggle_track("rock 1");
        s.refresh_with(&mut rng);
        assert!(s.selection.selected_tracks.is_empty());
        assert!(s.stale_tracks().is_empty());
        assert_eq!(s.outputs.artist_chart, crate::chart::Chart::Empty);
    }

    #[test]
    fn clear_tracks_drops_every_selection() {
        let mut s = state();
        let mut rng = StdRng::seed_from_u64(3);
        s.set_artist("Weezer");
        s.toggle_track("rock 1");
        s.toggle_track("pop 2");
        s.refresh_with(&mut rng);
        s.set_artist("Blondie");
        s.refresh_with(&mut rng);

        s.clear_tracks();
        assert!(s.is_dirty());
        s.refresh_with(&mut rng);
        assert!(s.selection.selected_tracks.is_empty());
        assert!(s.outputs.artist_chart.is_empty());
    }
}
