use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidFieldError;

// ---------------------------------------------------------------------------
// NumericField – the ten audio-feature columns that can be charted
// ---------------------------------------------------------------------------

/// One of the numeric audio-feature columns. Axis selectors only ever hold
/// one of these, so an unknown column name is rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Danceability,
    Energy,
    Key,
    Loudness,
    Speechiness,
    Acousticness,
    Instrumentalness,
    Valence,
    Tempo,
    TimeSignature,
}

impl NumericField {
    /// All fields, in column order.
    pub const ALL: [NumericField; 10] = [
        NumericField::Danceability,
        NumericField::Energy,
        NumericField::Key,
        NumericField::Loudness,
        NumericField::Speechiness,
        NumericField::Acousticness,
        NumericField::Instrumentalness,
        NumericField::Valence,
        NumericField::Tempo,
        NumericField::TimeSignature,
    ];

    /// The CSV column name.
    pub fn name(self) -> &'static str {
        match self {
            NumericField::Danceability => "danceability",
            NumericField::Energy => "energy",
            NumericField::Key => "key",
            NumericField::Loudness => "loudness",
            NumericField::Speechiness => "speechiness",
            NumericField::Acousticness => "acousticness",
            NumericField::Instrumentalness => "instrumentalness",
            NumericField::Valence => "valence",
            NumericField::Tempo => "tempo",
            NumericField::TimeSignature => "time_signature",
        }
    }

    /// Read this field from a track.
    pub fn value_of(self, track: &Track) -> f64 {
        match self {
            NumericField::Danceability => track.danceability,
            NumericField::Energy => track.energy,
            NumericField::Key => track.key,
            NumericField::Loudness => track.loudness,
            NumericField::Speechiness => track.speechiness,
            NumericField::Acousticness => track.acousticness,
            NumericField::Instrumentalness => track.instrumentalness,
            NumericField::Valence => track.valence,
            NumericField::Tempo => track.tempo,
            NumericField::TimeSignature => track.time_signature,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericField {
    type Err = InvalidFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumericField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| InvalidFieldError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Track – one row of the CSV
// ---------------------------------------------------------------------------

/// A single track record. Column names follow the Spotify tracks dataset;
/// any extra columns in the file are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "artists")]
    pub artist: String,
    pub track_name: String,
    #[serde(rename = "track_genre")]
    pub genre: String,
    pub popularity: u32,
    pub danceability: f64,
    pub energy: f64,
    pub key: f64,
    pub loudness: f64,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub time_signature: f64,
}

/// Columns that must be present in the CSV header.
pub const REQUIRED_COLUMNS: [&str; 14] = [
    "artists",
    "track_name",
    "track_genre",
    "popularity",
    "danceability",
    "energy",
    "key",
    "loudness",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "valence",
    "tempo",
    "time_signature",
];

// ---------------------------------------------------------------------------
// TrackDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded tracks plus a per-genre row index. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct TrackDataset {
    tracks: Vec<Track>,
    /// Genres in the order they first appear in the file.
    genre_order: Vec<String>,
    /// Genre → indices into `tracks`, in file order.
    genre_index: BTreeMap<String, Vec<usize>>,
}

impl TrackDataset {
    /// Build the genre index from the loaded tracks.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        let mut genre_order = Vec::new();
        let mut genre_index: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for (i, track) in tracks.iter().enumerate() {
            let rows = genre_index.entry(track.genre.clone()).or_insert_with(|| {
                genre_order.push(track.genre.clone());
                Vec::new()
            });
            rows.push(i);
        }

        TrackDataset {
            tracks,
            genre_order,
            genre_index,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Genres in first-seen order, for populating selectors.
    pub fn genres_in_order(&self) -> &[String] {
        &self.genre_order
    }

    /// Sorted set of distinct genres.
    pub fn distinct_genres(&self) -> BTreeSet<String> {
        self.genre_index.keys().cloned().collect()
    }

    /// Row indices of the tracks in `genre` (empty for an unknown genre).
    pub fn tracks_by_genre(&self, genre: &str) -> &[usize] {
        self.genre_index
            .get(genre)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct values of any CSV column, rendered as text.
    pub fn distinct_values(&self, column: &str) -> Result<BTreeSet<String>, InvalidFieldError> {
        let project: Box<dyn Fn(&Track) -> String> = match column {
            "artists" => Box::new(|t: &Track| t.artist.clone()),
            "track_name" => Box::new(|t: &Track| t.track_name.clone()),
            "track_genre" => Box::new(|t: &Track| t.genre.clone()),
            "popularity" => Box::new(|t: &Track| t.popularity.to_string()),
            other => {
                let field: NumericField = other.parse()?;
                Box::new(move |t: &Track| field.value_of(t).to_string())
            }
        };
        Ok(self.tracks.iter().map(|t| project(t)).collect())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a track with every feature set to `feature`.
    pub(crate) fn track(artist: &str, name: &str, genre: &str, popularity: u32, feature: f64) -> Track {
        Track {
            artist: artist.to_string(),
            track_name: name.to_string(),
            genre: genre.to_string(),
            popularity,
            danceability: feature,
            energy: feature * 2.0,
            key: 5.0,
            loudness: -7.5,
            speechiness: 0.04,
            acousticness: 0.3,
            instrumentalness: 0.0,
            valence: 0.5,
            tempo: 120.0,
            time_signature: 4.0,
        }
    }

    #[test]
    fn numeric_field_parses_every_column_name() {
        for field in NumericField::ALL {
            assert_eq!(field.name().parse::<NumericField>().unwrap(), field);
        }
    }

    #[test]
    fn numeric_field_rejects_unknown_name() {
        let err = "popularity".parse::<NumericField>().unwrap_err();
        assert_eq!(err, InvalidFieldError("popularity".to_string()));
    }

    #[test]
    fn genre_index_keeps_first_seen_order() {
        let ds = TrackDataset::from_tracks(vec![
            track("A", "a1", "rock", 10, 0.1),
            track("B", "b1", "acoustic", 20, 0.2),
            track("A", "a2", "rock", 30, 0.3),
        ]);
        assert_eq!(ds.genres_in_order(), ["rock", "acoustic"]);
        assert_eq!(ds.tracks_by_genre("rock"), [0, 2]);
        assert!(ds.tracks_by_genre("jazz").is_empty());
        assert_eq!(
            ds.distinct_genres().into_iter().collect::<Vec<_>>(),
            ["acoustic", "rock"]
        );
    }

    #[test]
    fn distinct_values_covers_text_and_numeric_columns() {
        let ds = TrackDataset::from_tracks(vec![
            track("A", "a1", "rock", 10, 0.5),
            track("A", "a2", "rock", 10, 0.25),
        ]);
        let artists = ds.distinct_values("artists").unwrap();
        assert_eq!(artists.len(), 1);
        let pop = ds.distinct_values("popularity").unwrap();
        assert!(pop.contains("10"));
        let dance = ds.distinct_values("danceability").unwrap();
        assert_eq!(dance.len(), 2);
        assert!(ds.distinct_values("album_name").is_err());
    }
}
