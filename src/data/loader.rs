use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;

use super::model::{Track, TrackDataset, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the track dataset from a CSV file with a header row.
///
/// Every column in [`REQUIRED_COLUMNS`] must be present; other columns (track
/// ids, album names, the pandas index column, …) are ignored.
pub fn load_csv(path: &Path) -> Result<TrackDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_tracks(file)?;
    log::info!(
        "Loaded {} tracks in {} genres from {}",
        dataset.len(),
        dataset.genres_in_order().len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse tracks from any CSV source.
pub fn read_tracks<R: Read>(source: R) -> Result<TrackDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(source);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(LoadError::MissingColumn(missing.to_string()));
    }

    let mut tracks = Vec::new();
    for result in reader.deserialize::<Track>() {
        let track = result.map_err(|source| LoadError::Row {
            line: source.position().map(|p| p.line()).unwrap_or(0),
            source,
        })?;
        tracks.push(track);
    }

    Ok(TrackDataset::from_tracks(tracks))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const HEADER: &str = ",track_id,artists,album_name,track_name,popularity,duration_ms,explicit,\
danceability,energy,key,loudness,mode,speechiness,acousticness,instrumentalness,liveness,\
valence,tempo,time_signature,track_genre";

    fn write_csv(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        write!(file, "{body}").unwrap();
        file
    }

    #[test]
    fn loads_spotify_layout_and_ignores_extra_columns() {
        let file = write_csv(
            "0,5SuOikwiRyPMVoIQDJUgSV,Gen Hoshino,Comedy,Comedy,73,230666,False,0.676,0.461,1,-6.746,0,0.143,0.0322,1.01e-06,0.358,0.715,87.917,4,acoustic\n\
             1,6lfxq3CG4xtTiEg7opyCyx,Billie Eilish,WWAFAWDWG,bury a friend,74,193143,False,0.905,0.389,5,-14.505,0,0.332,0.74,0.162,0.106,0.196,120.046,4,pop\n",
        );
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        let bury = &ds.tracks()[1];
        assert_eq!(bury.artist, "Billie Eilish");
        assert_eq!(bury.track_name, "bury a friend");
        assert_eq!(bury.genre, "pop");
        assert_eq!(bury.popularity, 74);
        assert_eq!(bury.tempo, 120.046);
        assert_eq!(ds.genres_in_order(), ["acoustic", "pop"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_csv(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn missing_required_column_is_reported() {
        let csv = "artists,track_name,popularity\nA,a,1\n";
        let err = read_tracks(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "track_genre"));
    }

    #[test]
    fn unparsable_row_is_rejected() {
        let file = write_csv(
            "0,id,A,alb,t,not-a-number,1,False,0.5,0.5,1,-5,0,0.1,0.1,0,0.1,0.5,100,4,rock\n",
        );
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Row { .. }), "{err}");
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let file = write_csv("");
        let ds = load_csv(file.path()).unwrap();
        assert!(ds.is_empty());
    }
}
