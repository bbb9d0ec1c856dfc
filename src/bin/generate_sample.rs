use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// One CSV row in the Spotify tracks layout (leading index column included).
#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "")]
    index: usize,
    track_id: String,
    artists: &'a str,
    album_name: &'a str,
    track_name: String,
    popularity: u32,
    duration_ms: u32,
    explicit: &'static str,
    danceability: f64,
    energy: f64,
    key: u8,
    loudness: f64,
    mode: u8,
    speechiness: f64,
    acousticness: f64,
    instrumentalness: f64,
    liveness: f64,
    valence: f64,
    tempo: f64,
    time_signature: u8,
    track_genre: &'a str,
}

/// Rough feature centres per genre: (danceability, energy, acousticness, tempo).
const GENRES: [(&str, f64, f64, f64, f64); 6] = [
    ("acoustic", 0.55, 0.40, 0.70, 110.0),
    ("pop", 0.68, 0.65, 0.20, 118.0),
    ("rock", 0.50, 0.80, 0.08, 128.0),
    ("indie", 0.56, 0.58, 0.30, 122.0),
    ("electro", 0.72, 0.85, 0.03, 126.0),
    ("jazz", 0.52, 0.30, 0.80, 100.0),
];

/// Artists from the dashboard dropdown with a few real track names each.
const ARTISTS: [(&str, &str, &[(&str, u32)]); 8] = [
    ("Olivia Rodrigo", "pop", &[("drivers license", 80), ("good 4 u", 83), ("traitor", 78)]),
    ("Taylor Swift", "pop", &[("Anti-Hero", 87), ("cardigan", 79), ("Blank Space", 80)]),
    (
        "Billie Eilish",
        "pop",
        &[("bury a friend", 74), ("bad guy", 82), ("lovely", 85), ("ocean eyes", 77)],
    ),
    ("Frank Ocean", "indie", &[("Pink + White", 83), ("Thinkin Bout You", 80)]),
    ("Blondie", "rock", &[("Heart Of Glass", 72), ("Call Me", 70), ("Atomic", 61)]),
    ("Lana Del Rey", "indie", &[("Summertime Sadness", 78), ("Young And Beautiful", 80)]),
    ("Coldplay", "rock", &[("Yellow", 85), ("The Scientist", 84), ("Viva La Vida", 84)]),
    ("Weezer", "rock", &[("Buddy Holly", 74), ("Say It Ain't So", 72), ("Island In The Sun", 73)]),
];

const FILLER_TRACKS_PER_GENRE: usize = 40;

fn jitter<R: Rng>(rng: &mut R, centre: f64, spread: f64) -> f64 {
    (centre + rng.random_range(-spread..spread)).clamp(0.0, 1.0)
}

fn make_row<'a, R: Rng>(
    rng: &mut R,
    index: usize,
    artist: &'a str,
    genre: &'a str,
    track_name: String,
    popularity: u32,
) -> Row<'a> {
    let &(_, dance, energy, acoustic, tempo) = GENRES
        .iter()
        .find(|g| g.0 == genre)
        .unwrap_or(&GENRES[0]);
    Row {
        index,
        track_id: format!("{:022x}", rng.random::<u128>() >> 40),
        artists: artist,
        album_name: "Sample Album",
        track_name,
        popularity,
        duration_ms: rng.random_range(120_000..320_000),
        explicit: if rng.random_bool(0.15) { "True" } else { "False" },
        danceability: jitter(rng, dance, 0.2),
        energy: jitter(rng, energy, 0.2),
        key: rng.random_range(0..12),
        loudness: -rng.random_range(2.0..16.0),
        mode: rng.random_range(0..2),
        speechiness: jitter(rng, 0.06, 0.05),
        acousticness: jitter(rng, acoustic, 0.2),
        instrumentalness: jitter(rng, 0.05, 0.05),
        liveness: jitter(rng, 0.15, 0.1),
        valence: jitter(rng, 0.5, 0.35),
        tempo: tempo + rng.random_range(-25.0..25.0),
        time_signature: if rng.random_bool(0.9) { 4 } else { 3 },
        track_genre: genre,
    }
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let output_path = std::env::args().nth(1).unwrap_or_else(|| "data.csv".to_string());
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut index = 0;
    for &(genre, ..) in &GENRES {
        for i in 0..FILLER_TRACKS_PER_GENRE {
            let popularity = rng.random_range(0..90);
            let name = format!("{genre} track {i}");
            let row = make_row(&mut rng, index, "Various Artists", genre, name, popularity);
            writer.serialize(row).context("writing row")?;
            index += 1;
        }
    }
    for (artist, genre, tracks) in ARTISTS {
        for &(name, popularity) in tracks {
            let row = make_row(&mut rng, index, artist, genre, name.to_string(), popularity);
            writer.serialize(row).context("writing row")?;
            index += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {index} tracks in {} genres to {output_path}", GENRES.len());
    Ok(())
}
