/// Data layer: track records, CSV loading, and row filters.
///
/// Architecture:
/// ```text
///   data.csv
///      │
///      ▼
///   ┌──────────┐
///   │  loader  │  parse rows → TrackDataset
///   └──────────┘
///      │
///      ▼
///   ┌──────────────┐
///   │ TrackDataset │  Vec<Track>, genre index
///   └──────────────┘
///      │
///      ▼
///   ┌──────────┐
///   │  filter  │  genre / artist predicates, per-genre sampling
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
