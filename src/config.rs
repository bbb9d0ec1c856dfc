use crate::color::TrackPalette;
use crate::error::ConfigError;

/// Artists offered in the artist dropdown unless overridden on the command line.
pub const DEFAULT_ARTISTS: [&str; 8] = [
    "Olivia Rodrigo",
    "Taylor Swift",
    "Billie Eilish",
    "Frank Ocean",
    "Blondie",
    "Lana Del Rey",
    "Coldplay",
    "Weezer",
];

/// Tracks drawn per genre for the discovery table.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Fixed, process-lifetime settings for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub artists: Vec<String>,
    pub palette: TrackPalette,
    pub sample_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            artists: DEFAULT_ARTISTS.iter().map(|a| a.to_string()).collect(),
            palette: TrackPalette::default(),
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl DashboardConfig {
    /// Apply command-line overrides on top of the defaults. An empty artist
    /// list keeps the built-in one.
    pub fn with_overrides(
        artists: Vec<String>,
        palette: Option<TrackPalette>,
        sample_size: Option<usize>,
    ) -> Self {
        let mut config = Self::default();
        if !artists.is_empty() {
            config.artists = artists;
        }
        if let Some(palette) = palette {
            config.palette = palette;
        }
        if let Some(n) = sample_size {
            config.sample_size = n;
        }
        config
    }
}

/// `clap` value parser for `--sample-size`.
pub fn parse_sample_size(s: &str) -> Result<usize, ConfigError> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::BadSampleSize(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard() {
        let c = DashboardConfig::default();
        assert_eq!(c.sample_size, 5);
        assert_eq!(c.artists.len(), 8);
        assert!(c.artists.iter().any(|a| a == "Billie Eilish"));
        assert_eq!(c.palette.len(), 7);
    }

    #[test]
    fn overrides_replace_defaults() {
        let c = DashboardConfig::with_overrides(vec!["Blur".into()], None, Some(3));
        assert_eq!(c.artists, ["Blur"]);
        assert_eq!(c.sample_size, 3);
        assert_eq!(c.palette, TrackPalette::default());

        let kept = DashboardConfig::with_overrides(Vec::new(), None, None);
        assert_eq!(kept, DashboardConfig::default());
    }

    #[test]
    fn sample_size_must_be_positive() {
        assert_eq!(parse_sample_size("10"), Ok(10));
        assert!(parse_sample_size("0").is_err());
        assert!(parse_sample_size("-1").is_err());
        assert!(parse_sample_size("five").is_err());
    }
}
