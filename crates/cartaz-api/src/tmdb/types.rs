//! TMDB API response types and endpoint selectors.
//!
//! Every field the facade merely forwards is optional with a serde
//! default, so decoding never fails on a sparse upstream record.

use serde::{Deserialize, Serialize};

// --- Endpoint selectors ---

/// Time window for the `trending/all/{window}` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingWindow {
    /// Trending over the last 24 hours.
    Day,
    /// Trending over the last 7 days.
    Week,
}

impl TrendingWindow {
    /// Upstream path segment.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

/// Movie listing under `movie/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieListKind {
    /// `movie/popular`.
    Popular,
    /// `movie/upcoming`.
    Upcoming,
    /// `movie/top_rated`.
    TopRated,
    /// `movie/now_playing`.
    NowPlaying,
}

impl MovieListKind {
    /// Upstream path segment.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Upcoming => "upcoming",
            Self::TopRated => "top_rated",
            Self::NowPlaying => "now_playing",
        }
    }
}

/// TV series listing under `tv/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvListKind {
    /// `tv/popular`.
    Popular,
    /// `tv/top_rated`.
    TopRated,
    /// `tv/on_the_air`.
    OnTheAir,
}

impl TvListKind {
    /// Upstream path segment.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::OnTheAir => "on_the_air",
        }
    }
}

// --- Paged responses ---

/// Paginated response wrapper used by list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage<T> {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Result entries.
    #[serde(default)]
    pub results: Vec<T>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

impl<T> Default for TmdbPage<T> {
    fn default() -> Self {
        Self {
            page: 0,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// Bare `{ "results": [...] }` wrapper used by appended sub-responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbResults<T> {
    /// Result entries.
    #[serde(default)]
    pub results: Vec<T>,
}

// --- List items ---

/// A single entry from trending, listing, or recommendation results.
///
/// Trending mixes movies, TV series, and people, so everything except
/// the identifier is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbListItem {
    /// TMDB identifier.
    pub id: u64,
    /// Localized title (movies).
    #[serde(default)]
    pub title: Option<String>,
    /// Localized name (TV series, people).
    #[serde(default)]
    pub name: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Release date (movies, YYYY-MM-DD).
    #[serde(default)]
    pub release_date: Option<String>,
    /// First air date (TV series, YYYY-MM-DD).
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Media type discriminator (`movie`, `tv`, `person`).
    #[serde(default)]
    pub media_type: Option<String>,
}

// --- Shared detail fragments ---

/// Genre entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    /// Genre ID.
    pub id: u64,
    /// Genre name.
    pub name: String,
}

/// Per-region release entries from `release_dates.results[]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbRegionReleases {
    /// Region code (ISO 3166-1).
    pub iso_3166_1: String,
    /// Release entries for this region.
    #[serde(default)]
    pub release_dates: Vec<TmdbReleaseEntry>,
}

/// A single release entry within a region.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbReleaseEntry {
    /// Age certification label (may be empty).
    #[serde(default)]
    pub certification: Option<String>,
    /// Release date.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Release type (premiere, theatrical, digital, ...).
    #[serde(rename = "type", default)]
    pub release_type: Option<u32>,
}

/// Per-region content rating from `content_ratings.results[]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbContentRating {
    /// Region code (ISO 3166-1).
    pub iso_3166_1: String,
    /// Age rating label (may be empty).
    #[serde(default)]
    pub rating: Option<String>,
}

// --- Movie details ---

/// Response from `movie/{id}` with appended recommendations and
/// release dates.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    #[serde(default)]
    pub title: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Release date.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    /// Appended `release_dates` sub-response.
    #[serde(default)]
    pub release_dates: Option<TmdbResults<TmdbRegionReleases>>,
    /// Appended `recommendations` sub-response.
    #[serde(default)]
    pub recommendations: Option<TmdbPage<TmdbListItem>>,
}

// --- TV details ---

/// Last or next episode summary embedded in TV details.
///
/// Serialized back out unchanged by the facade, so it carries every
/// field TMDB documents for `*_episode_to_air`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbEpisodeToAir {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode name.
    #[serde(default)]
    pub name: Option<String>,
    /// Episode overview.
    #[serde(default)]
    pub overview: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Vote count.
    #[serde(default)]
    pub vote_count: Option<u32>,
    /// Air date (YYYY-MM-DD).
    #[serde(default)]
    pub air_date: Option<String>,
    /// Episode number within the season.
    #[serde(default)]
    pub episode_number: Option<u32>,
    /// Episode type (`standard`, `finale`, ...).
    #[serde(default)]
    pub episode_type: Option<String>,
    /// Production code.
    #[serde(default)]
    pub production_code: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Season number.
    #[serde(default)]
    pub season_number: Option<u32>,
    /// Parent series ID.
    #[serde(default)]
    pub show_id: Option<u64>,
    /// Still image path.
    #[serde(default)]
    pub still_path: Option<String>,
}

/// Response from `tv/{id}`, optionally with appended recommendations
/// and content ratings.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    #[serde(default)]
    pub name: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Total number of seasons.
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    /// Total number of episodes.
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
    /// Most recently aired episode.
    #[serde(default)]
    pub last_episode_to_air: Option<TmdbEpisodeToAir>,
    /// Next scheduled episode.
    #[serde(default)]
    pub next_episode_to_air: Option<TmdbEpisodeToAir>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    /// Appended `content_ratings` sub-response.
    #[serde(default)]
    pub content_ratings: Option<TmdbResults<TmdbContentRating>>,
    /// Appended `recommendations` sub-response.
    #[serde(default)]
    pub recommendations: Option<TmdbPage<TmdbListItem>>,
}

// --- Change list ---

/// A single entry from the `tv/changes` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbChange {
    /// TMDB series ID (null for withdrawn entries).
    #[serde(default)]
    pub id: Option<u64>,
    /// Adult flag.
    #[serde(default)]
    pub adult: Option<bool>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_list_item_minimal_fields() {
        // Arrange
        let json = r#"{"id": 42, "title": "X"}"#;

        // Act
        let item: TmdbListItem = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(item.id, 42);
        assert_eq!(item.title.as_deref(), Some("X"));
        assert!(item.name.is_none());
        assert!(item.poster_path.is_none());
        assert!(item.vote_average.is_none());
        assert!(item.media_type.is_none());
    }

    #[test]
    fn test_tv_details_without_appends() {
        // Arrange
        let json = r#"{"id": 7, "name": "S", "number_of_seasons": 2}"#;

        // Act
        let details: TmdbTvDetails = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(details.id, 7);
        assert_eq!(details.number_of_seasons, Some(2));
        assert!(details.content_ratings.is_none());
        assert!(details.recommendations.is_none());
        assert!(details.last_episode_to_air.is_none());
    }

    #[test]
    fn test_episode_to_air_roundtrip() {
        // Arrange
        let json = r#"{"id": 1, "name": "Ep", "season_number": 3, "episode_number": 9, "air_date": "2024-05-01"}"#;

        // Act
        let ep: TmdbEpisodeToAir = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&ep).unwrap();

        // Assert
        assert_eq!(out["name"], "Ep");
        assert_eq!(out["season_number"], 3);
        assert_eq!(out["episode_number"], 9);
    }

    #[test]
    fn test_change_entry_null_id() {
        // Arrange
        let json = r#"{"results": [{"id": null, "adult": false}, {"id": 99}]}"#;

        // Act
        let page: TmdbPage<TmdbChange> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(page.results.len(), 2);
        assert!(page.results[0].id.is_none());
        assert_eq!(page.results[1].id, Some(99));
    }

    #[test]
    fn test_selector_paths() {
        // Arrange & Act & Assert
        assert_eq!(TrendingWindow::Day.as_path(), "day");
        assert_eq!(TrendingWindow::Week.as_path(), "week");
        assert_eq!(MovieListKind::TopRated.as_path(), "top_rated");
        assert_eq!(MovieListKind::NowPlaying.as_path(), "now_playing");
        assert_eq!(TvListKind::OnTheAir.as_path(), "on_the_air");
    }
}
