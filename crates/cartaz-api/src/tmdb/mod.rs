//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB API v3 endpoints and retrieves
//! trending, movie, TV series, and change-list data.

mod api;
mod client;
mod error;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::TmdbError;
#[allow(clippy::module_name_repetitions)]
pub use types::{
    MovieListKind, TmdbChange, TmdbContentRating, TmdbEpisodeToAir, TmdbGenre, TmdbListItem,
    TmdbMovieDetails, TmdbPage, TmdbRegionReleases, TmdbReleaseEntry, TmdbResults, TmdbTvDetails,
    TrendingWindow, TvListKind,
};

/// Convenience result alias for TMDB operations.
pub type Result<T> = std::result::Result<T, TmdbError>;
