//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use super::types::{
    MovieListKind, TmdbChange, TmdbListItem, TmdbMovieDetails, TmdbPage, TmdbTvDetails,
    TrendingWindow, TvListKind,
};
use crate::tmdb::Result;

/// TMDB API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Fetches trending movies and TV series for the given window.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn trending(&self, window: TrendingWindow) -> Result<TmdbPage<TmdbListItem>>;

    /// Fetches a movie listing (`movie/{kind}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_list(&self, kind: MovieListKind) -> Result<TmdbPage<TmdbListItem>>;

    /// Fetches a TV series listing (`tv/{kind}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_list(&self, kind: TvListKind) -> Result<TmdbPage<TmdbListItem>>;

    /// Fetches movie details with appended recommendations and release
    /// dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_details(&self, movie_id: u64) -> Result<TmdbMovieDetails>;

    /// Fetches TV series details with appended recommendations and
    /// content ratings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_details(&self, series_id: u64) -> Result<TmdbTvDetails>;

    /// Fetches bare TV series details (no appended sub-responses).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_summary(&self, series_id: u64) -> Result<TmdbTvDetails>;

    /// Fetches the list of recently changed TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_changes(&self) -> Result<TmdbPage<TmdbChange>>;
}
