//! API client library for cartaz.
//!
//! Provides a client for the TMDB v3 REST API.

/// TMDB API client.
pub mod tmdb;
