//! Shared application state.

use std::sync::Arc;

use cartaz_api::tmdb::TmdbClient;

/// State shared across request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Upstream TMDB client.
    pub tmdb: Arc<TmdbClient>,
    /// Image CDN base URL prepended to relative image paths.
    pub image_base: Arc<str>,
    /// Region code used for certification lookup.
    pub region: Arc<str>,
}

impl AppState {
    /// Builds the shared state.
    #[must_use]
    pub fn new(tmdb: TmdbClient, image_base: &str, region: &str) -> Self {
        Self {
            tmdb: Arc::new(tmdb),
            image_base: Arc::from(image_base),
            region: Arc::from(region),
        }
    }
}
