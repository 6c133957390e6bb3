//! `TmdbClient` - TMDB API client implementation.

use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::TmdbApi;
use super::error::TmdbError;
use super::types::{
    MovieListKind, TmdbChange, TmdbListItem, TmdbMovieDetails, TmdbPage, TmdbTvDetails,
    TrendingWindow, TvListKind,
};
use crate::tmdb::Result;

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Default display language requested on every call.
const DEFAULT_LANGUAGE: &str = "pt-BR";

/// TMDB API client.
///
/// Issues plain GET requests with the API key and display language as
/// query parameters. No retry, backoff, or timeout is applied; failures
/// surface as [`TmdbError`] for the caller to map.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API key passed as the `api_key` query parameter.
    api_key: String,
    /// Display language passed as the `language` query parameter.
    language: String,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
    language: Option<String>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
            language: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the display language (default: "pt-BR").
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| TmdbError::Config(String::from("api_key is required")))?;
        let user_agent = self
            .user_agent
            .ok_or_else(|| TmdbError::Config(String::from("user_agent is required")))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| TmdbError::Config(format!("invalid default base URL: {e}")))?,
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_key,
            language: self
                .language
                .unwrap_or_else(|| String::from(DEFAULT_LANGUAGE)),
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Sends a GET request with the API key and language appended to
    /// the caller's query parameters.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| TmdbError::Config(format!("failed to join URL path `{path}`: {e}")))?;

        tracing::debug!(path, "TMDB API request");

        let response = self
            .http_client
            .get(url)
            .query(query)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TmdbError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| TmdbError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}

impl TmdbApi for TmdbClient {
    #[instrument(skip_all)]
    async fn trending(&self, window: TrendingWindow) -> Result<TmdbPage<TmdbListItem>> {
        let path = format!("trending/all/{}", window.as_path());
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn movie_list(&self, kind: MovieListKind) -> Result<TmdbPage<TmdbListItem>> {
        let path = format!("movie/{}", kind.as_path());
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn tv_list(&self, kind: TvListKind) -> Result<TmdbPage<TmdbListItem>> {
        let path = format!("tv/{}", kind.as_path());
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn movie_details(&self, movie_id: u64) -> Result<TmdbMovieDetails> {
        let path = format!("movie/{movie_id}");
        let query = [("append_to_response", "recommendations,release_dates")];
        self.get_json(&path, &query).await
    }

    #[instrument(skip_all)]
    async fn tv_details(&self, series_id: u64) -> Result<TmdbTvDetails> {
        let path = format!("tv/{series_id}");
        let query = [("append_to_response", "recommendations,content_ratings")];
        self.get_json(&path, &query).await
    }

    #[instrument(skip_all)]
    async fn tv_summary(&self, series_id: u64) -> Result<TmdbTvDetails> {
        let path = format!("tv/{series_id}");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn tv_changes(&self) -> Result<TmdbPage<TmdbChange>> {
        self.get_json("tv/changes", &[]).await
    }
}
