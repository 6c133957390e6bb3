//! Request handlers.

use axum::Json;
use axum::extract::{Path, State};
use cartaz_api::tmdb::{Result as TmdbResult, TmdbApi};
use futures::future::join_all;
use tracing::instrument;

use crate::error::{AppError, Reply};
use crate::models::{ListItem, MovieDetail, RecentEpisode, SeriesDetail};
use crate::reshape;
use crate::selectors::{MovieCategory, SeriesCategory, TrendingSelector};
use crate::state::AppState;

/// Maximum number of changed series resolved per request.
pub const RECENT_SERIES_LIMIT: usize = 10;

/// `GET /api/trending/{periodo}`
#[instrument(skip_all, fields(periodo = %period))]
pub async fn trending(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> Result<Reply<Vec<ListItem>>, AppError> {
    let selector: TrendingSelector = match period.parse() {
        Ok(selector) => selector,
        Err(err) => return Ok(Reply::Invalid(err.to_string())),
    };
    let page = state.tmdb.trending(selector.into()).await?;
    Ok(Reply::Data(reshape::to_list_items(
        &page.results,
        &state.image_base,
    )))
}

/// `GET /api/filmes/{categoria}`
#[instrument(skip_all, fields(categoria = %category))]
pub async fn movies(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Reply<Vec<ListItem>>, AppError> {
    let selector: MovieCategory = match category.parse() {
        Ok(selector) => selector,
        Err(err) => return Ok(Reply::Invalid(err.to_string())),
    };
    let page = state.tmdb.movie_list(selector.into()).await?;
    Ok(Reply::Data(reshape::to_list_items(
        &page.results,
        &state.image_base,
    )))
}

/// `GET /api/series/{categoria}`
#[instrument(skip_all, fields(categoria = %category))]
pub async fn series(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Reply<Vec<ListItem>>, AppError> {
    let selector: SeriesCategory = match category.parse() {
        Ok(selector) => selector,
        Err(err) => return Ok(Reply::Invalid(err.to_string())),
    };
    let page = state.tmdb.tv_list(selector.into()).await?;
    Ok(Reply::Data(reshape::to_list_items(
        &page.results,
        &state.image_base,
    )))
}

/// `GET /api/filme/{id}`
#[instrument(skip_all, fields(id = movie_id))]
pub async fn movie_detail(
    State(state): State<AppState>,
    Path(movie_id): Path<u64>,
) -> Result<Json<MovieDetail>, AppError> {
    let raw = state.tmdb.movie_details(movie_id).await?;
    Ok(Json(reshape::movie_detail(
        &raw,
        &state.image_base,
        &state.region,
    )))
}

/// `GET /api/serie/{id}`
#[instrument(skip_all, fields(id = series_id))]
pub async fn series_detail(
    State(state): State<AppState>,
    Path(series_id): Path<u64>,
) -> Result<Json<SeriesDetail>, AppError> {
    let raw = state.tmdb.tv_details(series_id).await?;
    Ok(Json(reshape::series_detail(
        &raw,
        &state.image_base,
        &state.region,
    )))
}

/// `GET /api/series/novos_episodios`
#[instrument(skip_all)]
pub async fn recent_episodes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecentEpisode>>, AppError> {
    let episodes = collect_recent_episodes(state.tmdb.as_ref(), &state.image_base).await?;
    Ok(Json(episodes))
}

/// Resolves recently changed series into recent-episode records.
///
/// Fetches the change list, keeps the first [`RECENT_SERIES_LIMIT`]
/// entries with an ID, resolves their details concurrently, and drops
/// series without an aired episode. Output preserves change-list
/// order.
async fn collect_recent_episodes<T: TmdbApi + Sync>(
    tmdb: &T,
    image_base: &str,
) -> TmdbResult<Vec<RecentEpisode>> {
    let changes = tmdb.tv_changes().await?;
    let ids: Vec<u64> = changes
        .results
        .iter()
        .take(RECENT_SERIES_LIMIT)
        .filter_map(|change| change.id)
        .collect();
    let details = join_all(ids.iter().map(|&id| tmdb.tv_summary(id))).await;
    let mut episodes = Vec::with_capacity(details.len());
    for detail in details {
        if let Some(episode) = reshape::recent_episode(&detail?, image_base) {
            episodes.push(episode);
        }
    }
    Ok(episodes)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use cartaz_api::tmdb::TmdbClient;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_client(mock: &MockServer) -> TmdbClient {
        TmdbClient::builder()
            .base_url(format!("{}/", mock.uri()).parse().unwrap())
            .api_key("test-key")
            .user_agent("cartaz-test/0.0.0")
            .build()
            .unwrap()
    }

    fn series_body(id: u64, with_last_episode: bool) -> String {
        let last = if with_last_episode {
            format!(
                r#"{{"id": {id}, "name": "Ep", "season_number": 1, "episode_number": 2, "air_date": "2024-06-01", "vote_average": 7.0}}"#
            )
        } else {
            String::from("null")
        };
        format!(
            r#"{{"id": {id}, "name": "Serie {id}", "poster_path": "/p{id}.jpg", "last_episode_to_air": {last}}}"#
        )
    }

    #[tokio::test]
    async fn test_recent_episodes_caps_detail_calls_and_keeps_order() {
        // Arrange
        let mock = MockServer::start().await;
        let changes = include_str!("../../../fixtures/tmdb/tv_changes.json");
        Mock::given(method("GET"))
            .and(path("/tv/changes"))
            .respond_with(ResponseTemplate::new(200).set_body_string(changes))
            .expect(1)
            .mount(&mock)
            .await;
        for id in 1001..=1010_u64 {
            let without_episode = id % 3 == 0;
            Mock::given(method("GET"))
                .and(path(format!("/tv/{id}")))
                .respond_with(
                    ResponseTemplate::new(200).set_body_string(series_body(id, !without_episode)),
                )
                .expect(1)
                .mount(&mock)
                .await;
        }
        for id in 1011..=1015_u64 {
            Mock::given(method("GET"))
                .and(path(format!("/tv/{id}")))
                .respond_with(ResponseTemplate::new(200).set_body_string(series_body(id, true)))
                .expect(0)
                .mount(&mock)
                .await;
        }
        let client = test_client(&mock);

        // Act
        let episodes = collect_recent_episodes(&client, "https://img.test").await.unwrap();

        // Assert
        // 1002, 1005, and 1008 lack an aired episode.
        let ids: Vec<u64> = episodes.iter().map(|e| e.series_id).collect();
        assert_eq!(ids, vec![1001, 1003, 1004, 1006, 1007, 1009, 1010]);
        assert_eq!(episodes[0].poster.as_deref(), Some("https://img.test/p1001.jpg"));
        assert_eq!(episodes[0].season, Some(1));
        assert_eq!(episodes[0].episode, Some(2));
    }

    #[tokio::test]
    async fn test_invalid_trending_selector_makes_no_upstream_call() {
        // Arrange
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(0)
            .mount(&mock)
            .await;
        let state = AppState::new(test_client(&mock), "https://img.test", "BR");

        // Act
        let reply = trending(State(state), Path(String::from("ontem")))
            .await
            .unwrap();

        // Assert
        match reply {
            Reply::Invalid(message) => assert_eq!(message, "Use 'hoje' ou 'semana'."),
            Reply::Data(_) => panic!("expected invalid selector reply"),
        }
    }
}
