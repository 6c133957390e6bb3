//! Route table.

use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::state::AppState;

/// Builds the application router.
///
/// `/api/series/novos_episodios` is registered next to the
/// `/api/series/{categoria}` capture; the static segment takes
/// precedence.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/trending/{periodo}", get(handlers::trending))
        .route("/api/filmes/{categoria}", get(handlers::movies))
        .route("/api/series/{categoria}", get(handlers::series))
        .route("/api/series/novos_episodios", get(handlers::recent_episodes))
        .route("/api/filme/{id}", get(handlers::movie_detail))
        .route("/api/serie/{id}", get(handlers::series_detail))
        .with_state(state)
}
