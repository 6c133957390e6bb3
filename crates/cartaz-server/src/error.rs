//! Error types and HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cartaz_api::tmdb::TmdbError;
use serde::Serialize;
use serde_json::json;

/// Handler-level failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Upstream TMDB call failed.
    #[error(transparent)]
    Tmdb(#[from] TmdbError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Self::Tmdb(err) = self;
        if err.status() == Some(404) {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "erro": "conteúdo não encontrado" })),
            )
                .into_response();
        }
        tracing::error!(error = %err, "TMDB request failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "erro": "falha ao consultar o provedor de metadados" })),
        )
            .into_response()
    }
}

/// Successful handler outcome.
///
/// Selector validation failures keep the original wire contract: a
/// 200 response carrying an `{"erro": ...}` body instead of data.
#[derive(Debug)]
pub enum Reply<T> {
    /// Reshaped payload.
    Data(T),
    /// Rejected request selector, with a localized message.
    Invalid(String),
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Data(data) => Json(data).into_response(),
            Self::Invalid(message) => Json(json!({ "erro": message })).into_response(),
        }
    }
}
