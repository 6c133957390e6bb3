//! End-to-end router tests against a mocked TMDB upstream.

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cartaz_api::tmdb::TmdbClient;
use cartaz_server::{AppState, create_router};

const IMG: &str = "https://img.test";

fn app(mock: &MockServer) -> Router {
    let client = TmdbClient::builder()
        .base_url(format!("{}/", mock.uri()).parse().unwrap())
        .api_key("test-key")
        .user_agent("cartaz-test/0.0.0")
        .build()
        .unwrap();
    create_router(AppState::new(client, IMG, "BR"))
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_trending_today() {
    // Arrange
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending/all/day"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("../../../fixtures/tmdb/trending_day.json")),
        )
        .expect(1)
        .mount(&mock)
        .await;

    // Act
    let (status, body) = get_json(app(&mock), "/api/trending/hoje").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items[0]["poster"].as_str().unwrap().starts_with(IMG));
    assert_eq!(items[1]["tipo"], "tv");
    assert!(items[2]["poster"].is_null());
}

#[tokio::test]
async fn test_trending_invalid_period_is_200_with_error_body() {
    // Arrange
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock)
        .await;

    // Act
    let (status, body) = get_json(app(&mock), "/api/trending/ontem").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["erro"], "Use 'hoje' ou 'semana'.");
}

#[tokio::test]
async fn test_movies_invalid_category_is_200_with_error_body() {
    // Arrange
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock)
        .await;

    // Act
    let (status, body) = get_json(app(&mock), "/api/filmes/top").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["erro"],
        "Categoria inválida. Use: populares, lancamentos, melhores, cartaz."
    );
}

#[tokio::test]
async fn test_series_listing() {
    // Arrange
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tv/popular"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("../../../fixtures/tmdb/tv_popular.json")),
        )
        .expect(1)
        .mount(&mock)
        .await;

    // Act
    let (status, body) = get_json(app(&mock), "/api/series/populares").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0]["titulo"].is_string());
}

#[tokio::test]
async fn test_movie_detail_fields() {
    // Arrange
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("../../../fixtures/tmdb/movie_details_603.json")),
        )
        .expect(1)
        .mount(&mock)
        .await;

    // Act
    let (status, body) = get_json(app(&mock), "/api/filme/603").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 603);
    assert_eq!(body["duracao"], 136);
    assert_eq!(body["classificacao"], "14");
    assert_eq!(body["generos"].as_array().unwrap().len(), 2);
    assert_eq!(body["recomendacoes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_series_detail_fields() {
    // Arrange
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tv/1399"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("../../../fixtures/tmdb/tv_details_1399.json")),
        )
        .expect(1)
        .mount(&mock)
        .await;

    // Act
    let (status, body) = get_json(app(&mock), "/api/serie/1399").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["temporadas"], 8);
    assert_eq!(body["episodios"], 73);
    assert_eq!(body["classificacao"], "18");
    assert_eq!(body["ultimo_episodio"]["episode_number"], 6);
    assert!(body["proximo_episodio"].is_null());
}

#[tokio::test]
async fn test_upstream_not_found_maps_to_404() {
    // Arrange
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"status_code":34,"status_message":"The resource you requested could not be found.","success":false}"#,
        ))
        .mount(&mock)
        .await;

    // Act
    let (status, body) = get_json(app(&mock), "/api/filme/999999").await;

    // Assert
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["erro"].is_string());
}

#[tokio::test]
async fn test_upstream_failure_maps_to_502() {
    // Arrange
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream broke"))
        .mount(&mock)
        .await;

    // Act
    let (status, body) = get_json(app(&mock), "/api/filme/603").await;

    // Assert
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["erro"], "falha ao consultar o provedor de metadados");
}

#[tokio::test]
async fn test_recent_episodes_route_takes_precedence_over_category() {
    // Arrange
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tv/changes"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results": []}"#))
        .expect(1)
        .mount(&mock)
        .await;

    // Act
    let (status, body) = get_json(app(&mock), "/api/series/novos_episodios").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}
