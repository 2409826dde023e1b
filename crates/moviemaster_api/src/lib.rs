//! HTTP JSON transport for the MovieMaster service.
//!
//! Exposes `MovieService` over `axum` + `tokio`.
//!
//! Endpoints:
//! - GET  /health               - Server status and core version
//! - GET  /movie                - All movies
//! - GET  /movie/{year}/movies  - Movies whose year contains `{year}`
//! - GET  /movie/{id}           - One movie
//! - POST /movie                - Create a movie
//! - PUT  /movie/{id}           - Update a movie
//!
//! All responses use Content-Type: application/json.

mod api;

use std::future::Future;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use moviemaster_core::{MovieRepository, MovieService};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use self::api::{
    handle_create_movie, handle_get_movie, handle_health, handle_list_movies,
    handle_movies_by_year, handle_not_found, handle_update_movie,
};

/// Maximum request body size: 1 MiB.
pub const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({ "error": message })))
}

/// Builds the application router over a shared service.
pub fn router<R>(service: Arc<MovieService<R>>) -> Router
where
    R: MovieRepository + 'static,
{
    // Permissive CORS; the API carries no credentials.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route(
            "/movie",
            get(handle_list_movies::<R>).post(handle_create_movie::<R>),
        )
        .route("/movie/{year}/movies", get(handle_movies_by_year::<R>))
        .route(
            "/movie/{id}",
            get(handle_get_movie::<R>).put(handle_update_movie::<R>),
        )
        .fallback(handle_not_found)
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(service)
}

/// Serves `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
