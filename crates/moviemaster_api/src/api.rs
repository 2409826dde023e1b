//! Movie route handlers.
//!
//! # Responsibility
//! - Validate request bodies before they reach the service.
//! - Translate service outcomes and absence into HTTP status codes.
//!
//! # Invariants
//! - Malformed or incomplete input is answered with 400 and never reaches
//!   the service.
//! - Found/success -> 200 (201 for create), absence/NotFound -> 404,
//!   Error -> 500.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{info, warn};
use moviemaster_core::{
    core_version, CreateOutcome, MovieInput, MovieRepository, MovieService, UpdateOutcome,
};

use super::json_error;

type SharedService<R> = State<Arc<MovieService<R>>>;

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "ok",
        "version": core_version(),
    });
    (StatusCode::OK, Json(response))
}

/// GET /movie
pub(crate) async fn handle_list_movies<R: MovieRepository + 'static>(
    State(service): SharedService<R>,
) -> Response {
    let movies = service.find_all().await;
    info!(
        "event=http_list_movies module=api status=200 count={}",
        movies.len()
    );
    (StatusCode::OK, Json(movies)).into_response()
}

/// GET /movie/{year}/movies
pub(crate) async fn handle_movies_by_year<R: MovieRepository + 'static>(
    State(service): SharedService<R>,
    Path(year): Path<String>,
) -> Response {
    match service.find_by_year(&year).await {
        Some(movies) => {
            info!("event=http_movies_by_year module=api status=200 year={year}");
            (StatusCode::OK, Json(movies)).into_response()
        }
        None => {
            info!("event=http_movies_by_year module=api status=404 year={year}");
            json_error(
                StatusCode::NOT_FOUND,
                &format!("no movies found for year '{year}'"),
            )
            .into_response()
        }
    }
}

/// GET /movie/{id}
pub(crate) async fn handle_get_movie<R: MovieRepository + 'static>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
) -> Response {
    match service.find_by_id(&id).await {
        Some(movie) => {
            info!("event=http_get_movie module=api status=200 id={id}");
            (StatusCode::OK, Json(movie)).into_response()
        }
        None => {
            info!("event=http_get_movie module=api status=404 id={id}");
            json_error(StatusCode::NOT_FOUND, &format!("movie '{id}' not found")).into_response()
        }
    }
}

/// POST /movie
pub(crate) async fn handle_create_movie<R: MovieRepository + 'static>(
    State(service): SharedService<R>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> Response {
    let input = match validated_input(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };

    match service.create(&input).await {
        CreateOutcome::Created(movie) => {
            info!("event=http_create_movie module=api status=201 id={}", movie.id);
            let location = format!("/movie/{}", movie.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(movie),
            )
                .into_response()
        }
        CreateOutcome::Error => {
            warn!("event=http_create_movie module=api status=500");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "unknown error").into_response()
        }
    }
}

/// PUT /movie/{id}
pub(crate) async fn handle_update_movie<R: MovieRepository + 'static>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> Response {
    let input = match validated_input(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };

    match service.update(&id, &input).await {
        UpdateOutcome::Updated(movie) => {
            info!("event=http_update_movie module=api status=200 id={id}");
            (StatusCode::OK, Json(movie)).into_response()
        }
        UpdateOutcome::NotFound => {
            info!("event=http_update_movie module=api status=404 id={id}");
            json_error(StatusCode::NOT_FOUND, &format!("movie '{id}' not found")).into_response()
        }
        UpdateOutcome::Error => {
            warn!("event=http_update_movie module=api status=500 id={id}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "unknown error").into_response()
        }
    }
}

/// Unwraps a JSON body and checks required fields; any failure becomes 400.
fn validated_input(
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> Result<MovieInput, Response> {
    let Json(input) = payload.map_err(|rejection| {
        warn!("event=http_input module=api status=400 error_code=invalid_json");
        json_error(StatusCode::BAD_REQUEST, &rejection.body_text()).into_response()
    })?;

    input.validate().map_err(|err| {
        warn!("event=http_input module=api status=400 error_code=invalid_input error={err}");
        json_error(StatusCode::BAD_REQUEST, &err.to_string()).into_response()
    })?;

    Ok(input)
}
