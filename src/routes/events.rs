use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::AppError;
use crate::models::{Event, EventPayload};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

/// GET /events - All events.
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(state.events.list().await?))
}

/// GET /events/{id} - A single event.
async fn get_event(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Event>, AppError> {
    let Path(id) = path?;
    Ok(Json(state.events.get(id).await?))
}

/// POST /events - Create an event.
async fn create_event(
    State(state): State<AppState>,
    body: Result<Json<EventPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let Json(payload) = body?;
    let event = state.events.create(payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /events/{id} - Replace an event's name and date.
async fn update_event(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<EventPayload>, JsonRejection>,
) -> Result<Json<Event>, AppError> {
    let Path(id) = path?;
    let Json(payload) = body?;
    Ok(Json(state.events.update(id, payload).await?))
}

/// DELETE /events/{id} - Delete an event and its tickets.
async fn delete_event(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.events.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
