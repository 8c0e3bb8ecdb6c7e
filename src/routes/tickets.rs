use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::error::AppError;
use crate::models::{Ticket, TicketPayload};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tickets", post(create_ticket))
        .route("/tickets/{event_id}", get(list_tickets))
        .route("/tickets/use/{id}", put(use_ticket))
}

/// GET /tickets/{event_id} - Tickets issued for an event.
async fn list_tickets(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Ticket>>, AppError> {
    let Path(event_id) = path?;
    Ok(Json(state.tickets.list(event_id).await?))
}

/// POST /tickets - Issue a ticket for a future event.
async fn create_ticket(
    State(state): State<AppState>,
    body: Result<Json<TicketPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Ticket>), AppError> {
    let Json(payload) = body?;
    let ticket = state.tickets.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// PUT /tickets/use/{id} - Mark a ticket as used.
async fn use_ticket(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.tickets.use_ticket(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
