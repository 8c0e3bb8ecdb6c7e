pub mod events;
pub mod health;
pub mod tickets;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(events::routes())
        .merge(tickets::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
