use sqlx::SqlitePool;
use std::sync::Arc;

use crate::services::{EventsService, TicketsService};
use crate::storage::{
    EventRepository, SqliteEventRepository, SqliteTicketRepository, TicketRepository,
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub events: EventsService,
    pub tickets: TicketsService,
}

impl AppState {
    /// Build the services on top of SQLite repositories sharing one pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self::from_repositories(
            Arc::new(SqliteEventRepository::new(pool.clone())),
            Arc::new(SqliteTicketRepository::new(pool)),
        )
    }

    pub fn from_repositories(
        events: Arc<dyn EventRepository>,
        tickets: Arc<dyn TicketRepository>,
    ) -> Self {
        Self {
            events: EventsService::new(events.clone()),
            tickets: TicketsService::new(events, tickets),
        }
    }
}
