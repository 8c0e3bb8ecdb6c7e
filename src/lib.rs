pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod validation;

pub use config::Config;
pub use db::{init_pool, run_migrations};
pub use error::{AppError, StorageError};
pub use models::{Event, EventPayload, NewEvent, NewTicket, Ticket, TicketPayload};
pub use routes::create_router;
pub use state::AppState;
