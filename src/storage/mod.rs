//! Repository traits for events and tickets, with a SQLite implementation
//! and an in-memory one for tests.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{Event, NewEvent, NewTicket, Ticket, UseOutcome};

pub mod sqlite;

#[cfg(test)]
pub mod memory;

pub use sqlite::{SqliteEventRepository, SqliteTicketRepository};

/// Trait for storing and retrieving events.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Get all events, oldest first.
    async fn list(&self) -> Result<Vec<Event>, StorageError>;

    /// Get an event by ID.
    async fn get(&self, id: i64) -> Result<Option<Event>, StorageError>;

    /// Insert a new event and return it with its generated id.
    async fn insert(&self, event: NewEvent) -> Result<Event, StorageError>;

    /// Replace the fields of an event. Returns None if the id is unknown.
    async fn update(&self, id: i64, event: NewEvent) -> Result<Option<Event>, StorageError>;

    /// Delete an event and its tickets. Returns false if the id is unknown.
    async fn delete(&self, id: i64) -> Result<bool, StorageError>;
}

/// Trait for storing and retrieving tickets.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Get all tickets issued for an event.
    async fn list_for_event(&self, event_id: i64) -> Result<Vec<Ticket>, StorageError>;

    /// Get a ticket by ID.
    async fn get(&self, id: i64) -> Result<Option<Ticket>, StorageError>;

    /// Insert an unused ticket.
    ///
    /// Fails with `DuplicateTicket` if the code is already registered for the
    /// event, and with `EventNotFound` if the event does not exist.
    async fn insert(&self, ticket: NewTicket) -> Result<Ticket, StorageError>;

    /// Flip a ticket from unused to used in a single step.
    async fn mark_used(&self, id: i64) -> Result<UseOutcome, StorageError>;
}
