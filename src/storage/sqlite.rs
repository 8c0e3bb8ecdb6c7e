use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{EventRepository, TicketRepository};
use crate::error::StorageError;
use crate::models::{Event, NewEvent, NewTicket, Ticket, UseOutcome};

/// SQLite-backed event repository.
#[derive(Clone)]
pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn list(&self) -> Result<Vec<Event>, StorageError> {
        let events = sqlx::query_as::<_, Event>("SELECT id, name, date FROM events ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    async fn get(&self, id: i64) -> Result<Option<Event>, StorageError> {
        let event = sqlx::query_as::<_, Event>("SELECT id, name, date FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(event)
    }

    async fn insert(&self, event: NewEvent) -> Result<Event, StorageError> {
        let event = sqlx::query_as::<_, Event>(
            "INSERT INTO events (name, date) VALUES (?, ?) RETURNING id, name, date",
        )
        .bind(&event.name)
        .bind(event.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(event)
    }

    async fn update(&self, id: i64, event: NewEvent) -> Result<Option<Event>, StorageError> {
        let event = sqlx::query_as::<_, Event>(
            "UPDATE events SET name = ?, date = ? WHERE id = ? RETURNING id, name, date",
        )
        .bind(&event.name)
        .bind(event.date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    async fn delete(&self, id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// SQLite-backed ticket repository.
#[derive(Clone)]
pub struct SqliteTicketRepository {
    pool: SqlitePool,
}

impl SqliteTicketRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for SqliteTicketRepository {
    async fn list_for_event(&self, event_id: i64) -> Result<Vec<Ticket>, StorageError> {
        let tickets = sqlx::query_as::<_, Ticket>(
            r#"
            SELECT id, event_id, owner, code, used
            FROM tickets
            WHERE event_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tickets)
    }

    async fn get(&self, id: i64) -> Result<Option<Ticket>, StorageError> {
        let ticket = sqlx::query_as::<_, Ticket>(
            "SELECT id, event_id, owner, code, used FROM tickets WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ticket)
    }

    async fn insert(&self, ticket: NewTicket) -> Result<Ticket, StorageError> {
        let result = sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (event_id, owner, code, used)
            VALUES (?, ?, ?, 0)
            RETURNING id, event_id, owner, code, used
            "#,
        )
        .bind(ticket.event_id)
        .bind(&ticket.owner)
        .bind(&ticket.code)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(created) => Ok(created),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StorageError::DuplicateTicket {
                    event_id: ticket.event_id,
                    code: ticket.code,
                })
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(StorageError::EventNotFound(ticket.event_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn mark_used(&self, id: i64) -> Result<UseOutcome, StorageError> {
        let result = sqlx::query("UPDATE tickets SET used = 1 WHERE id = ? AND used = 0")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            return Ok(UseOutcome::Marked);
        }

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM tickets WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(match exists {
            Some(_) => UseOutcome::AlreadyUsed,
            None => UseOutcome::NotFound,
        })
    }
}
