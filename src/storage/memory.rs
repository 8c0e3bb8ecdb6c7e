//! In-memory repositories for service tests.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{EventRepository, TicketRepository};
use crate::error::StorageError;
use crate::models::{Event, NewEvent, NewTicket, Ticket, UseOutcome};

#[derive(Default)]
struct Tables {
    events: BTreeMap<i64, Event>,
    tickets: BTreeMap<i64, Ticket>,
    next_event_id: i64,
    next_ticket_id: i64,
}

/// Shared backing store so the two repositories see the same events, the way
/// two tables in one database would.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> InMemoryEventRepository {
        InMemoryEventRepository {
            store: self.clone(),
        }
    }

    pub fn tickets(&self) -> InMemoryTicketRepository {
        InMemoryTicketRepository {
            store: self.clone(),
        }
    }
}

/// In-memory event repository for testing.
pub struct InMemoryEventRepository {
    store: InMemoryStore,
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list(&self) -> Result<Vec<Event>, StorageError> {
        Ok(self.store.tables.read().unwrap().events.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Event>, StorageError> {
        Ok(self.store.tables.read().unwrap().events.get(&id).cloned())
    }

    async fn insert(&self, event: NewEvent) -> Result<Event, StorageError> {
        let mut tables = self.store.tables.write().unwrap();
        tables.next_event_id += 1;
        let event = Event {
            id: tables.next_event_id,
            name: event.name,
            date: event.date,
        };
        tables.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn update(&self, id: i64, event: NewEvent) -> Result<Option<Event>, StorageError> {
        let mut tables = self.store.tables.write().unwrap();
        Ok(tables.events.get_mut(&id).map(|existing| {
            existing.name = event.name;
            existing.date = event.date;
            existing.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, StorageError> {
        let mut tables = self.store.tables.write().unwrap();
        let removed = tables.events.remove(&id).is_some();
        if removed {
            tables.tickets.retain(|_, t| t.event_id != id);
        }
        Ok(removed)
    }
}

/// In-memory ticket repository for testing.
pub struct InMemoryTicketRepository {
    store: InMemoryStore,
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn list_for_event(&self, event_id: i64) -> Result<Vec<Ticket>, StorageError> {
        let tables = self.store.tables.read().unwrap();
        Ok(tables
            .tickets
            .values()
            .filter(|t| t.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Ticket>, StorageError> {
        Ok(self.store.tables.read().unwrap().tickets.get(&id).cloned())
    }

    async fn insert(&self, ticket: NewTicket) -> Result<Ticket, StorageError> {
        let mut tables = self.store.tables.write().unwrap();

        if !tables.events.contains_key(&ticket.event_id) {
            return Err(StorageError::EventNotFound(ticket.event_id));
        }
        if tables
            .tickets
            .values()
            .any(|t| t.event_id == ticket.event_id && t.code == ticket.code)
        {
            return Err(StorageError::DuplicateTicket {
                event_id: ticket.event_id,
                code: ticket.code,
            });
        }

        tables.next_ticket_id += 1;
        let ticket = Ticket {
            id: tables.next_ticket_id,
            event_id: ticket.event_id,
            owner: ticket.owner,
            code: ticket.code,
            used: false,
        };
        tables.tickets.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    async fn mark_used(&self, id: i64) -> Result<UseOutcome, StorageError> {
        let mut tables = self.store.tables.write().unwrap();
        Ok(match tables.tickets.get_mut(&id) {
            None => UseOutcome::NotFound,
            Some(ticket) if ticket.used => UseOutcome::AlreadyUsed,
            Some(ticket) => {
                ticket.used = true;
                UseOutcome::Marked
            }
        })
    }
}
