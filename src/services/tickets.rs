use std::sync::Arc;

use chrono::Utc;

use crate::error::AppError;
use crate::models::{Ticket, TicketPayload, UseOutcome};
use crate::storage::{EventRepository, TicketRepository};
use crate::validation::Validator;

/// Message returned when a ticket is requested for a past event.
pub const EVENT_ALREADY_HAPPENED: &str = "The event has already happened.";

/// Ticket issuing and redemption.
#[derive(Clone)]
pub struct TicketsService {
    events: Arc<dyn EventRepository>,
    tickets: Arc<dyn TicketRepository>,
}

impl TicketsService {
    pub fn new(events: Arc<dyn EventRepository>, tickets: Arc<dyn TicketRepository>) -> Self {
        Self { events, tickets }
    }

    /// Tickets for an event. Unknown events simply have none.
    pub async fn list(&self, event_id: i64) -> Result<Vec<Ticket>, AppError> {
        Ok(self.tickets.list_for_event(event_id).await?)
    }

    /// Issue a ticket for a future event.
    ///
    /// Code uniqueness per event is left to the repository, which reports a
    /// clash as `DuplicateTicket` (mapped to Conflict).
    pub async fn create(&self, payload: TicketPayload) -> Result<Ticket, AppError> {
        let new_ticket = Validator::validate_ticket(payload)?;

        let event = self
            .events
            .get(new_ticket.event_id)
            .await?
            .ok_or_else(|| AppError::event_not_found(new_ticket.event_id))?;

        if event.is_expired_at(Utc::now()) {
            return Err(AppError::Forbidden(EVENT_ALREADY_HAPPENED.to_string()));
        }

        let ticket = self.tickets.insert(new_ticket).await?;
        tracing::info!(
            ticket_id = ticket.id,
            event_id = ticket.event_id,
            "Issued ticket {}",
            ticket.code
        );
        Ok(ticket)
    }

    /// Redeem a ticket. A ticket can only be used once.
    pub async fn use_ticket(&self, id: i64) -> Result<(), AppError> {
        match self.tickets.mark_used(id).await? {
            UseOutcome::Marked => {
                tracing::info!(ticket_id = id, "Ticket used");
                Ok(())
            }
            UseOutcome::AlreadyUsed => Err(AppError::Conflict(format!(
                "Ticket with id {} has already been used.",
                id
            ))),
            UseOutcome::NotFound => Err(AppError::NotFound(format!(
                "Ticket with id {} not found.",
                id
            ))),
        }
    }
}
