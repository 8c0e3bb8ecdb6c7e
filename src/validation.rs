use crate::error::AppError;
use crate::models::{EventPayload, NewEvent, NewTicket, TicketPayload};

/// Validator for request payloads.
pub struct Validator;

impl Validator {
    /// Validate an event payload.
    /// Both name and date must be present; a blank name counts as missing.
    pub fn validate_event(payload: EventPayload) -> Result<NewEvent, AppError> {
        let name = payload.name.filter(|n| !n.trim().is_empty());
        match (name, payload.date) {
            (Some(name), Some(date)) => Ok(NewEvent { name, date }),
            (None, Some(_)) => Err(AppError::UnprocessableEntity(
                "Event name is required.".to_string(),
            )),
            (Some(_), None) => Err(AppError::UnprocessableEntity(
                "Event date is required.".to_string(),
            )),
            (None, None) => Err(AppError::UnprocessableEntity(
                "Event name and date are required.".to_string(),
            )),
        }
    }

    /// Validate a ticket payload.
    pub fn validate_ticket(payload: TicketPayload) -> Result<NewTicket, AppError> {
        let event_id = payload
            .event_id
            .ok_or_else(|| AppError::UnprocessableEntity("Ticket eventId is required.".to_string()))?;
        let owner = Self::required_text(payload.owner, "owner")?;
        let code = Self::required_text(payload.code, "code")?;
        Ok(NewTicket {
            event_id,
            owner,
            code,
        })
    }

    fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
        value
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::UnprocessableEntity(format!("Ticket {} is required.", field)))
    }
}
