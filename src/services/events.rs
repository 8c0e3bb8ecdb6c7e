use std::sync::Arc;

use crate::error::AppError;
use crate::models::{Event, EventPayload};
use crate::storage::EventRepository;
use crate::validation::Validator;

/// Event CRUD with presence validation.
#[derive(Clone)]
pub struct EventsService {
    repo: Arc<dyn EventRepository>,
}

impl EventsService {
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.repo.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Event, AppError> {
        self.repo.get(id).await?.ok_or_else(|| AppError::event_not_found(id))
    }

    pub async fn create(&self, payload: EventPayload) -> Result<Event, AppError> {
        let new_event = Validator::validate_event(payload)?;
        let event = self.repo.insert(new_event).await?;
        tracing::info!(event_id = event.id, "Created event {}", event.name);
        Ok(event)
    }

    pub async fn update(&self, id: i64, payload: EventPayload) -> Result<Event, AppError> {
        let new_event = Validator::validate_event(payload)?;
        let event = self
            .repo
            .update(id, new_event)
            .await?
            .ok_or_else(|| AppError::event_not_found(id))?;
        tracing::info!(event_id = event.id, "Updated event");
        Ok(event)
    }

    /// Delete an event. Tickets issued for it go with it.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::event_not_found(id));
        }
        tracing::info!(event_id = id, "Deleted event");
        Ok(())
    }
}
