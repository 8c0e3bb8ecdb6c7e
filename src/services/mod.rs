pub mod events;
pub mod tickets;

pub use events::EventsService;
pub use tickets::TicketsService;
