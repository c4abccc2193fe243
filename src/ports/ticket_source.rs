use thiserror::Error;

use crate::domain::tickets::ticket::Ticket;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketSourceError {
    #[error("Tickets file not found")]
    FileNotFound,
    #[error("Failed to read tickets file")]
    ReadFailed,
    #[error("Tickets file is not a JSON array of objects")]
    ParseError,
}

pub trait TicketSource: Send + Sync {
    /// Loads every ticket, in file order. Nothing is returned on failure.
    fn read_tickets(&self) -> error_stack::Result<Vec<Ticket>, TicketSourceError>;
}
