pub mod service;
pub mod sync_tickets_routine;

pub use service::{sync_tickets, SyncError};
pub use sync_tickets_routine::SyncTicketsRoutine;
