pub mod sheets;
pub mod tickets;

// Re-export commonly used types
pub use sheets::a1_notation::A1Notation;
pub use sheets::row_grid::RowGrid;
pub use tickets::ticket::{Ticket, TicketField};
