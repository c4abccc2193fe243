pub mod routine;
pub mod sheet_client;
pub mod ticket_source;

pub use routine::*;
pub use sheet_client::*;
pub use ticket_source::*;
