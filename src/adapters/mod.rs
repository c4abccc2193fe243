pub mod config;
pub mod sheets;
pub mod tickets;
