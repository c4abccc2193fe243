pub mod json_ticket_reader;
