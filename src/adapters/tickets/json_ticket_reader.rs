use std::path::{Path, PathBuf};

use error_stack::{report, ResultExt};
use tracing::instrument;

use crate::domain::tickets::ticket::Ticket;
use crate::ports::ticket_source::{TicketSource, TicketSourceError};

/// Where the ticket export is expected, relative to the working directory.
pub const TICKETS_PATH: &str = "tickets.json";

#[derive(Debug, Clone)]
pub struct JsonTicketReader {
    path: PathBuf,
}

impl JsonTicketReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse(contents: &str) -> error_stack::Result<Vec<Ticket>, TicketSourceError> {
        serde_json::from_str::<Vec<Ticket>>(contents).change_context(TicketSourceError::ParseError)
    }
}

impl Default for JsonTicketReader {
    fn default() -> Self {
        Self::new(TICKETS_PATH)
    }
}

impl TicketSource for JsonTicketReader {
    #[instrument(name = "JsonTicketReader::read_tickets")]
    fn read_tickets(&self) -> error_stack::Result<Vec<Ticket>, TicketSourceError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|err| {
            let context = match err.kind() {
                std::io::ErrorKind::NotFound => TicketSourceError::FileNotFound,
                std::io::ErrorKind::InvalidData => TicketSourceError::ParseError,
                _ => TicketSourceError::ReadFailed,
            };
            report!(err).change_context(context)
        });
        let contents =
            contents.attach_printable_lazy(|| format!("path: {}", self.path.display()))?;

        let tickets = Self::parse(&contents)
            .attach_printable_lazy(|| format!("path: {}", self.path.display()))?;

        tracing::info!("📋 Read {} tickets from {}", tickets.len(), self.path.display());
        Ok(tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tickets::ticket::TicketField;
    use serde_json::json;
    use std::io::Write;

    fn reader_for(contents: &str) -> (tempfile::NamedTempFile, JsonTicketReader) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let reader = JsonTicketReader::new(file.path());
        (file, reader)
    }

    #[test]
    fn test_default_path() {
        assert_eq!(JsonTicketReader::default().path(), Path::new("tickets.json"));
    }

    #[test]
    fn test_reads_tickets_in_order() {
        let (_file, reader) =
            reader_for(r#"[{"name":"A","type":"Bug"},{"name":"B","status":"Open"}]"#);
        let tickets = reader.read_tickets().unwrap();
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].cell(TicketField::Name), json!("A"));
        assert_eq!(tickets[0].cell(TicketField::Type), json!("Bug"));
        assert_eq!(tickets[1].cell(TicketField::Name), json!("B"));
        assert_eq!(tickets[1].cell(TicketField::Status), json!("Open"));
    }

    #[test]
    fn test_empty_array() {
        let (_file, reader) = reader_for("[]");
        assert!(reader.read_tickets().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let reader = JsonTicketReader::new(dir.path().join("tickets.json"));
        let report = reader.read_tickets().unwrap_err();
        assert_eq!(report.current_context(), &TicketSourceError::FileNotFound);
    }

    #[test]
    fn test_invalid_json() {
        let (_file, reader) = reader_for("[{\"name\": ");
        let report = reader.read_tickets().unwrap_err();
        assert_eq!(report.current_context(), &TicketSourceError::ParseError);
    }

    #[test]
    fn test_non_utf8_contents_are_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'[', 0xff, 0xfe, b']']).unwrap();
        let reader = JsonTicketReader::new(file.path());
        let report = reader.read_tickets().unwrap_err();
        assert_eq!(report.current_context(), &TicketSourceError::ParseError);
    }

    #[test]
    fn test_top_level_object_is_rejected() {
        let (_file, reader) = reader_for(r#"{"name":"A"}"#);
        let report = reader.read_tickets().unwrap_err();
        assert_eq!(report.current_context(), &TicketSourceError::ParseError);
    }

    #[test]
    fn test_non_object_element_is_rejected() {
        let result = JsonTicketReader::parse(r#"[{"name":"A"}, "B"]"#);
        assert_eq!(
            result.unwrap_err().current_context(),
            &TicketSourceError::ParseError
        );
    }
}
