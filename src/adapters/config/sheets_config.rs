use std::fmt;

pub const DEFAULT_TAB_NAME: &str = "Tickets";

#[derive(serde::Deserialize, Clone)]
pub struct SpreadsheetConfig {
    pub spreadsheet_id: Box<str>,
    pub tab_name: Box<str>,
    /// Service account key document, JSON encoded.
    pub service_account_json: Box<str>,
}

impl fmt::Debug for SpreadsheetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpreadsheetConfig")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("tab_name", &self.tab_name)
            .field("service_account_json", &"<redacted>")
            .finish()
    }
}
