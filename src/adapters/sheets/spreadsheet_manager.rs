use error_stack::{report, ResultExt};
use google_sheets4::{
    api::{ClearValuesRequest, Scope, ValueRange},
    Sheets,
};
use std::fmt::Debug;
use tracing::instrument;

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::domain::sheets::a1_notation::A1Notation;
use crate::domain::sheets::row_grid::RowGrid;
use crate::ports::sheet_client::{SheetClient, SheetClientError};

use super::{
    auth::{self},
    http_client::{self, HttpsConnector},
    value_range_factory::ValueRangeFactory,
};

/// Values are stored as typed, never parsed as formulas, numbers or dates.
const VALUE_INPUT_OPTION: &str = "RAW";

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

impl SpreadsheetManager {
    /// Builds an authenticated client. Tokens are requested lazily on the first call.
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(config: SpreadsheetConfig) -> error_stack::Result<Self, SheetClientError> {
        let key = auth::service_account_key(&config.service_account_json)?;
        let client = http_client::http_client();
        let auth = auth::auth(key, client.clone()).await?;
        let hub = Sheets::new(client, auth);

        Ok(SpreadsheetManager { config, hub })
    }

    #[instrument]
    pub async fn clear_range(
        &self,
        range: &A1Notation,
    ) -> error_stack::Result<(), SheetClientError> {
        self.hub
            .spreadsheets()
            .values_clear(
                ClearValuesRequest::default(),
                &self.config.spreadsheet_id,
                range.as_ref(),
            )
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .map(|_| ())
            .map_err(classify)
            .attach_printable_lazy(|| format!("Failed to clear range {}", range))
    }

    #[instrument(skip(value_range))]
    pub async fn write_range(
        &self,
        range: &A1Notation,
        value_range: ValueRange,
    ) -> error_stack::Result<(), SheetClientError> {
        self.hub
            .spreadsheets()
            .values_update(value_range, &self.config.spreadsheet_id, range.as_ref())
            .value_input_option(VALUE_INPUT_OPTION)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .map(|_| ())
            .map_err(classify)
            .attach_printable_lazy(|| format!("Failed to write to range {}", range))
    }
}

/// Range emptied before each write.
fn clear_target(tab_name: &str) -> A1Notation {
    A1Notation::clear_range(tab_name)
}

/// Anchor the grid is written from.
fn write_target(tab_name: &str) -> A1Notation {
    A1Notation::top_left(tab_name)
}

/// Sorts a Sheets API failure into transport, credential or remote rejection.
fn classify(error: google_sheets4::Error) -> error_stack::Report<SheetClientError> {
    let context = match &error {
        google_sheets4::Error::HttpError(_) | google_sheets4::Error::Io(_) => {
            SheetClientError::NetworkFailure
        }
        google_sheets4::Error::MissingToken(_) | google_sheets4::Error::MissingAPIKey => {
            SheetClientError::AuthenticationFailure
        }
        _ => SheetClientError::RemoteRejection,
    };
    report!(context).attach_printable(error.to_string())
}

#[async_trait::async_trait]
impl SheetClient for SpreadsheetManager {
    #[instrument(skip(self))]
    async fn clear(&self, tab_name: &str) -> error_stack::Result<(), SheetClientError> {
        self.clear_range(&clear_target(tab_name)).await
    }

    #[instrument(skip(self, grid), fields(rows = grid.row_count()))]
    async fn write(
        &self,
        tab_name: &str,
        grid: &RowGrid,
    ) -> error_stack::Result<(), SheetClientError> {
        self.write_range(&write_target(tab_name), ValueRange::from_grid(grid))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_written_raw() {
        assert_eq!(VALUE_INPUT_OPTION, "RAW");
    }

    #[test]
    fn test_clear_targets_columns_a_to_z() {
        assert_eq!(clear_target("Tickets").as_ref(), "Tickets!A:Z");
        assert_eq!(clear_target("Backlog").as_ref(), "Backlog!A:Z");
    }

    #[test]
    fn test_write_targets_top_left_cell() {
        assert_eq!(write_target("Tickets").as_ref(), "Tickets!A1");
        assert_eq!(write_target("Backlog").as_ref(), "Backlog!A1");
    }

    #[test]
    fn test_io_error_is_network_failure() {
        let error = google_sheets4::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset",
        ));
        assert_eq!(
            classify(error).current_context(),
            &SheetClientError::NetworkFailure
        );
    }

    #[test]
    fn test_missing_api_key_is_authentication_failure() {
        assert_eq!(
            classify(google_sheets4::Error::MissingAPIKey).current_context(),
            &SheetClientError::AuthenticationFailure
        );
    }

    #[test]
    fn test_bad_request_is_remote_rejection() {
        let error = google_sheets4::Error::BadRequest(serde_json::json!({
            "error": { "code": 400, "message": "Unable to parse range: Missing!A:Z" }
        }));
        assert_eq!(
            classify(error).current_context(),
            &SheetClientError::RemoteRejection
        );
    }
}
