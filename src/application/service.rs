use std::{future::Future, sync::Arc};

use error_stack::ResultExt;
use thiserror::Error;
use tracing::instrument;

use crate::{
    adapters::config::{app_config::AppConfig, sheets_config::SpreadsheetConfig},
    ports::{
        routine::Routine,
        sheet_client::{SheetClient, SheetClientError},
        ticket_source::TicketSource,
    },
};

use super::sync_tickets_routine::SyncTicketsRoutine;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("Invalid configuration")]
    Configuration,
    #[error("Could not set up the spreadsheet client")]
    SheetClient,
    #[error("Ticket sync failed")]
    Sync,
}

/// One full run: configuration, then the sheet client, then the sync routine.
///
/// Nothing is read from `source` and `connect` is never called unless the
/// configuration is complete.
#[instrument(skip_all)]
pub async fn sync_tickets<C, F>(
    vars: config::Map<String, String>,
    source: Box<dyn TicketSource>,
    connect: C,
) -> error_stack::Result<(), SyncError>
where
    C: FnOnce(SpreadsheetConfig) -> F,
    F: Future<Output = error_stack::Result<Arc<dyn SheetClient>, SheetClientError>>,
{
    let config = AppConfig::from_vars(vars).change_context(SyncError::Configuration)?;
    tracing::debug!("Loaded configuration: {:?}", config);

    let tab_name = config.sheets.tab_name.to_string();
    let client = connect(config.sheets)
        .await
        .change_context(SyncError::SheetClient)?;

    let routine = SyncTicketsRoutine::new(source, client, tab_name);

    match routine.run().await {
        Ok(()) => {
            tracing::info!("✅ {}: OK", routine.name());
            Ok(())
        }
        Err(report) => {
            tracing::error!("❌ {}: {:?}", routine.name(), report);
            Err(report.change_context(SyncError::Sync))
        }
    }
}
