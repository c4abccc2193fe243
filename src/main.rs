use std::io::IsTerminal;
use std::sync::Arc;

use error_stack::ResultExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

use ticket_sheets_sync::adapters::config::app_config::AppConfig;
use ticket_sheets_sync::adapters::sheets::spreadsheet_manager::SpreadsheetManager;
use ticket_sheets_sync::adapters::tickets::json_ticket_reader::JsonTicketReader;
use ticket_sheets_sync::application::{sync_tickets, SyncError};
use ticket_sheets_sync::ports::sheet_client::SheetClient;
use ticket_sheets_sync::prettyprint::PrettyFormatter;

const SUCCESS_MESSAGE: &str = "Sheet updated successfully.";

#[tokio::main(flavor = "current_thread")]
async fn main() -> error_stack::Result<(), SyncError> {
    setup_tracing();
    setup_panic_hook();

    let vars = AppConfig::env_vars().change_context(SyncError::Configuration)?;

    sync_tickets(vars, Box::new(JsonTicketReader::default()), |config| async move {
        SpreadsheetManager::new(config)
            .await
            .map(|manager| Arc::new(manager) as Arc<dyn SheetClient>)
    })
    .await?;

    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}

fn setup_tracing() {
    let ansi = std::io::stderr().is_terminal();
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(ansi))
        .with_ansi(ansi)
        .with_writer(std::io::stderr);

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("ticket_sheets_sync", tracing::Level::INFO),
        )
        .with(stderr_layer)
        .init();
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
