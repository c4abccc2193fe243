use std::{fmt, sync::Arc};

use error_stack::ResultExt;
use tracing::instrument;

use crate::{
    domain::sheets::row_grid::RowGrid,
    ports::{
        routine::{Routine, RoutineError},
        sheet_client::SheetClient,
        ticket_source::TicketSource,
    },
};

/// Replaces the contents of a sheet tab with the current ticket export.
pub struct SyncTicketsRoutine {
    routine_name: String,
    source: Box<dyn TicketSource>,
    client: Arc<dyn SheetClient>,
    tab_name: String,
}

impl fmt::Debug for SyncTicketsRoutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncTicketsRoutine")
            .field("routine_name", &self.routine_name)
            .field("tab_name", &self.tab_name)
            .finish()
    }
}

impl SyncTicketsRoutine {
    pub fn new(
        source: Box<dyn TicketSource>,
        client: Arc<dyn SheetClient>,
        tab_name: impl Into<String>,
    ) -> Self {
        let tab_name = tab_name.into();
        Self {
            routine_name: format!("Sync Tickets ({})", tab_name),
            source,
            client,
            tab_name,
        }
    }

    pub fn tab_name(&self) -> &str {
        &self.tab_name
    }
}

#[async_trait::async_trait]
impl Routine for SyncTicketsRoutine {
    fn name(&self) -> &str {
        self.routine_name.as_str()
    }

    #[instrument(skip(self), name = "SyncTicketsRoutine::run")]
    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        tracing::trace!("{}: 📋 Reading tickets", self.name());
        let tickets = self
            .source
            .read_tickets()
            .change_context(RoutineError::routine_failure("Failed to read tickets"))?;

        tracing::trace!("{}: 📊 Formatting {} tickets", self.name(), tickets.len());
        let grid = RowGrid::from_tickets(&tickets);

        tracing::trace!("{}: 🧹 Clearing tab '{}'", self.name(), self.tab_name);
        self.client
            .clear(&self.tab_name)
            .await
            .change_context(RoutineError::routine_failure("Failed to clear sheet tab"))?;

        tracing::trace!("{}: 📝 Writing {} rows", self.name(), grid.row_count());
        self.client
            .write(&self.tab_name, &grid)
            .await
            .change_context(RoutineError::routine_failure("Failed to write sheet tab"))?;

        tracing::info!(
            "{}: ✅ Wrote {} tickets to '{}'",
            self.name(),
            grid.data_rows().len(),
            self.tab_name
        );

        Ok(())
    }
}
