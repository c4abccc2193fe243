use thiserror::Error;

use crate::domain::sheets::row_grid::RowGrid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetClientError {
    #[error("Failed to authenticate with the spreadsheet service")]
    AuthenticationFailure,
    #[error("Spreadsheet service rejected the request")]
    RemoteRejection,
    #[error("Could not reach the spreadsheet service")]
    NetworkFailure,
}

/// Remote spreadsheet bound to a single spreadsheet id.
#[async_trait::async_trait]
pub trait SheetClient: Send + Sync {
    /// Empties columns A to Z of `tab_name`, every row.
    async fn clear(&self, tab_name: &str) -> error_stack::Result<(), SheetClientError>;

    /// Writes `grid` from the top-left cell of `tab_name`, values taken literally.
    async fn write(
        &self,
        tab_name: &str,
        grid: &RowGrid,
    ) -> error_stack::Result<(), SheetClientError>;
}
