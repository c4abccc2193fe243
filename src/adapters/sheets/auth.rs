use error_stack::ResultExt;
use google_sheets4::oauth2::{self, authenticator::Authenticator};

use crate::ports::sheet_client::SheetClientError;

use super::http_client::{HttpClient, HttpsConnector};

/// Parses the service account key carried in the configuration.
pub fn service_account_key(
    service_account_json: &str,
) -> error_stack::Result<oauth2::ServiceAccountKey, SheetClientError> {
    oauth2::parse_service_account_key(service_account_json)
        .change_context(SheetClientError::AuthenticationFailure)
        .attach_printable("GOOGLE_SERVICE_ACCOUNT_JSON is not a valid service account key")
}

pub async fn auth(
    key: oauth2::ServiceAccountKey,
    client: HttpClient,
) -> error_stack::Result<Authenticator<HttpsConnector>, SheetClientError> {
    oauth2::ServiceAccountAuthenticator::with_client(key, client)
        .build()
        .await
        .change_context(SheetClientError::AuthenticationFailure)
        .attach_printable("could not create an authenticator")
}
