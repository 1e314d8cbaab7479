use super::BatchUpdate;
use crate::error::Result;
use crate::sheets::AUTH_SCOPE;
use crate::sheets::auth::{create_and_verify_authenticator, read_credentials};
use async_trait::async_trait;
use google_sheets4::api::{BatchUpdateSpreadsheetRequest, Request, Sheets};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use std::path::Path;
use tracing::{debug, instrument};
use yup_oauth2::ServiceAccountKey;

/// An authenticated connection to the Sheets API.
pub struct SheetsSession {
    hub: Sheets<HttpsConnector<HttpConnector>>,
}

impl SheetsSession {
    /// Authenticate as a service account with read/write access to spreadsheets
    #[instrument(name = "Authenticating to Google Sheets", skip_all)]
    pub async fn from_service_account_key(key: ServiceAccountKey) -> Result<Self> {
        let auth = create_and_verify_authenticator(key).await?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()?
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector);

        Ok(Self {
            hub: Sheets::new(client, auth),
        })
    }

    pub async fn from_credentials_file(path: &Path) -> Result<Self> {
        let key = read_credentials(path).await?;
        Self::from_service_account_key(key).await
    }
}

#[async_trait]
impl BatchUpdate for SheetsSession {
    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: Vec<Request>,
    ) -> anyhow::Result<()> {
        let batch_update = BatchUpdateSpreadsheetRequest {
            requests: Some(requests),
            ..Default::default()
        };

        let (_, response) = self
            .hub
            .spreadsheets()
            .batch_update(batch_update, spreadsheet_id)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;

        let replies = response.replies.map(|r| r.len()).unwrap_or_default();
        debug!(replies, "Batch update applied");

        Ok(())
    }
}
