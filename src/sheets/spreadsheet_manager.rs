use std::fmt::Debug;

use error_stack::ResultExt;
use google_sheets4::{api::ValueRange, Sheets};
use thiserror::Error;
use tracing::instrument;

use crate::config::sheets_config::SpreadsheetConfig;

use super::{auth, http_client};

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<
        google_sheets4::hyper_rustls::HttpsConnector<google_sheets4::hyper::client::HttpConnector>,
    >,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

#[derive(Error, Debug)]
pub enum SpreadsheetManagerError {
    #[error("Failed to fetch range")]
    FailedToFetchRange,
    #[error("Failed to append row")]
    FailedToAppendRow,
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(config: SpreadsheetConfig) -> Self {
        let client = http_client::http_client();
        let auth = auth::auth(&config, client.clone()).await;
        let hub: Sheets<
            google_sheets4::hyper_rustls::HttpsConnector<
                google_sheets4::hyper::client::HttpConnector,
            >,
        > = Sheets::new(client.clone(), auth);

        SpreadsheetManager { config, hub }
    }

    /// Fetches the raw value range. An empty range comes back with no
    /// `values` at all; callers decide what that means.
    #[instrument]
    pub async fn read_range(
        &self,
        range: &str,
    ) -> error_stack::Result<ValueRange, SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        Ok(response.1)
    }

    /// Appends the given rows after the last populated row of the table
    /// anchored at `range`.
    #[instrument]
    pub async fn append_row(
        &self,
        range: &str,
        value_range: ValueRange,
    ) -> error_stack::Result<(), SpreadsheetManagerError> {
        self.hub
            .spreadsheets()
            .values_append(value_range, &self.config.spreadsheet_id, range)
            .value_input_option("USER_ENTERED")
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetManagerError::FailedToAppendRow)
            .attach_printable_lazy(|| format!("Failed to append row at {}", range))
    }
}
