#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    /// Path to the service account key file used to authenticate against the
    /// Google Sheets API.
    pub priv_key: Box<str>,
    /// Id of the spreadsheet holding the task sheet.
    pub spreadsheet_id: Box<str>,
}
