mod config;
mod sheets;
mod tasks;
mod web;

use std::sync::Arc;

use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::config::app_config::CONFIG;
use crate::sheets::spreadsheet_manager::SpreadsheetManager;
use crate::tasks::repository::SpreadsheetTaskRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Registry::default()
        .with(
            Targets::new()
                .with_target("sheet_tasks", tracing::Level::DEBUG)
                .with_default(tracing::Level::INFO),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Authentication failure aborts the process here; there is no degraded
    // mode without the spreadsheet.
    let spreadsheet_manager = Arc::new(SpreadsheetManager::new(CONFIG.sheets.clone()).await);
    let repository = Arc::new(SpreadsheetTaskRepository::new(spreadsheet_manager));

    web::run(repository, &CONFIG.server).await
}
