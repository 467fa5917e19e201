use std::sync::Arc;

use error_stack::ResultExt;
use google_sheets4::api::ValueRange;
use thiserror::Error;

use crate::sheets::ranges;
use crate::sheets::spreadsheet_manager::SpreadsheetManager;
use crate::sheets::value_range_factory::ValueRangeFactory;

use super::{tasks_from_rows, Task};

#[derive(Error, Debug)]
pub enum TaskRepositoryError {
    #[error("Failed to fetch task rows from the spreadsheet")]
    FetchTasksError,
    #[error("Failed to append a task row to the spreadsheet")]
    AppendTaskError,
}

#[async_trait::async_trait]
pub trait TaskRepository: Send + Sync {
    /// Lists tasks in sheet order. The first row of the range is the header
    /// and never yields a task.
    async fn list_tasks(&self) -> error_stack::Result<Vec<Task>, TaskRepositoryError>;

    /// Appends one task to the end of the sheet. Column A is left empty; the
    /// row number doubles as the task id on the next read.
    async fn append_task(&self, title: &str) -> error_stack::Result<(), TaskRepositoryError>;
}

pub struct SpreadsheetTaskRepository {
    pub spreadsheet_manager: Arc<SpreadsheetManager>,
}

impl SpreadsheetTaskRepository {
    pub fn new(spreadsheet_manager: Arc<SpreadsheetManager>) -> Self {
        Self {
            spreadsheet_manager,
        }
    }
}

#[async_trait::async_trait]
impl TaskRepository for SpreadsheetTaskRepository {
    async fn list_tasks(&self) -> error_stack::Result<Vec<Task>, TaskRepositoryError> {
        let value_range = self
            .spreadsheet_manager
            .read_range(ranges::tasks::RO_ALL)
            .await
            .change_context(TaskRepositoryError::FetchTasksError)?;

        // A sheet with no populated cells in the range returns no values at
        // all; that is an empty task list, not an error.
        let rows = value_range.values.unwrap_or_default();
        Ok(tasks_from_rows(&rows))
    }

    async fn append_task(&self, title: &str) -> error_stack::Result<(), TaskRepositoryError> {
        self.spreadsheet_manager
            .append_row(
                ranges::tasks::RW_APPEND,
                ValueRange::from_single_row(&["", title]),
            )
            .await
            .change_context(TaskRepositoryError::AppendTaskError)
    }
}
