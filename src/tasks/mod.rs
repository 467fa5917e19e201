pub mod repository;

use serde::Serialize;
use serde_json::Value;

/// Display record derived from one spreadsheet row. The id is the row's
/// current position in the sheet, recomputed on every read; deleting or
/// reordering rows renumbers the tasks below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: String,
    pub title: String,
}

/// Coerces a loosely typed cell to text. Non-string cells yield an empty
/// string, matching how a hand-edited sheet behaves.
fn cell_text(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

fn title_from_row(row: &[Value]) -> String {
    // Titles live in column B; a row with only column A filled falls back to
    // that value.
    row.get(1)
        .or_else(|| row.first())
        .map(cell_text)
        .unwrap_or_default()
}

/// Maps sheet rows to tasks in sheet order. The first row is always the
/// header; data starts on sheet row 2, so the k-th data row gets id k + 1.
pub fn tasks_from_rows(rows: &[Vec<Value>]) -> Vec<Task> {
    rows.iter()
        .skip(1)
        .enumerate()
        .map(|(index, row)| Task {
            id: (index + 2).to_string(),
            title: title_from_row(row),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_rows_yields_no_tasks() {
        assert_eq!(tasks_from_rows(&[]), vec![]);
    }

    #[test]
    fn test_header_only_yields_no_tasks() {
        let rows = vec![vec![json!("ID"), json!("Title")]];
        assert_eq!(tasks_from_rows(&rows), vec![]);
    }

    #[test]
    fn test_title_prefers_column_b() {
        let rows = vec![
            vec![json!("ID"), json!("Title")],
            vec![json!("ignored"), json!("Buy milk")],
        ];
        let tasks = tasks_from_rows(&rows);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
    }

    #[test]
    fn test_title_falls_back_to_column_a() {
        let rows = vec![vec![json!("ID"), json!("Title")], vec![json!("Walk dog")]];
        let tasks = tasks_from_rows(&rows);
        assert_eq!(tasks[0].title, "Walk dog");
    }

    #[test]
    fn test_empty_row_yields_empty_title() {
        let rows = vec![vec![json!("ID"), json!("Title")], vec![]];
        let tasks = tasks_from_rows(&rows);
        assert_eq!(tasks[0].title, "");
    }

    #[test]
    fn test_non_string_cell_coerces_to_empty() {
        let rows = vec![
            vec![json!("ID"), json!("Title")],
            vec![json!(""), json!(42)],
        ];
        let tasks = tasks_from_rows(&rows);
        assert_eq!(tasks[0].title, "", "Numeric cells should not become titles");
    }

    #[test]
    fn test_ids_follow_sheet_row_numbers() {
        let rows = vec![
            vec![json!("ID"), json!("Title")],
            vec![json!(""), json!("a")],
            vec![json!(""), json!("b")],
            vec![json!(""), json!("c")],
        ];
        let ids: Vec<String> = tasks_from_rows(&rows)
            .into_iter()
            .map(|task| task.id)
            .collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_sheet_order_is_preserved() {
        let rows = vec![
            vec![json!("ID"), json!("Title")],
            vec![json!(""), json!("Buy milk")],
            vec![json!(""), json!("Walk dog")],
        ];
        assert_eq!(
            tasks_from_rows(&rows),
            vec![
                Task {
                    id: "2".to_string(),
                    title: "Buy milk".to_string()
                },
                Task {
                    id: "3".to_string(),
                    title: "Walk dog".to_string()
                },
            ]
        );
    }
}
