use google_sheets4::api::ValueRange;
use serde_json::Value;
use std::borrow::Cow;

pub trait ValueRangeFactory {
    fn from_single_row<'a, T: Into<Cow<'a, str>> + Clone>(cells: &[T]) -> Self;
}

fn wrap_value<'a, T: Into<Cow<'a, str>>>(value: T) -> Value {
    Value::String(value.into().into_owned())
}

impl ValueRangeFactory for ValueRange {
    fn from_single_row<'a, T: Into<Cow<'a, str>> + Clone>(cells: &[T]) -> Self {
        ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(vec![cells
                .iter()
                .map(|cell| wrap_value(cell.clone()))
                .collect()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test for wrap "1" -> Value::String("1")
    #[test]
    fn test_wrap_value() {
        let value = wrap_value("1");
        assert_eq!(value, Value::String("1".to_string()));
    }

    #[test]
    fn test_from_single_row() {
        let value_range = ValueRange::from_single_row(&["1", "2"]);
        assert_eq!(
            value_range.major_dimension,
            Some("ROWS".to_string()),
            "Major dimension should be ROWS"
        );
        assert_eq!(value_range.range, None, "Range should be None");
        assert_eq!(
            value_range.values,
            Some(vec![vec![
                Value::String("1".to_string()),
                Value::String("2".to_string())
            ]]),
            "Values should be a single row with Value::String(\"1\") and Value::String(\"2\")"
        );
    }

    // The append payload for a new task: empty id cell, title in column B.
    #[test]
    fn test_task_row_shape() {
        let value_range = ValueRange::from_single_row(&["", "Buy milk"]);
        assert_eq!(
            value_range.values,
            Some(vec![vec![
                Value::String(String::new()),
                Value::String("Buy milk".to_string())
            ]]),
            "Values should be one row with an empty first cell and the title second"
        );
    }
}
