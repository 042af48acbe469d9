use anyhow::{anyhow, bail, Result};
use serde_json::Value;

/// Placeholder shown for any task field that is missing or has the wrong type.
pub const PLACEHOLDER: &str = "N/A";

/// How many characters of an unparseable response body are echoed back for
/// debugging.
const RAW_PREVIEW_CHARS: usize = 500;

/// One task from the ClickUp response. Fields that are absent or of the wrong
/// type degrade to [`PLACEHOLDER`] (or an empty assignee list) instead of
/// failing the run.
#[derive(Debug, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub status: String,
    pub assignees: Vec<String>,
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

impl Task {
    pub fn from_value(value: &Value) -> Self {
        // The display status is nested one level down, at status.status.
        let status = value
            .get("status")
            .and_then(|status| string_field(status, "status"));

        // Assignee entries without a string username are skipped entirely.
        let assignees = value
            .get("assignees")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| string_field(entry, "username"))
                    .collect()
            })
            .unwrap_or_default();

        Task {
            id: string_field(value, "custom_id").unwrap_or_else(|| PLACEHOLDER.to_owned()),
            name: string_field(value, "name").unwrap_or_else(|| PLACEHOLDER.to_owned()),
            status: status.unwrap_or_else(|| PLACEHOLDER.to_owned()),
            assignees,
        }
    }
}

/// Parses the raw response body and extracts the `tasks` array.
///
/// A parse failure carries the serde_json diagnostic (with line and column)
/// plus a prefix of the raw body, since the API reports errors as JSON bodies
/// of a different shape and the raw text is the only useful clue.
pub fn decode_tasks(body: &str) -> Result<Vec<Task>> {
    let root: Value = serde_json::from_str(body).map_err(|err| {
        if body.is_empty() {
            anyhow!("{err}")
        } else {
            let preview: String = body.chars().take(RAW_PREVIEW_CHARS).collect();
            anyhow!("{err}\nRaw API response (first 500 chars):\n{preview}")
        }
    })?;

    match root.get("tasks").and_then(Value::as_array) {
        Some(tasks) => Ok(tasks.iter().map(Task::from_value).collect()),
        None => bail!("'tasks' is not an array in the JSON response"),
    }
}
