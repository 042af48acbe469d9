use crate::models::task::{Task, PLACEHOLDER};

// Content characters per column, not counting the padding space on each side.
pub const ID_WIDTH: usize = 10;
pub const NAME_WIDTH: usize = 40;
pub const STATUS_WIDTH: usize = 15;
pub const ASSIGNEES_WIDTH: usize = 80;

pub const NO_TASKS_MESSAGE: &str = "No tasks found.";

fn separator() -> String {
    let mut line = String::from("+");
    for width in [ID_WIDTH, NAME_WIDTH, STATUS_WIDTH, ASSIGNEES_WIDTH] {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Truncates a name longer than [`NAME_WIDTH`] characters to exactly
/// [`NAME_WIDTH`], replacing its last three characters with an ellipsis.
/// Shorter names pass through untouched.
fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        return name.to_owned();
    }
    let mut truncated: String = name.chars().take(NAME_WIDTH - 3).collect();
    truncated.push_str("...");
    truncated
}

/// Appends up to `cap` characters of `text` to `buf`, returning how many
/// characters were actually added.
fn append_capped(buf: &mut String, text: &str, cap: usize) -> usize {
    let mut added = 0;
    for ch in text.chars().take(cap) {
        buf.push(ch);
        added += 1;
    }
    added
}

/// Joins usernames with `", "` into at most [`ASSIGNEES_WIDTH`] characters,
/// dropping whatever does not fit. An empty result becomes [`PLACEHOLDER`];
/// otherwise a single trailing space is appended when the budget allows.
fn assignees_cell(assignees: &[String]) -> String {
    let mut cell = String::new();
    let mut len = 0;

    for username in assignees {
        if username.is_empty() {
            continue;
        }
        if len > 0 {
            len += append_capped(&mut cell, ", ", ASSIGNEES_WIDTH - len);
        }
        if len < ASSIGNEES_WIDTH {
            len += append_capped(&mut cell, username, ASSIGNEES_WIDTH - len);
        }
        if len >= ASSIGNEES_WIDTH {
            break;
        }
    }

    if cell.is_empty() {
        return PLACEHOLDER.to_owned();
    }
    if len < ASSIGNEES_WIDTH {
        cell.push(' ');
    }
    cell
}

// Only the name column is truncated here; an over-long id or status widens
// its column instead, matching the original table output.
fn format_row(id: &str, name: &str, status: &str, assignees: &str) -> String {
    format!(
        "| {:<id_w$} | {:<name_w$} | {:<status_w$} | {:<assignees_w$} |",
        id,
        truncate_name(name),
        status,
        assignees,
        id_w = ID_WIDTH,
        name_w = NAME_WIDTH,
        status_w = STATUS_WIDTH,
        assignees_w = ASSIGNEES_WIDTH,
    )
}

/// Renders the bordered table: separator, header, separator, one row per
/// task in input order, separator.
pub fn render(tasks: &[Task]) -> String {
    let separator = separator();
    let mut out = String::new();

    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format_row("ID", "Name", "Status", "Assignees"));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');

    for task in tasks {
        let assignees = assignees_cell(&task.assignees);
        out.push_str(&format_row(&task.id, &task.name, &task.status, &assignees));
        out.push('\n');
    }

    out.push_str(&separator);
    out.push('\n');
    out
}
