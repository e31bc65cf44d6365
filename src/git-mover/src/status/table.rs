//! Markdown rendering of milestone status.

use super::MilestoneStatus;
use crate::models::{ItemState, Milestone};

const DONE: &str = ":white_check_mark:";
const TODO: &str = ":black_square_button:";

/// Renders one row per milestone with its issue counts.
///
/// ```text
/// | Milestone | State | Open | Closed | Progress | Due |
/// |-|-|-|-|-|-|
/// | v1 | open | 2 | 1 | 33% | 2024-05-01 |
/// ```
#[must_use]
pub fn render_summary_table(statuses: &[MilestoneStatus]) -> String {
    let mut lines = vec![
        row(["Milestone", "State", "Open", "Closed", "Progress", "Due"].map(String::from)),
        separator(6),
    ];

    for status in statuses {
        let milestone = &status.milestone;
        lines.push(row([
            milestone_link(milestone),
            milestone.state.to_string(),
            status.open_count().to_string(),
            status.closed_count().to_string(),
            status
                .progress_percent()
                .map_or_else(|| "-".to_string(), |p| format!("{p}%")),
            milestone
                .due_on
                .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string()),
        ]));
    }

    lines.join("\n") + "\n"
}

/// Renders one column per milestone and one row per issue position.
///
/// Closed issues are ticked, open ones are boxes, and cells past the end
/// of a milestone's issues are blank.
#[must_use]
pub fn render_checklist(statuses: &[MilestoneStatus]) -> String {
    if statuses.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        row(statuses.iter().map(|s| milestone_link(&s.milestone))),
        separator(statuses.len()),
    ];

    let depth = statuses.iter().map(|s| s.issues.len()).max().unwrap_or(0);
    for position in 0..depth {
        lines.push(row(statuses.iter().map(|status| {
            status
                .issues
                .get(position)
                .map(|issue| {
                    let mark = match issue.state {
                        ItemState::Closed => DONE,
                        ItemState::Open => TODO,
                    };
                    format!("{mark} {}", escape(&issue.title))
                })
                .unwrap_or_default()
        })));
    }

    lines.join("\n") + "\n"
}

fn milestone_link(milestone: &Milestone) -> String {
    let title = escape(&milestone.title);
    match &milestone.html_url {
        Some(url) => format!("[{title}]({url})"),
        None => title,
    }
}

fn row(cells: impl IntoIterator<Item = String>) -> String {
    let cells: Vec<String> = cells.into_iter().collect();
    format!("| {} |", cells.join(" | "))
}

fn separator(columns: usize) -> String {
    format!("|{}", "-|".repeat(columns))
}

/// Keeps titles from breaking the table layout.
fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
