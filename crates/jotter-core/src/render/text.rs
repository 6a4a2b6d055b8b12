//! Plain-text rendering for terminals

use super::View;

const SHORT_ID_LEN: usize = 13;
const PREVIEW_LEN: usize = 40;

/// Render a view as terminal lines, one per note
#[must_use]
pub fn render_text(view: &View) -> Vec<String> {
    match view {
        View::Empty(empty) => vec![
            empty.heading.to_string(),
            empty.message.to_string(),
            format!("[{}]", empty.cta_label),
        ],
        View::List { rows } => rows
            .iter()
            .map(|row| {
                let short_id = row.id.as_str().chars().take(SHORT_ID_LEN).collect::<String>();
                let title = single_line(&row.title, PREVIEW_LEN);
                let description = single_line(&row.description, PREVIEW_LEN);

                if description.is_empty() {
                    format!("{short_id:<SHORT_ID_LEN$}  {title}")
                } else {
                    format!("{short_id:<SHORT_ID_LEN$}  {title:<PREVIEW_LEN$}  {description}")
                }
            })
            .collect(),
    }
}

/// Make text safe to print on a terminal.
///
/// Control characters (escape sequences, bell, newlines) are written out as
/// their Rust escapes, so `"\x1b[2J"` prints as `\u{1b}[2J`.
#[must_use]
pub fn escape_terminal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_control() {
            escaped.extend(ch.escape_default());
        } else {
            escaped.push(ch);
        }
    }
    escaped
}

/// Collapse whitespace runs, escape control characters and truncate with an
/// ellipsis
fn single_line(text: &str, max_chars: usize) -> String {
    let collapsed = escape_terminal(&text.split_whitespace().collect::<Vec<_>>().join(" "));
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let mut truncated = collapsed
        .chars()
        .take(max_chars.saturating_sub(3))
        .collect::<String>();
    truncated.push_str("...");
    truncated
}
