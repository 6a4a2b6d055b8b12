//! Markup rendering for embedding the widget in a page

use std::fmt::Write as _;

use super::{EmptyState, NoteRow, View};

/// Escape text for use in element content and quoted attribute values
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render the notes container markup for a view
#[must_use]
pub fn render_html(view: &View) -> String {
    match view {
        View::Empty(empty) => render_empty(empty),
        View::List { rows } => rows.iter().map(render_row).collect(),
    }
}

fn render_empty(empty: &EmptyState) -> String {
    format!(
        "<div class=\"empty-state\">\n  <h2>{}</h2>\n  <p>{}</p>\n  \
         <button class=\"button button-primary\" data-add-note-button>{}</button>\n</div>\n",
        escape_html(empty.heading),
        escape_html(empty.message),
        escape_html(empty.cta_label),
    )
}

fn render_row(row: &NoteRow) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<div class=\"note\" data-note data-note-id=\"{}\">",
        escape_html(row.id.as_str())
    );
    let _ = writeln!(
        out,
        "  <h3 class=\"note-title\" data-note-title>{}</h3>",
        escape_html(&row.title)
    );
    let _ = writeln!(
        out,
        "  <p class=\"note-description\" data-note-description>{}</p>",
        escape_html(&row.description)
    );
    let _ = writeln!(out, "  <div class=\"note-actions\">");
    for action in row.actions {
        let name = action.as_str();
        let label = action.label();
        let _ = writeln!(
            out,
            "    <button class=\"button-{name}-note\" title=\"{label}\" aria-label=\"{label}\" \
             data-note-action=\"{name}\">"
        );
        let _ = writeln!(out, "      <svg width=\"16\" height=\"16\" aria-hidden=\"true\">");
        let _ = writeln!(out, "        <use href=\"assets/icons.svg#{name}\"></use>");
        let _ = writeln!(out, "      </svg>");
        let _ = writeln!(out, "    </button>");
    }
    let _ = writeln!(out, "  </div>");
    let _ = writeln!(out, "</div>");
    out
}
