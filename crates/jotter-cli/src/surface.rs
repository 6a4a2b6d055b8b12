//! Terminal rendition of the widget's display, form and modal.

use std::io::Write;

use jotter_core::render::{escape_terminal, render_text};
use jotter_core::{FormFields, Surface, View};

/// Writes every surface update as plain lines.
///
/// Write failures are dropped: the widget has already committed its state by
/// the time the surface is told about it.
pub struct TerminalSurface<W> {
    out: W,
    last_view: Option<View>,
}

impl<W: Write> TerminalSurface<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out,
            last_view: None,
        }
    }

    pub const fn last_view(&self) -> Option<&View> {
        self.last_view.as_ref()
    }

    /// Everything written so far
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Print the most recent view again
    pub fn reprint(&mut self) {
        if let Some(view) = self.last_view.take() {
            self.print_view(&view);
            self.last_view = Some(view);
        }
    }

    fn print_view(&mut self, view: &View) {
        for line in render_text(view) {
            writeln!(self.out, "  {line}").ok();
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn show(&mut self, view: &View) {
        self.print_view(view);
        self.last_view = Some(view.clone());
    }

    fn set_form(&mut self, fields: &FormFields) {
        writeln!(self.out, "  title: {}", escape_terminal(&fields.title)).ok();
        writeln!(
            self.out,
            "  description: {}",
            escape_terminal(&fields.description)
        )
        .ok();
    }

    fn reset_form(&mut self) {}

    fn open_modal(&mut self, title: &str) {
        writeln!(self.out, "== {title} ==").ok();
    }

    fn close_modal(&mut self) {
        writeln!(self.out, "== closed ==").ok();
    }
}
