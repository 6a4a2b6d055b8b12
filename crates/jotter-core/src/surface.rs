//! Display, form and modal collaborators driven by the widget

use crate::form::FormFields;
use crate::render::View;

/// The UI pieces the widget writes to.
///
/// Events flow the other way, as [`crate::widget::UiEvent`] values fed to
/// [`crate::widget::Widget::handle`].
pub trait Surface {
    /// Replace the displayed notes container with `view`
    fn show(&mut self, view: &View);

    /// Put values into the form inputs
    fn set_form(&mut self, fields: &FormFields);

    /// Clear the form inputs
    fn reset_form(&mut self);

    /// Open the note dialog with the given title
    fn open_modal(&mut self, title: &str);

    /// Close the note dialog
    fn close_modal(&mut self);
}

/// Surface that only remembers what it was last told.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    view: Option<View>,
    form: FormFields,
    modal_title: Option<String>,
    renders: usize,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last view shown, if any
    pub const fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub const fn form(&self) -> &FormFields {
        &self.form
    }

    /// Title of the open dialog, `None` when closed
    pub fn modal_title(&self) -> Option<&str> {
        self.modal_title.as_deref()
    }

    pub const fn is_modal_open(&self) -> bool {
        self.modal_title.is_some()
    }

    /// How many times a view was shown
    pub const fn render_count(&self) -> usize {
        self.renders
    }
}

impl Surface for HeadlessSurface {
    fn show(&mut self, view: &View) {
        self.view = Some(view.clone());
        self.renders += 1;
    }

    fn set_form(&mut self, fields: &FormFields) {
        self.form = fields.clone();
    }

    fn reset_form(&mut self) {
        self.form.reset();
    }

    fn open_modal(&mut self, title: &str) {
        self.modal_title = Some(title.to_string());
    }

    fn close_modal(&mut self) {
        self.modal_title = None;
    }
}
