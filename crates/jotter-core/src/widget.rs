//! The note widget: event handling over the store, session and surface

use crate::error::Result;
use crate::form::{FormFields, NoteInput};
use crate::models::NoteId;
use crate::session::EditSession;
use crate::storage::KeyValueStore;
use crate::store::NoteStore;
use crate::surface::Surface;
use crate::theme::Theme;

/// Something the user did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// An add button (toolbar or empty-state call-to-action)
    AddClicked,
    /// The edit action on a note row
    EditClicked(NoteId),
    /// The delete action on a note row
    DeleteClicked(NoteId),
    /// A form input changed
    FieldChanged { name: String, value: String },
    /// The form was submitted with these values
    Submitted(FormFields),
    /// The form's cancel button
    Cancelled,
    /// The dialog's close button
    Closed,
    /// The theme switch
    ThemeToggled,
}

/// Owns all widget state; nothing lives outside an instance.
///
/// Each call to [`Widget::handle`] runs to completion before the next event
/// is looked at. Mutations go store first, then storage, then a full
/// re-render of the surface.
pub struct Widget<S, U> {
    store: NoteStore<S>,
    session: EditSession,
    theme: Theme,
    surface: U,
}

impl<S: KeyValueStore, U: Surface> Widget<S, U> {
    /// Load persisted notes and theme, then render once
    pub fn start(storage: S, surface: U) -> Result<Self> {
        let store = NoteStore::load(storage)?;
        let theme = Theme::load(store.storage())?;

        let mut widget = Self {
            store,
            session: EditSession::new(),
            theme,
            surface,
        };
        widget.render();
        tracing::debug!("Widget started with {} notes", widget.store.len());
        Ok(widget)
    }

    /// Process one event
    pub fn handle(&mut self, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::AddClicked => {
                self.session.begin_new();
                self.surface.reset_form();
                self.surface.open_modal(self.session.dialog_title());
            }
            UiEvent::EditClicked(id) => self.begin_edit(&id),
            UiEvent::DeleteClicked(id) => {
                self.store.delete(&id)?;
                self.render();
            }
            UiEvent::FieldChanged { name, value } => {
                if self.session.set_field(&name, value) {
                    self.surface.set_form(self.session.form());
                } else {
                    tracing::debug!("Ignoring change to unknown field '{name}'");
                }
            }
            UiEvent::Submitted(fields) => self.submit(&fields)?,
            UiEvent::Cancelled | UiEvent::Closed => self.close(),
            UiEvent::ThemeToggled => {
                self.theme = Theme::toggle(self.store.storage_mut())?;
                tracing::debug!("Theme switched to {}", self.theme);
            }
        }
        Ok(())
    }

    /// Submit whatever the form currently holds
    pub fn submit_staged(&mut self) -> Result<()> {
        let fields = self.session.form().clone();
        self.submit(&fields)
    }

    pub const fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub const fn session(&self) -> &EditSession {
        &self.session
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub const fn surface(&self) -> &U {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    /// Re-derive the view and hand it to the surface
    pub fn render(&mut self) {
        let view = self.store.render();
        self.surface.show(&view);
    }

    fn begin_edit(&mut self, id: &NoteId) {
        let Some(note) = self.store.get(id) else {
            tracing::debug!("Edit requested for unknown note {id}");
            return;
        };

        self.session.begin(note);
        self.surface.set_form(self.session.form());
        self.surface.open_modal(self.session.dialog_title());
    }

    fn submit(&mut self, fields: &FormFields) -> Result<()> {
        let input = NoteInput::try_from(fields)?;

        match self.session.editing_id().cloned() {
            Some(id) => {
                self.store.update(&id, input.title, input.description)?;
            }
            None => {
                self.store.add(input.title, input.description)?;
            }
        }

        self.render();
        self.close();
        Ok(())
    }

    fn close(&mut self) {
        self.session.end();
        self.surface.reset_form();
        self.surface.close_modal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::render::View;
    use crate::session::{ADD_TITLE, EDIT_TITLE};
    use crate::storage::{MemoryStore, NOTES_KEY, THEME_KEY};
    use crate::surface::HeadlessSurface;
    use pretty_assertions::assert_eq;

    fn setup() -> Widget<MemoryStore, HeadlessSurface> {
        Widget::start(MemoryStore::new(), HeadlessSurface::new()).unwrap()
    }

    fn shown_titles(widget: &Widget<MemoryStore, HeadlessSurface>) -> Vec<String> {
        widget
            .surface()
            .view()
            .unwrap()
            .rows()
            .iter()
            .map(|row| row.title.clone())
            .collect()
    }

    fn add(widget: &mut Widget<MemoryStore, HeadlessSurface>, title: &str, description: &str) {
        widget.handle(UiEvent::AddClicked).unwrap();
        widget
            .handle(UiEvent::Submitted(FormFields::new(title, description)))
            .unwrap();
    }

    #[test]
    fn test_start_renders_empty_state() {
        let widget = setup();
        assert!(widget.surface().view().unwrap().is_empty());
        assert_eq!(widget.surface().render_count(), 1);
        assert!(!widget.surface().is_modal_open());
    }

    #[test]
    fn test_add_flow() {
        let mut widget = setup();
        widget.handle(UiEvent::AddClicked).unwrap();
        assert_eq!(widget.surface().modal_title(), Some(ADD_TITLE));
        assert!(!widget.session().is_active());

        widget
            .handle(UiEvent::Submitted(FormFields::new("A", "first")))
            .unwrap();
        add(&mut widget, "B", "second");

        assert_eq!(shown_titles(&widget), vec!["B", "A"]);
        assert!(!widget.surface().is_modal_open());
        assert!(widget.surface().form().is_blank());
    }

    #[test]
    fn test_edit_flow_updates_in_place() {
        let mut widget = setup();
        add(&mut widget, "A", "a");
        add(&mut widget, "B", "b");
        let target = widget.store().notes()[1].clone();

        widget.handle(UiEvent::EditClicked(target.id.clone())).unwrap();
        assert_eq!(widget.surface().modal_title(), Some(EDIT_TITLE));
        assert_eq!(widget.surface().form(), &FormFields::new("A", "a"));
        assert_eq!(widget.session().editing_id(), Some(&target.id));

        widget
            .handle(UiEvent::FieldChanged {
                name: "title".to_string(),
                value: "A2".to_string(),
            })
            .unwrap();
        widget.submit_staged().unwrap();

        assert_eq!(shown_titles(&widget), vec!["B", "A2"]);
        assert_eq!(widget.store().notes()[1].id, target.id);
        assert_eq!(widget.store().notes()[1].description, "a");
        assert!(!widget.session().is_active());
        assert_eq!(widget.store().len(), 2);
    }

    #[test]
    fn test_edit_of_unknown_note_stays_idle() {
        let mut widget = setup();
        widget
            .handle(UiEvent::EditClicked("missing".parse().unwrap()))
            .unwrap();

        assert!(!widget.session().is_active());
        assert!(!widget.surface().is_modal_open());
    }

    #[test]
    fn test_cancel_discards_staged_edit() {
        let mut widget = setup();
        add(&mut widget, "A", "a");
        let id = widget.store().notes()[0].id.clone();

        widget.handle(UiEvent::EditClicked(id)).unwrap();
        widget
            .handle(UiEvent::FieldChanged {
                name: "title".to_string(),
                value: "changed".to_string(),
            })
            .unwrap();
        widget.handle(UiEvent::Cancelled).unwrap();

        assert_eq!(widget.store().notes()[0].title, "A");
        assert!(!widget.session().is_active());
        assert!(widget.surface().form().is_blank());
        assert!(!widget.surface().is_modal_open());

        // Adding after a cancelled edit must create, not update
        add(&mut widget, "B", "b");
        assert_eq!(shown_titles(&widget), vec!["B", "A"]);
    }

    #[test]
    fn test_delete_rerenders_even_when_missing() {
        let mut widget = setup();
        add(&mut widget, "A", "a");
        let renders = widget.surface().render_count();

        widget
            .handle(UiEvent::DeleteClicked("missing".parse().unwrap()))
            .unwrap();
        assert_eq!(widget.surface().render_count(), renders + 1);
        assert_eq!(widget.store().len(), 1);

        let id = widget.store().notes()[0].id.clone();
        widget.handle(UiEvent::DeleteClicked(id)).unwrap();
        assert_eq!(widget.surface().view(), Some(&View::from_notes(&[])));
    }

    #[test]
    fn test_submit_for_vanished_note_rerenders_unchanged_list() {
        let mut widget = setup();
        add(&mut widget, "A", "a");
        add(&mut widget, "B", "b");
        let target = widget.store().notes()[1].id.clone();

        widget.handle(UiEvent::EditClicked(target.clone())).unwrap();
        widget.store.delete(&target).unwrap();
        let renders = widget.surface().render_count();

        widget
            .handle(UiEvent::Submitted(FormFields::new("A2", "a2")))
            .unwrap();

        assert_eq!(widget.surface().render_count(), renders + 1);
        assert_eq!(shown_titles(&widget), vec!["B"]);
        assert_eq!(widget.store().len(), 1);
        assert!(!widget.session().is_active());
        assert!(!widget.surface().is_modal_open());
    }

    #[test]
    fn test_submit_with_blank_title_is_rejected() {
        let mut widget = setup();
        widget.handle(UiEvent::AddClicked).unwrap();

        let err = widget
            .handle(UiEvent::Submitted(FormFields::new("  ", "body")))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(widget.store().is_empty());
        assert!(widget.surface().is_modal_open());
    }

    #[test]
    fn test_state_survives_restart() {
        let mut widget = setup();
        add(&mut widget, "kept", "across restarts");
        widget.handle(UiEvent::ThemeToggled).unwrap();
        assert_eq!(widget.theme(), Theme::Dark);

        let Widget { store, .. } = widget;
        let storage = store.into_storage();
        assert!(storage.get_item(NOTES_KEY).unwrap().is_some());
        assert_eq!(storage.get_item(THEME_KEY).unwrap().as_deref(), Some("dark"));

        let restarted = Widget::start(storage, HeadlessSurface::new()).unwrap();
        assert_eq!(restarted.theme(), Theme::Dark);
        assert_eq!(restarted.store().notes()[0].title, "kept");
        assert_eq!(shown_titles(&restarted), vec!["kept"]);
    }
}
