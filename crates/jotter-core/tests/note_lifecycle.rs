use jotter_core::render::{render_html, EMPTY_CTA_LABEL};
use jotter_core::storage::NOTES_KEY;
use jotter_core::{
    Error, FormFields, HeadlessSurface, KeyValueStore, NoteId, NoteStore, SqliteStore, Theme,
    UiEvent, View, Widget,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn submit_new<S: KeyValueStore>(widget: &mut Widget<S, HeadlessSurface>, title: &str, body: &str) {
    widget.handle(UiEvent::AddClicked).unwrap();
    widget
        .handle(UiEvent::Submitted(FormFields::new(title, body)))
        .unwrap();
}

#[test]
fn add_then_reload_from_sqlite() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("jotter.db");

    let (first, created) = {
        let mut store = NoteStore::load(SqliteStore::open(&path).unwrap()).unwrap();
        let first = store.add("earlier", "").unwrap();
        let created = store.add("T", "D").unwrap();
        (first, created)
    };

    let store = NoteStore::load(SqliteStore::open(&path).unwrap()).unwrap();
    let head = &store.notes()[0];
    assert_eq!(head.title, "T");
    assert_eq!(head.description, "D");
    assert_eq!(head.id, created.id);
    assert_ne!(head.id, first.id);
    assert_eq!(store.len(), 2);
}

#[test]
fn persisted_value_is_a_plain_json_array() {
    let mut store = NoteStore::load(SqliteStore::open_in_memory().unwrap()).unwrap();
    let note = store.add("T", "D").unwrap();

    let raw = store.storage().get_item(NOTES_KEY).unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([{ "id": note.id.as_str(), "title": "T", "description": "D" }])
    );
}

#[test]
fn malformed_storage_aborts_start() {
    let mut storage = SqliteStore::open_in_memory().unwrap();
    storage.set_item(NOTES_KEY, "[{\"id\": 1").unwrap();

    let result = Widget::start(storage, HeadlessSurface::new());
    assert!(matches!(result, Err(Error::Serialization(_))));
}

#[test]
fn delete_middle_of_three_keeps_order() {
    let mut widget = Widget::start(SqliteStore::open_in_memory().unwrap(), HeadlessSurface::new())
        .unwrap();
    submit_new(&mut widget, "one", "");
    submit_new(&mut widget, "two", "");
    submit_new(&mut widget, "three", "");

    let middle = widget.store().notes()[1].id.clone();
    widget.handle(UiEvent::DeleteClicked(middle.clone())).unwrap();

    let titles: Vec<&str> = widget
        .store()
        .notes()
        .iter()
        .map(|note| note.title.as_str())
        .collect();
    assert_eq!(titles, vec!["three", "one"]);
    assert!(widget.store().get(&middle).is_none());
}

#[test]
fn update_missing_id_leaves_everything_unchanged() {
    let mut store = NoteStore::load(SqliteStore::open_in_memory().unwrap()).unwrap();
    store.add("A", "a").unwrap();
    store.add("B", "b").unwrap();
    let before = store.notes().to_vec();
    let raw_before = store.storage().get_item(NOTES_KEY).unwrap();

    let missing: NoteId = "0000".parse().unwrap();
    assert!(!store.update(&missing, "x", "y").unwrap());

    assert_eq!(store.notes(), before.as_slice());
    assert_eq!(store.storage().get_item(NOTES_KEY).unwrap(), raw_before);
}

#[test]
fn escaped_title_renders_literally() {
    let mut widget =
        Widget::start(SqliteStore::open_in_memory().unwrap(), HeadlessSurface::new()).unwrap();
    submit_new(&mut widget, "<b>x</b>", "");

    let html = render_html(widget.surface().view().unwrap());
    assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
    assert!(!html.contains("<b>x</b>"));
}

#[test]
fn empty_collection_renders_empty_state() {
    let widget =
        Widget::start(SqliteStore::open_in_memory().unwrap(), HeadlessSurface::new()).unwrap();
    let view = widget.surface().view().unwrap();

    assert!(matches!(view, View::Empty(_)));
    assert!(render_html(view).contains(EMPTY_CTA_LABEL));
}

#[test]
fn theme_is_independent_of_notes() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("jotter.db");

    {
        let mut widget =
            Widget::start(SqliteStore::open(&path).unwrap(), HeadlessSurface::new()).unwrap();
        widget.handle(UiEvent::ThemeToggled).unwrap();
    }

    let storage = SqliteStore::open(&path).unwrap();
    assert_eq!(Theme::load(&storage).unwrap(), Theme::Dark);
    assert_eq!(storage.get_item(NOTES_KEY).unwrap(), None);
}
