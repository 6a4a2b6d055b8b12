//! jotter-core - Core library for Jotter
//!
//! This crate contains the note model, the key-value storage backends, the
//! note store, the edit session and the view rendering used by every Jotter
//! front-end.

pub mod error;
pub mod form;
pub mod models;
pub mod render;
pub mod session;
pub mod storage;
pub mod store;
pub mod surface;
pub mod theme;
pub mod widget;

pub use error::{Error, Result};
pub use form::{FormFields, NoteInput};
pub use models::{Note, NoteId};
pub use render::View;
pub use session::{EditSession, SessionState};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use store::NoteStore;
pub use surface::{HeadlessSurface, Surface};
pub use theme::Theme;
pub use widget::{UiEvent, Widget};
