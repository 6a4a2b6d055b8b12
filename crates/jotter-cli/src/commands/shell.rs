use std::io::{self, BufRead, Write};
use std::path::Path;

use jotter_core::form::{DESCRIPTION_FIELD, TITLE_FIELD};
use jotter_core::{KeyValueStore, NoteId, UiEvent, Widget};

use crate::commands::common::open_storage;
use crate::error::CliError;
use crate::surface::TerminalSurface;

const HELP: &str = "\
commands:
  add                 open the dialog for a new note
  edit <id>           open the dialog for an existing note (id or prefix)
  delete <id>         delete a note (id or prefix)
  title <text>        set the title field
  description <text>  set the description field
  submit              save the dialog
  cancel | close      dismiss the dialog
  theme               toggle light/dark
  show                print the notes again
  help                this text
  quit                leave the shell";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add,
    Edit(String),
    Delete(String),
    Field { name: &'static str, value: String },
    Submit,
    Cancel,
    Close,
    Theme,
    Show,
    Help,
    Quit,
    Blank,
}

pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word {
        "" => ShellCommand::Blank,
        "add" | "new" => ShellCommand::Add,
        "edit" => ShellCommand::Edit(require_arg(word, rest)?),
        "delete" | "rm" => ShellCommand::Delete(require_arg(word, rest)?),
        "title" => ShellCommand::Field {
            name: TITLE_FIELD,
            value: rest.to_string(),
        },
        "description" | "desc" => ShellCommand::Field {
            name: DESCRIPTION_FIELD,
            value: rest.to_string(),
        },
        "submit" | "save" => ShellCommand::Submit,
        "cancel" => ShellCommand::Cancel,
        "close" => ShellCommand::Close,
        "theme" => ShellCommand::Theme,
        "show" | "ls" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(command)
}

fn require_arg(command: &str, arg: &str) -> Result<String, String> {
    if arg.is_empty() {
        Err(format!("'{command}' needs a note id"))
    } else {
        Ok(arg.to_string())
    }
}

pub fn run_shell(db_path: &Path) -> Result<(), CliError> {
    let storage = open_storage(db_path)?;
    let mut widget = Widget::start(storage, TerminalSurface::new(io::stdout()))?;
    let stdin = io::stdin();
    run_session(&mut widget, stdin.lock())
}

/// Feed input lines to the widget until `quit` or end of input.
///
/// A failing line is reported and the loop carries on with the next one.
pub fn run_session<S, W, R>(
    widget: &mut Widget<S, TerminalSurface<W>>,
    input: R,
) -> Result<(), CliError>
where
    S: KeyValueStore,
    W: Write,
    R: BufRead,
{
    for line in input.lines() {
        let command = match parse_line(&line?) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        let outcome = match command {
            ShellCommand::Quit => break,
            ShellCommand::Blank => Ok(()),
            ShellCommand::Help => {
                eprintln!("{HELP}");
                Ok(())
            }
            ShellCommand::Show => {
                widget.surface_mut().reprint();
                Ok(())
            }
            ShellCommand::Add => widget.handle(UiEvent::AddClicked),
            ShellCommand::Edit(query) => resolve(widget, &query)
                .and_then(|id| widget.handle(UiEvent::EditClicked(id))),
            ShellCommand::Delete(query) => resolve(widget, &query)
                .and_then(|id| widget.handle(UiEvent::DeleteClicked(id))),
            ShellCommand::Field { name, value } => widget.handle(UiEvent::FieldChanged {
                name: name.to_string(),
                value,
            }),
            ShellCommand::Submit => widget.submit_staged(),
            ShellCommand::Cancel => widget.handle(UiEvent::Cancelled),
            ShellCommand::Close => widget.handle(UiEvent::Closed),
            ShellCommand::Theme => widget.handle(UiEvent::ThemeToggled).map(|()| {
                eprintln!("theme: {}", widget.theme());
            }),
        };

        if let Err(error) = outcome {
            eprintln!("error: {error}");
        }
    }

    Ok(())
}

/// Unknown ids pass through unchanged so the widget treats them as no-ops
fn resolve<S: KeyValueStore, U>(widget: &Widget<S, U>, query: &str) -> jotter_core::Result<NoteId>
where
    U: jotter_core::Surface,
{
    match widget.store().resolve_id(query) {
        Some(id) => Ok(id),
        None => query.parse(),
    }
}
