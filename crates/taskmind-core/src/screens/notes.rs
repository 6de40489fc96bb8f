use anyhow::anyhow;
use tracing::info;

use crate::cli::NoteAction;
use crate::list;
use crate::note::{self, Note};
use crate::render::Renderer;
use crate::store::FileStore;

pub fn run(
    store: &FileStore,
    renderer: &Renderer,
    action: Option<NoteAction>,
) -> anyhow::Result<()> {
    let notes = note::load_or_default(store);

    match action.unwrap_or(NoteAction::List) {
        NoteAction::List => {
            renderer.heading("Notes");
            if notes.is_empty() {
                renderer.line("You don't have any notes yet - let's add your first one!");
            } else {
                renderer.print_note_cards(&notes)?;
            }
            Ok(())
        }

        NoteAction::Add { title, content } => {
            let new_note = Note::new(
                title.as_deref().unwrap_or(""),
                content.as_deref().unwrap_or(""),
            );
            let Some(new_note) = new_note else {
                info!("empty note add ignored");
                renderer.line("Nothing to add: give a title or some content.");
                return Ok(());
            };

            let title = new_note.title.clone();
            let next = list::prepend(notes, new_note);
            note::persist(store, &next);
            renderer.line(&format!("Added note: {title}"));
            Ok(())
        }

        NoteAction::Rm { index } => {
            if index >= notes.len() {
                return Err(anyhow!("no note at index {index}"));
            }
            let title = notes[index].title.clone();
            let next = list::remove_at(notes, index);
            note::persist(store, &next);
            renderer.line(&format!("Removed note: {title}"));
            Ok(())
        }
    }
}
