use crate::date;
use crate::derive::tasks_on;
use crate::render::Renderer;
use crate::store::FileStore;
use crate::{note, profile, task};

const NOTE_PREVIEW_COUNT: usize = 4;

pub fn show(store: &FileStore, renderer: &Renderer) -> anyhow::Result<()> {
    let profile = profile::load_or_default(store);
    let tasks = task::load_or_default(store);
    let notes = note::load_or_default(store);

    renderer.heading(&format!("Hello, {}", profile.name));

    renderer.section("Today's tasks");
    let today = tasks_on(&tasks, date::today());
    if today.is_empty() {
        renderer.line("No tasks for today :)");
    } else {
        for task in today {
            renderer.checklist_row(task.done, &task.title);
        }
    }

    renderer.section("Notes");
    if notes.is_empty() {
        renderer.line("No notes yet.");
    } else {
        for note in notes.iter().take(NOTE_PREVIEW_COUNT) {
            renderer.bullet_row(&note.title);
        }
    }

    renderer.section("Tomorrow's tasks");
    let tomorrow = tasks_on(&tasks, date::tomorrow());
    if tomorrow.is_empty() {
        renderer.line("No tasks for tomorrow :)");
    } else {
        for task in tomorrow {
            renderer.checklist_row(task.done, &task.title);
        }
    }

    Ok(())
}
