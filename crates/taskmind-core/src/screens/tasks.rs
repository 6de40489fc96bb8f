use anyhow::anyhow;
use tracing::info;

use crate::cli::TaskAction;
use crate::list;
use crate::render::Renderer;
use crate::store::FileStore;
use crate::task::{self, Task};

pub fn run(
    store: &FileStore,
    renderer: &Renderer,
    action: Option<TaskAction>,
) -> anyhow::Result<()> {
    let tasks = task::load_or_default(store);

    match action.unwrap_or(TaskAction::List) {
        TaskAction::List => {
            renderer.heading("Tasks");
            if tasks.is_empty() {
                renderer.line("No tasks yet!");
            } else {
                renderer.print_task_table(&tasks)?;
            }
            Ok(())
        }

        TaskAction::Add { title, day } => {
            let Some(new_task) = Task::new(title.as_deref().unwrap_or(""), day) else {
                info!("empty task add ignored");
                renderer.line("Nothing to add: give a title or a day.");
                return Ok(());
            };

            let title = new_task.title.clone();
            let next = list::prepend(tasks, new_task);
            task::persist(store, &next);
            renderer.line(&format!("Added task: {title}"));
            Ok(())
        }

        TaskAction::Done { index } => set_done(store, renderer, tasks, index, true),
        TaskAction::Undone { index } => set_done(store, renderer, tasks, index, false),

        TaskAction::Rm { index } => {
            if index >= tasks.len() {
                return Err(anyhow!("no task at index {index}"));
            }
            let title = tasks[index].title.clone();
            let next = list::remove_at(tasks, index);
            task::persist(store, &next);
            renderer.line(&format!("Removed task: {title}"));
            Ok(())
        }
    }
}

fn set_done(
    store: &FileStore,
    renderer: &Renderer,
    tasks: Vec<Task>,
    index: usize,
    done: bool,
) -> anyhow::Result<()> {
    if index >= tasks.len() {
        return Err(anyhow!("no task at index {index}"));
    }

    let next = task::set_done_at(tasks, index, done);
    task::persist(store, &next);

    let state = if done { "done" } else { "not done" };
    renderer.line(&format!("Marked {state}: {}", next[index].title));
    Ok(())
}
