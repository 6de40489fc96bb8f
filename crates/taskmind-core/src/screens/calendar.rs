use chrono::NaiveDate;

use crate::date;
use crate::derive::{calendar_marks, group_by_day};
use crate::render::Renderer;
use crate::store::FileStore;
use crate::task;

pub fn show(
    store: &FileStore,
    renderer: &Renderer,
    selected: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let tasks = task::load_or_default(store);
    let groups = group_by_day(&tasks);

    let today = date::today();
    let selected = selected.unwrap_or(today);
    let marks = calendar_marks(&groups, Some(selected));

    renderer.heading("Calendar");
    renderer.line("");
    renderer.print_month(selected, &marks)?;

    if selected == today {
        renderer.section("Tasks for today");
    } else {
        renderer.section(&format!("Tasks for {selected}"));
    }

    let titles = groups
        .iter()
        .find(|group| group.date == selected)
        .map(|group| group.titles.as_slice())
        .unwrap_or_default();

    if titles.is_empty() {
        if selected == today {
            renderer.line("No tasks for today.");
        } else {
            renderer.line("No tasks for this day.");
        }
    } else {
        for title in titles {
            renderer.checklist_row(false, title);
        }
    }

    Ok(())
}
