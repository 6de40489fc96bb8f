use std::fs;

use taskmind_core::list;
use taskmind_core::note::{self, Note};
use taskmind_core::profile::{self, Profile};
use taskmind_core::store::{FileStore, KEY_DARK_MODE, KEY_TASKS};
use taskmind_core::task::{self, Task};
use taskmind_core::theme::Theme;
use tempfile::tempdir;

#[test]
fn get_after_set_observes_the_new_value() {
    let temp = tempdir().expect("tempdir");
    let store = FileStore::open(temp.path()).expect("open store");

    assert_eq!(store.get("tasks").expect("get"), None);

    store.set("tasks", "[]").expect("set");
    assert_eq!(store.get("tasks").expect("get"), Some("[]".to_string()));

    store.set("tasks", "[1]").expect("overwrite");
    assert_eq!(store.get("tasks").expect("get"), Some("[1]".to_string()));
}

#[test]
fn task_add_lands_at_index_zero_and_survives_a_reload() {
    let temp = tempdir().expect("tempdir");
    let store = FileStore::open(temp.path()).expect("open store");

    let existing = Task::new("Water plants", None).expect("task");
    task::save(&store, &[existing.clone()]).expect("save");

    let tasks = task::load(&store).expect("load");
    let added = Task::new("Buy milk", Some("2024-03-05".parse().expect("date"))).expect("task");
    let next = list::prepend(tasks, added);
    task::save(&store, &next).expect("save");

    let reloaded = task::load(&store).expect("reload");
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded[0].title, "Buy milk");
    assert_eq!(
        reloaded[0].day,
        Some("2024-03-05".parse().expect("date"))
    );
    assert_eq!(reloaded[1], existing);
}

#[test]
fn malformed_payload_degrades_to_an_empty_list() {
    let temp = tempdir().expect("tempdir");
    let store = FileStore::open(temp.path()).expect("open store");

    store.set(KEY_TASKS, "not json at all").expect("set");

    assert!(task::load(&store).is_err());
    assert!(task::load_or_default(&store).is_empty());
}

#[test]
fn unreadable_key_degrades_to_an_empty_list() {
    let temp = tempdir().expect("tempdir");
    let store = FileStore::open(temp.path()).expect("open store");

    // A directory where the payload file should be makes the read fail.
    fs::create_dir(temp.path().join("tasks.json")).expect("create dir");

    assert!(task::load(&store).is_err());
    assert!(task::load_or_default(&store).is_empty());
}

#[test]
fn theme_toggle_persists_the_literal_true() {
    let temp = tempdir().expect("tempdir");
    let store = FileStore::open(temp.path()).expect("open store");

    let mut theme = Theme::load(&store);
    assert_eq!(theme, Theme::Light);

    theme.toggle(&store);
    assert_eq!(theme, Theme::Dark);
    assert_eq!(
        store.get(KEY_DARK_MODE).expect("get"),
        Some("true".to_string())
    );

    // The next startup sees dark mode.
    assert_eq!(Theme::load(&store), Theme::Dark);

    theme.toggle(&store);
    assert_eq!(
        store.get(KEY_DARK_MODE).expect("get"),
        Some("false".to_string())
    );
}

#[test]
fn notes_roundtrip_with_positional_removal() {
    let temp = tempdir().expect("tempdir");
    let store = FileStore::open(temp.path()).expect("open store");

    let first = Note::new("Groceries", "eggs, milk").expect("note");
    let second = Note::new("Ideas", "").expect("note");

    let notes = list::prepend(vec![first.clone()], second.clone());
    note::save(&store, &notes).expect("save");

    let reloaded = note::load(&store).expect("load");
    assert_eq!(reloaded, vec![second, first.clone()]);

    let next = list::remove_at(reloaded, 0);
    note::save(&store, &next).expect("save");
    assert_eq!(note::load(&store).expect("reload"), vec![first]);
}

#[test]
fn profile_defaults_to_user_and_persists_a_name() {
    let temp = tempdir().expect("tempdir");
    let store = FileStore::open(temp.path()).expect("open store");

    assert_eq!(profile::load_or_default(&store).name, "User");

    profile::save(
        &store,
        &Profile {
            name: "Ada".to_string(),
        },
    )
    .expect("save");
    assert_eq!(profile::load_or_default(&store).name, "Ada");
}
