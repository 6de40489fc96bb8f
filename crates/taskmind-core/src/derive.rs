//! Pure view derivations over the flat task list: the calendar's per-day
//! grouping and cell marks, and the home screen's exact-day filters.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::task::Task;

/// One calendar cell's worth of tasks, in original collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub titles: Vec<String>,
}

/// Annotations on a calendar cell; a date can be both marked and selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayMark {
    pub marked: bool,
    pub selected: bool,
}

/// Groups dated tasks by day in a single left-to-right scan. Undated
/// tasks appear in no group; group order is first-appearance order.
pub fn group_by_day(tasks: &[Task]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();

    for task in tasks {
        let Some(date) = task.day else {
            continue;
        };
        match groups.iter_mut().find(|group| group.date == date) {
            Some(group) => group.titles.push(task.title.clone()),
            None => groups.push(DayGroup {
                date,
                titles: vec![task.title.clone()],
            }),
        }
    }

    groups
}

/// Cell annotations: every grouped date is marked, and the selected date
/// (if any) is flagged on top of whatever mark it already carries.
pub fn calendar_marks(
    groups: &[DayGroup],
    selected: Option<NaiveDate>,
) -> BTreeMap<NaiveDate, DayMark> {
    let mut marks: BTreeMap<NaiveDate, DayMark> = BTreeMap::new();

    for group in groups {
        marks.entry(group.date).or_default().marked = true;
    }
    if let Some(date) = selected {
        marks.entry(date).or_default().selected = true;
    }

    marks
}

/// Tasks scheduled exactly on `day`, original order preserved.
pub fn tasks_on(tasks: &[Task], day: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|task| task.day == Some(day)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{calendar_marks, group_by_day, tasks_on};
    use crate::task::Task;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn task(title: &str, date: Option<&str>) -> Task {
        Task {
            title: title.to_string(),
            day: date.map(day),
            done: false,
        }
    }

    #[test]
    fn grouping_collects_same_day_titles_and_drops_undated() {
        let tasks = vec![
            task("A", Some("2024-01-01")),
            task("B", Some("2024-01-01")),
            task("C", None),
        ];

        let groups = group_by_day(&tasks);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].date, day("2024-01-01"));
        assert_eq!(groups[0].titles, vec!["A", "B"]);
    }

    #[test]
    fn grouping_preserves_first_appearance_order_across_days() {
        let tasks = vec![
            task("late", Some("2024-06-20")),
            task("early", Some("2024-06-01")),
            task("late again", Some("2024-06-20")),
        ];

        let groups = group_by_day(&tasks);
        assert_eq!(groups[0].date, day("2024-06-20"));
        assert_eq!(groups[0].titles, vec!["late", "late again"]);
        assert_eq!(groups[1].date, day("2024-06-01"));
    }

    #[test]
    fn marks_can_carry_marked_and_selected_on_one_cell() {
        let groups = group_by_day(&[task("A", Some("2024-01-01"))]);
        let marks = calendar_marks(&groups, Some(day("2024-01-01")));

        let mark = marks[&day("2024-01-01")];
        assert!(mark.marked);
        assert!(mark.selected);
    }

    #[test]
    fn selected_date_without_tasks_is_selected_but_unmarked() {
        let marks = calendar_marks(&[], Some(day("2024-01-02")));
        let mark = marks[&day("2024-01-02")];
        assert!(!mark.marked);
        assert!(mark.selected);
    }

    #[test]
    fn tasks_on_filters_by_exact_date_in_original_order() {
        let tasks = vec![
            task("first", Some("2024-05-05")),
            task("other", Some("2024-05-06")),
            task("second", Some("2024-05-05")),
            task("undated", None),
        ];

        let todays: Vec<&str> = tasks_on(&tasks, day("2024-05-05"))
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(todays, vec!["first", "second"]);
    }
}
