use std::collections::BTreeMap;
use std::io::{self, IsTerminal, Write};

use anyhow::anyhow;
use chrono::{Datelike, NaiveDate};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::Config;
use crate::derive::DayMark;
use crate::note::Note;
use crate::task::Task;
use crate::theme::Theme;

const TITLE_WIDTH: usize = 48;

/// Text renderer for all screens. Color comes from the config, the
/// palette from the persisted theme flag.
#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    dark: bool,
}

impl Renderer {
    pub fn new(cfg: &Config, theme: Theme) -> anyhow::Result<Self> {
        Ok(Self {
            color: cfg.color_enabled()?,
            dark: theme.is_dark(),
        })
    }

    /// Screen title ("Hello, User", "Tasks", ...).
    pub fn heading(&self, text: &str) {
        println!("{}", self.paint(text, "1"));
    }

    /// Card-style section header within a screen.
    pub fn section(&self, text: &str) {
        println!();
        println!("{}", self.paint(text, self.accent_code()));
    }

    pub fn line(&self, text: &str) {
        println!("{text}");
    }

    /// Checkbox row, as the task cards render it.
    pub fn checklist_row(&self, done: bool, title: &str) {
        let marker = if done {
            self.paint("[x]", self.accent_code())
        } else {
            "[ ]".to_string()
        };
        println!("  {marker} {}", truncate(title, TITLE_WIDTH));
    }

    /// Bullet row for the home screen's note titles.
    pub fn bullet_row(&self, title: &str) {
        println!("  - {}", truncate(title, TITLE_WIDTH));
    }

    #[tracing::instrument(skip(self, tasks))]
    pub fn print_task_table(&self, tasks: &[Task]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();

        let headers = vec![
            "#".to_string(),
            "Done".to_string(),
            "Day".to_string(),
            "Title".to_string(),
        ];

        let mut rows = Vec::with_capacity(tasks.len());
        for (index, task) in tasks.iter().enumerate() {
            let index = self.paint(&index.to_string(), "33");
            let done = if task.done { "x" } else { "" }.to_string();
            let day = task
                .day
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            rows.push(vec![index, done, day, truncate(&task.title, TITLE_WIDTH)]);
        }

        write_table(&mut out, headers, rows)?;
        Ok(())
    }

    #[tracing::instrument(skip(self, notes))]
    pub fn print_note_cards(&self, notes: &[Note]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();

        for (index, note) in notes.iter().enumerate() {
            let idx = self.paint(&format!("[{index}]"), "33");
            writeln!(
                out,
                "{idx} {}",
                self.paint(&truncate(&note.title, TITLE_WIDTH), "1")
            )?;
            if !note.content.is_empty() {
                for line in note.content.lines() {
                    writeln!(out, "    {line}")?;
                }
            }
            writeln!(out)?;
        }

        Ok(())
    }

    /// Month grid around the selected date. Marked cells carry a trailing
    /// dot, the selected cell is bracketed; a cell can be both.
    #[tracing::instrument(skip(self, marks))]
    pub fn print_month(
        &self,
        selected: NaiveDate,
        marks: &BTreeMap<NaiveDate, DayMark>,
    ) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();

        let year = selected.year();
        let month = selected.month();
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| anyhow!("invalid month {year}-{month}"))?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(|| anyhow!("invalid month {year}-{month}"))?;
        let days = next_first.signed_duration_since(first).num_days();

        writeln!(out, "{:^35}", first.format("%B %Y").to_string())?;
        writeln!(out, " Su   Mo   Tu   We   Th   Fr   Sa")?;

        let offset = first.weekday().num_days_from_sunday() as usize;
        let mut column = offset;
        write!(out, "{}", "     ".repeat(offset))?;

        for day in 1..=days {
            let date = first + chrono::Duration::days(day - 1);
            let mark = marks.get(&date).copied().unwrap_or_default();

            let mut cell = if mark.selected {
                format!("[{day:>2}]")
            } else {
                format!(" {day:>2} ")
            };
            if mark.marked {
                cell.push('*');
            } else {
                cell.push(' ');
            }

            let cell = if mark.selected {
                self.paint(&cell, self.accent_code())
            } else if mark.marked {
                self.paint(&cell, "33")
            } else {
                cell
            };
            write!(out, "{cell}")?;

            column += 1;
            if column == 7 {
                writeln!(out)?;
                column = 0;
            }
        }
        if column != 0 {
            writeln!(out)?;
        }

        Ok(())
    }

    fn accent_code(&self) -> &'static str {
        // Bright blue reads better on dark terminals.
        if self.dark { "94" } else { "34" }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color || !io::stdout().is_terminal() {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

fn truncate(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}

fn write_table<W: Write>(
    mut writer: W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    for idx in 0..column_count {
        write!(writer, "{:width$} ", headers[idx], width = widths[idx])?;
    }
    writeln!(writer)?;

    for idx in 0..column_count {
        write!(writer, "{:-<width$} ", "", width = widths[idx])?;
    }
    writeln!(writer)?;

    for row in rows {
        for idx in 0..column_count {
            let cell = &row[idx];
            let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
            let padding = widths[idx].saturating_sub(visible_width);
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_leaves_short_titles_alone() {
        assert_eq!(truncate("Buy milk", 48), "Buy milk");
    }

    #[test]
    fn truncate_appends_an_ellipsis_within_budget() {
        let long = "a".repeat(60);
        let cut = truncate(&long, 10);
        assert!(cut.ends_with('…'));
        assert!(unicode_width::UnicodeWidthStr::width(cut.as_str()) <= 10);
    }
}
