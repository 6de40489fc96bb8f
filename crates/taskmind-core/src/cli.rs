use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "taskmind",
    version,
    about = "TaskMind: local tasks, notes and calendar in the terminal",
    disable_help_subcommand = true
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Path to the config file (default: ~/.config/taskmind/config.toml).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Data directory holding the per-key JSON files.
    #[arg(long = "data")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub screen: Option<Screen>,
}

/// One subcommand per screen; without one, home is shown.
#[derive(Subcommand, Debug, Clone)]
pub enum Screen {
    /// Greeting, today's and tomorrow's tasks, recent notes.
    Home,

    /// The full task list and its mutations.
    Tasks {
        #[command(subcommand)]
        action: Option<TaskAction>,
    },

    /// The note list and its mutations.
    Notes {
        #[command(subcommand)]
        action: Option<NoteAction>,
    },

    /// Month view with marked days and the selected day's tasks.
    Calendar {
        /// Selected date, YYYY-MM-DD (default: today).
        #[arg(long = "date")]
        date: Option<NaiveDate>,
    },

    /// Profile name and the dark-mode toggle.
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TaskAction {
    /// List all tasks with their positional indices.
    List,

    /// Add a task to the front of the list.
    Add {
        title: Option<String>,

        /// Due day, YYYY-MM-DD.
        #[arg(long = "day")]
        day: Option<NaiveDate>,
    },

    /// Mark the task at INDEX as completed.
    Done { index: usize },

    /// Clear the completion flag of the task at INDEX.
    Undone { index: usize },

    /// Remove the task at INDEX.
    Rm { index: usize },
}

#[derive(Subcommand, Debug, Clone)]
pub enum NoteAction {
    /// List all notes with their positional indices.
    List,

    /// Add a note to the front of the list.
    Add {
        title: Option<String>,

        #[arg(long = "content")]
        content: Option<String>,
    },

    /// Remove the note at INDEX.
    Rm { index: usize },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProfileAction {
    /// Show the profile name and the current theme.
    Show,

    /// Set the profile name.
    Name { name: String },

    /// Toggle between light and dark mode.
    Theme,
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
