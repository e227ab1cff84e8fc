// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use agenda_core::{
    APP_NAME, ClearOutcome, Config as CoreConfig, Planner, SaveOutcome, ValidationError,
};
use clap::{ArgMatches, Command};
use cliclack::{input, intro, select};

use crate::event_formatter::EventFormatter;
use crate::util::{error, notice};

/// Interactive menu over a fresh, empty agenda.
///
/// Nothing is read or written unless the user asks to load or save.
#[derive(Debug, Clone, Copy)]
pub struct CmdShell;

impl CmdShell {
    pub const NAME: &str = "shell";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Manage an agenda through an interactive menu")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, config: CoreConfig) -> Result<(), Box<dyn Error>> {
        tracing::debug!("starting interactive shell...");
        let mut planner = Planner::new(config)?;
        let mut stdout = io::stdout();

        intro(APP_NAME)?;
        loop {
            let action = match prompt_action(&planner, &mut stdout) {
                Ok(Some(action)) => action,
                Ok(None) => continue,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => ShellAction::Quit,
                Err(e) => return Err(e.into()),
            };

            match execute(&mut planner, action, &mut stdout).await {
                Ok(ShellFlow::Continue) => {}
                Ok(ShellFlow::Quit) => break,
                Err(e) => {
                    tracing::error!("{e}");
                    writeln!(stdout, "{}", error(e))?;
                }
            }
        }
        Ok(())
    }
}

/// One menu entry with its inputs already collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Add {
        date: String,
        time: String,
        comment: String,
    },
    Delete {
        date: String,
        time: String,
    },
    Save(PathBuf),
    Load(PathBuf),
    Display,
    Clear,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Add,
    Delete,
    Save,
    Load,
    Display,
    Clear,
    Quit,
}

/// Runs one action against the planner, writing what the user should see.
///
/// Rejected dates and times are reported and the shell keeps going. File
/// errors are returned.
pub async fn execute(
    planner: &mut Planner,
    action: ShellAction,
    out: &mut impl Write,
) -> Result<ShellFlow, Box<dyn Error>> {
    match action {
        ShellAction::Add {
            date,
            time,
            comment,
        } => match planner.add_event(&date, &time, &comment) {
            Ok(_) => writeln!(out, "{}", notice("Event added successfully."))?,
            Err(e) => writeln!(out, "{}. Event not added.", rejected(&e))?,
        },

        ShellAction::Delete { date, time } => {
            if planner.agenda().is_empty() {
                writeln!(out, "{}", notice("Agenda is empty."))?;
                return Ok(ShellFlow::Continue);
            }
            match planner.delete_event(&date, &time) {
                Ok(Some(_)) => writeln!(out, "{}", notice("Event deleted successfully."))?,
                Ok(None) => writeln!(out, "{}", notice("Event not found."))?,
                Err(e) => writeln!(out, "{}. Event not deleted.", rejected(&e))?,
            }
        }

        ShellAction::Save(path) => match planner.save(&path).await? {
            SaveOutcome::Saved(_) => writeln!(out, "{}", notice("Agenda saved successfully."))?,
            SaveOutcome::NothingToSave => {
                writeln!(out, "{}", notice("Agenda is empty. Nothing to save."))?
            }
        },

        ShellAction::Load(path) => {
            let count = planner.load(&path).await?;
            let msg = format!("Agenda loaded successfully, {count} events merged.");
            writeln!(out, "{}", notice(msg))?;
        }

        ShellAction::Display => {
            let listing = planner.display();
            if listing.is_empty() {
                writeln!(out, "{}", notice("Agenda is empty."))?;
                return Ok(ShellFlow::Continue);
            }
            if listing.resorted() {
                writeln!(out, "{}", notice("Sorting agenda..."))?;
            }

            let formatter = EventFormatter::new();
            writeln!(out, "\nAgenda:")?;
            writeln!(out, "{}", formatter.format(listing.events()))?;
        }

        ShellAction::Clear => match planner.clear() {
            ClearOutcome::Cleared(_) => {
                writeln!(out, "{}", notice("Agenda freed. All events deleted."))?
            }
            ClearOutcome::AlreadyEmpty => {
                writeln!(out, "{}", notice("Agenda is already empty. Nothing to delete."))?
            }
        },

        ShellAction::Quit => {
            writeln!(out, "{}", notice("Exiting the agenda. Goodbye!"))?;
            return Ok(ShellFlow::Quit);
        }
    }
    Ok(ShellFlow::Continue)
}

fn rejected(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::Date(_) => "Invalid date format",
        ValidationError::Time(_) => "Invalid time format",
    }
}

/// Shows the menu and collects the inputs of the chosen entry.
///
/// Returns `None` when the entry has nothing to act on.
fn prompt_action(planner: &Planner, out: &mut impl Write) -> io::Result<Option<ShellAction>> {
    let item = select("What would you like to do?")
        .item(MenuItem::Add, "Add an event", "")
        .item(MenuItem::Delete, "Delete an event", "")
        .item(MenuItem::Save, "Save agenda", "")
        .item(MenuItem::Load, "Load agenda", "")
        .item(MenuItem::Display, "Display agenda", "")
        .item(MenuItem::Clear, "Free agenda", "delete all events")
        .item(MenuItem::Quit, "Quit", "")
        .interact()?;

    let action = match item {
        MenuItem::Add => ShellAction::Add {
            date: prompt_date("Enter date (YYYY-MM-DD):")?,
            time: prompt_time("Enter time (HH:MM):")?,
            comment: input("Enter comment:").required(false).interact()?,
        },

        MenuItem::Delete if planner.agenda().is_empty() => {
            writeln!(out, "{}", notice("Agenda is empty."))?;
            return Ok(None);
        }
        MenuItem::Delete => ShellAction::Delete {
            date: prompt_date("Enter date (YYYY-MM-DD) of the event to delete:")?,
            time: prompt_time("Enter time (HH:MM) of the event to delete:")?,
        },

        MenuItem::Save if planner.agenda().is_empty() => {
            writeln!(out, "{}", notice("Agenda is empty. Nothing to save."))?;
            return Ok(None);
        }
        MenuItem::Save => ShellAction::Save(prompt_path("Enter the filename to save the agenda:")?),
        MenuItem::Load => ShellAction::Load(prompt_path("Enter the filename to load the agenda:")?),
        MenuItem::Display => ShellAction::Display,
        MenuItem::Clear => ShellAction::Clear,
        MenuItem::Quit => ShellAction::Quit,
    };
    Ok(Some(action))
}

fn prompt_date(prompt: &str) -> io::Result<String> {
    input(prompt).placeholder("2024-01-05").interact()
}

fn prompt_time(prompt: &str) -> io::Result<String> {
    input(prompt).placeholder("14:30").interact()
}

fn prompt_path(prompt: &str) -> io::Result<PathBuf> {
    let path: String = input(prompt).placeholder("agenda.txt").interact()?;
    Ok(PathBuf::from(path))
}
