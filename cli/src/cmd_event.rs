// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use agenda_core::{ClearOutcome, Event, Planner};
use clap::{ArgMatches, Command};

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::EventFormatter;
use crate::util::{OutputFormat, notice};

#[derive(Debug, Clone)]
pub struct CmdEventAdd {
    pub date: String,
    pub time: String,
    pub comment: String,
    pub output_format: OutputFormat,
}

impl CmdEventAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add an event to the agenda")
            .arg(EventArgs::date())
            .arg(EventArgs::time())
            .arg(EventArgs::comment())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: EventArgs::get_date(matches),
            time: EventArgs::get_time(matches),
            comment: EventArgs::get_comment(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding event...");
        let event = planner.add_event(&self.date, &self.time, &self.comment)?;
        print_events(std::slice::from_ref(event), self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub date: String,
    pub time: String,
    pub output_format: OutputFormat,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete the first event at the given date and time")
            .arg(EventArgs::date())
            .arg(EventArgs::time())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: EventArgs::get_date(matches),
            time: EventArgs::get_time(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        match planner.delete_event(&self.date, &self.time)? {
            Some(event) => print_events(&[event], self.output_format),
            None => {
                let msg = format!("No event found at {} {}", self.date, self.time);
                println!("{}", notice(msg));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventList {
    pub output_format: OutputFormat,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the agenda sorted by date and time")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let listing = planner.display();
        if listing.resorted() {
            tracing::info!("agenda was out of order, sorted before listing");
        }

        if listing.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", notice("Agenda is empty"));
            return Ok(());
        }

        print_events(listing.events(), self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventClear;

impl CmdEventClear {
    pub const NAME: &str = "clear";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Delete every event in the agenda")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!("clearing agenda...");
        let msg = match planner.clear() {
            ClearOutcome::Cleared(count) => format!("Agenda cleared, {count} events deleted"),
            ClearOutcome::AlreadyEmpty => "Agenda is already empty".to_string(),
        };
        println!("{}", notice(msg));
        Ok(())
    }
}

fn print_events(events: &[Event], output_format: OutputFormat) {
    let formatter = EventFormatter::new().with_output_format(output_format);
    print!("{}", formatter.format(events));
    if output_format == OutputFormat::Json {
        println!();
    }
}
