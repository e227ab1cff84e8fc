// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use agenda_core::{Planner, SaveOutcome};
use clap::{ArgMatches, Command};

use crate::arg::CommonArgs;
use crate::util::notice;

#[derive(Debug, Clone)]
pub struct CmdSave {
    pub path: PathBuf,
}

impl CmdSave {
    pub const NAME: &str = "save";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Export the agenda to a file, in its current order")
            .arg(CommonArgs::file())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            path: CommonArgs::get_file(matches),
        }
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "saving agenda...");
        let msg = match planner.save(&self.path).await? {
            SaveOutcome::Saved(count) => {
                format!("Saved {count} events to {}", self.path.display())
            }
            SaveOutcome::NothingToSave => "Agenda is empty, nothing to save".to_string(),
        };
        println!("{}", notice(msg));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdLoad {
    pub path: PathBuf,
}

impl CmdLoad {
    pub const NAME: &str = "load";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Merge the events of a file into the agenda")
            .arg(CommonArgs::file())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            path: CommonArgs::get_file(matches),
        }
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "loading agenda...");
        let count = planner.load(&self.path).await?;
        let msg = format!("Loaded {count} events from {}", self.path.display());
        println!("{}", notice(msg));
        Ok(())
    }
}
