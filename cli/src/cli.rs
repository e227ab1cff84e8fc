// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use agenda_core::{APP_NAME, Planner};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use futures::{FutureExt, future::BoxFuture};

use crate::cmd_event::{CmdEventAdd, CmdEventClear, CmdEventDelete, CmdEventList};
use crate::cmd_file::{CmdLoad, CmdSave};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_shell::CmdShell;
use crate::config::parse_config;

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Path to the agenda file, overriding the configured one
    pub agenda: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Keep your events sorted by date and time.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to shell
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/agenda/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/agenda/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(-a --agenda [AGENDA] "Path to the agenda file")
                    .long_help(
                        "\
Path to the agenda file read and written back by one-shot commands. Overrides `agenda_path` \
in the configuration file.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .subcommand(CmdShell::command())
            .subcommand(CmdEventAdd::command())
            .subcommand(CmdEventDelete::command())
            .subcommand(CmdEventList::command())
            .subcommand(CmdEventClear::command())
            .subcommand(CmdSave::command())
            .subcommand(CmdLoad::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let (command, sub_matches) = match matches.subcommand() {
            Some((CmdShell::NAME, m)) => (Shell(CmdShell::from(m)), m),
            Some((CmdEventAdd::NAME, m)) => (Add(CmdEventAdd::from(m)), m),
            Some((CmdEventDelete::NAME, m)) => (Delete(CmdEventDelete::from(m)), m),
            Some((CmdEventList::NAME, m)) => (List(CmdEventList::from(m)), m),
            Some((CmdEventClear::NAME, m)) => (Clear(CmdEventClear::from(m)), m),
            Some((CmdSave::NAME, m)) => (Save(CmdSave::from(m)), m),
            Some((CmdLoad::NAME, m)) => (Load(CmdLoad::from(m)), m),
            Some((CmdGenerateCompletion::NAME, m)) => {
                (GenerateCompletion(CmdGenerateCompletion::from(m)), m)
            }
            None => (Shell(CmdShell), &matches),
            _ => unreachable!(),
        };

        // global args are propagated to the subcommand matches
        let config = sub_matches.get_one("config").cloned();
        let agenda = sub_matches.get_one("agenda").cloned();
        Ok(Cli {
            config,
            agenda,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.agenda).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Interactive menu over an empty agenda
    Shell(CmdShell),

    /// Add an event
    Add(CmdEventAdd),

    /// Delete an event
    Delete(CmdEventDelete),

    /// List events
    List(CmdEventList),

    /// Delete every event
    Clear(CmdEventClear),

    /// Export the agenda to a file
    Save(CmdSave),

    /// Merge a file into the agenda
    Load(CmdLoad),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(
        self,
        config: Option<PathBuf>,
        agenda: Option<PathBuf>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Shell(a)  => a.run(Self::load_config(config, agenda).await?).await,
            Add(a)    => Self::run_with(config, agenda, |x| a.run(x).boxed()).await,
            Delete(a) => Self::run_with(config, agenda, |x| a.run(x).boxed()).await,
            List(a)   => Self::run_with(config, agenda, |x| a.run(x).boxed()).await,
            Clear(a)  => Self::run_with(config, agenda, |x| a.run(x).boxed()).await,
            Save(a)   => Self::run_with(config, agenda, |x| a.run(x).boxed()).await,
            Load(a)   => Self::run_with(config, agenda, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run().await,
        }
    }

    async fn load_config(
        config: Option<PathBuf>,
        agenda: Option<PathBuf>,
    ) -> Result<agenda_core::Config, Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let mut core_config = parse_config(config).await?;
        if let Some(agenda) = agenda {
            core_config.agenda_path = Some(agenda);
        }
        Ok(core_config)
    }

    async fn run_with<F>(
        config: Option<PathBuf>,
        agenda: Option<PathBuf>,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Planner) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        let core_config = Self::load_config(config, agenda).await?;
        let mut planner = Planner::open(core_config).await?;

        f(&mut planner).await?;

        planner.close().await?;
        Ok(())
    }
}
