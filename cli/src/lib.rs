// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of the agenda.

mod arg;
mod cli;
mod cmd_event;
mod cmd_file;
mod cmd_generate_completion;
mod cmd_shell;
mod config;
mod event_formatter;
mod table;
mod util;

use std::error::Error;

use tracing_subscriber::EnvFilter;

pub use crate::cli::{Cli, Commands};
pub use crate::cmd_event::{CmdEventAdd, CmdEventClear, CmdEventDelete, CmdEventList};
pub use crate::cmd_file::{CmdLoad, CmdSave};
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::cmd_shell::{CmdShell, ShellAction, ShellFlow, execute};
pub use crate::config::parse_config;
pub use crate::util::OutputFormat;

const AGENDA_LOG_ENV: &str = "AGENDA_LOG";

/// Run the agenda command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                tracing::error!("{e}");
                println!("{}", util::error(e));
            }
        }
        Err(e) => println!("{}", util::error(e)),
    };
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(AGENDA_LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
