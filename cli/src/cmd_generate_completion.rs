// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::{Generator, generate};
use tokio::fs;

use crate::Cli;

/// Completion script for the `agenda` command tree, printed or written to a file.
#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub output: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("completion")
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(arg!(shell: <SHELL> "The shell to complete for").value_parser(value_parser!(Shell)))
            .arg(
                arg!(-o --output [FILE] "Write the script to FILE instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches
                .get_one::<Shell>("shell")
                .copied()
                .expect("shell is required"),
            output: matches.get_one::<PathBuf>("output").cloned(),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        let Some(path) = &self.output else {
            self.shell.write_script(&mut io::stdout());
            return Ok(());
        };

        let mut script = Vec::new();
        self.shell.write_script(&mut script);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, script)
            .await
            .map_err(|e| format!("Failed to write completion to {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), "completion script written");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// Writes the completion script for the full command tree.
    pub fn write_script(self, buf: &mut impl io::Write) {
        use clap_complete::Shell as ClapShell;

        match self {
            Shell::Bash => emit(ClapShell::Bash, buf),
            Shell::Elvish => emit(ClapShell::Elvish, buf),
            Shell::Fish => emit(ClapShell::Fish, buf),
            Shell::PowerShell => emit(ClapShell::PowerShell, buf),
            Shell::Zsh => emit(ClapShell::Zsh, buf),
            Shell::Nushell => emit(clap_complete_nushell::Nushell {}, buf),
        }
    }
}

fn emit(generator: impl Generator, buf: &mut impl io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(generator, &mut cmd, name, buf);
}
