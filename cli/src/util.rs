// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

use colored::Colorize;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Formats a notice, something worth telling the user that is not an error.
pub fn notice(msg: impl Display) -> String {
    msg.to_string().italic().to_string()
}

/// Formats an error message with a red `Error:` prefix.
pub fn error(err: impl Display) -> String {
    format!("{} {}", "Error:".red(), err)
}
