// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn file() -> Arg {
        arg!(file: <FILE> "Path to the agenda file")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_file(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("file")
            .expect("file is required")
            .clone()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn date() -> Arg {
        arg!(date: <DATE> "Date of the event, as YYYY-MM-DD")
    }

    pub fn get_date(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("date")
            .expect("date is required")
            .clone()
    }

    pub fn time() -> Arg {
        arg!(time: <TIME> "Time of the event, as HH:MM")
    }

    pub fn get_time(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("time")
            .expect("time is required")
            .clone()
    }

    pub fn comment() -> Arg {
        Arg::new("comment")
            .value_name("COMMENT")
            .help("Comment of the event, the remaining words are joined with spaces")
            .num_args(0..)
            .allow_hyphen_values(true)
    }

    pub fn get_comment(matches: &ArgMatches) -> String {
        matches
            .get_many::<String>("comment")
            .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }
}
