// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Agenda core: validated events kept sorted by date and time, with a plain
//! text file format to save and merge-load them.

mod agenda;
mod config;
mod error;
mod event;
mod io;
mod planner;
mod validate;

pub use crate::agenda::{Agenda, ClearOutcome, Listing};
pub use crate::config::{AGENDA_FILE_NAME, APP_NAME, Config};
pub use crate::error::{AgendaError, ParseError, ValidationError};
pub use crate::event::{DEFAULT_MAX_COMMENT_LEN, Event};
pub use crate::io::{format_records, parse_records, read_agenda_file, write_agenda_file};
pub use crate::planner::{Planner, SaveOutcome};
pub use crate::validate::{is_valid_date, is_valid_time};
