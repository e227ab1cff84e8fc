// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use tokio::fs;

use crate::validate::{is_valid_date, is_valid_time};
use crate::{AgendaError, Event, ParseError, ValidationError};

/// Parses agenda records, one `date time comment` per line.
///
/// Blank lines are skipped. When `validate` is set, dates and times must also
/// pass the validators.
pub fn parse_records(content: &str, validate: bool) -> Result<Vec<Event>, ParseError> {
    let mut events = Vec::new();
    let mut rest = content;
    let mut line_no = 0;

    while !rest.is_empty() {
        line_no += 1;
        let (line, terminated) = match rest.split_once('\n') {
            Some((line, next)) => {
                rest = next;
                (line, true)
            }
            None => (std::mem::take(&mut rest), false),
        };
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(event) = parse_record(line, terminated, line_no, validate)? {
            events.push(event);
        }
    }

    Ok(events)
}

fn parse_record(
    line: &str,
    terminated: bool,
    line_no: usize,
    validate: bool,
) -> Result<Option<Event>, ParseError> {
    let line = line.trim_start();
    if line.is_empty() {
        return Ok(None);
    }

    let (date, rest) = split_token(line);
    let rest = rest.trim_start();
    if rest.is_empty() {
        return Err(ParseError::MissingTime { line: line_no });
    }

    let (time, rest) = split_token(rest);
    if rest.is_empty() && !terminated {
        return Err(ParseError::MissingComment { line: line_no });
    }

    if validate {
        let invalid = if !is_valid_date(date) {
            Some(ValidationError::Date(date.to_string()))
        } else if !is_valid_time(time) {
            Some(ValidationError::Time(time.to_string()))
        } else {
            None
        };
        if let Some(source) = invalid {
            return Err(ParseError::InvalidRecord {
                line: line_no,
                source,
            });
        }
    }

    // drop the single separator after the time, the rest is the comment
    let mut chars = rest.chars();
    chars.next();
    Ok(Some(Event::from_record(date, time, chars.as_str())))
}

fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(i) => s.split_at(i),
        None => (s, ""),
    }
}

/// Formats events as agenda records, in the given order.
pub fn format_records<'a>(events: impl IntoIterator<Item = &'a Event>) -> String {
    events
        .into_iter()
        .map(|event| format!("{event}\n"))
        .collect()
}

/// Reads and parses an agenda file.
#[tracing::instrument]
pub async fn read_agenda_file(path: &Path, validate: bool) -> Result<Vec<Event>, AgendaError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| AgendaError::Io {
            path: path.to_owned(),
            source,
        })?;

    let events = parse_records(&content, validate).map_err(|source| AgendaError::Parse {
        path: path.to_owned(),
        source,
    })?;

    for event in &events {
        tracing::debug!(date = event.date(), time = event.time(), comment = event.comment(), "loaded");
    }
    Ok(events)
}

/// Writes events to an agenda file, replacing its content.
#[tracing::instrument(skip(events))]
pub async fn write_agenda_file(path: &Path, events: &[Event]) -> Result<(), AgendaError> {
    fs::write(path, format_records(events))
        .await
        .map_err(|source| AgendaError::Io {
            path: path.to_owned(),
            source,
        })?;

    tracing::debug!(count = events.len(), "agenda file written");
    Ok(())
}
