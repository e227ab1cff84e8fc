// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::agenda::{ClearOutcome, Listing};
use crate::io::{read_agenda_file, write_agenda_file};
use crate::{Agenda, AgendaError, Config, Event, ValidationError};

/// Agenda application core.
///
/// Owns the in-memory agenda and, when opened with [`Planner::open`], the
/// backing file it is written back to on [`Planner::close`].
#[derive(Debug, Clone)]
pub struct Planner {
    config: Config,
    agenda: Agenda,
    backing_path: Option<PathBuf>,
    dirty: bool,
}

impl Planner {
    /// Creates a planner over an empty agenda, not bound to any file.
    pub fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        Ok(Self {
            config,
            agenda: Agenda::new(),
            backing_path: None,
            dirty: false,
        })
    }

    /// Creates a planner bound to the configured agenda file, loading it when
    /// it exists.
    pub async fn open(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        let path = config
            .agenda_path
            .clone()
            .ok_or("No agenda path configured")?;

        let mut agenda = Agenda::new();
        let mut dirty = false;
        if fs::try_exists(&path).await? {
            let events = read_agenda_file(&path, config.validate_on_load).await?;
            tracing::debug!(path = %path.display(), count = events.len(), "opened agenda");
            agenda.merge_loaded(events);

            // insert_sorted relies on the agenda being ordered
            if !agenda.is_sorted() {
                tracing::info!(path = %path.display(), "backing file out of order, sorting");
                agenda.sort();
                dirty = true;
            }
        } else {
            tracing::info!(path = %path.display(), "agenda file not found, starting empty");
        }

        Ok(Self {
            config,
            agenda,
            backing_path: Some(path),
            dirty,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    /// The file this planner writes back to, if any.
    pub fn backing_path(&self) -> Option<&Path> {
        self.backing_path.as_deref()
    }

    /// Validates and inserts a new event in order.
    pub fn add_event(
        &mut self,
        date: &str,
        time: &str,
        comment: &str,
    ) -> Result<&Event, ValidationError> {
        let event = Event::with_comment_limit(date, time, comment, self.config.max_comment_len)?;
        tracing::debug!(%event, "adding event");
        self.dirty = true;
        Ok(self.agenda.insert_sorted(event))
    }

    /// Deletes the first event at the given date and time.
    pub fn delete_event(
        &mut self,
        date: &str,
        time: &str,
    ) -> Result<Option<Event>, ValidationError> {
        let deleted = self.agenda.delete(date, time)?;
        match &deleted {
            Some(event) => {
                tracing::debug!(%event, "deleted event");
                self.dirty = true;
            }
            None => tracing::debug!(date, time, "no event to delete"),
        }
        Ok(deleted)
    }

    /// Writes the agenda to `path` in its current order.
    pub async fn save(&self, path: &Path) -> Result<SaveOutcome, AgendaError> {
        if self.agenda.is_empty() {
            return Ok(SaveOutcome::NothingToSave);
        }

        write_agenda_file(path, self.agenda.events()).await?;
        Ok(SaveOutcome::Saved(self.agenda.len()))
    }

    /// Reads `path` and prepends its events to the agenda.
    ///
    /// Nothing is merged when the file cannot be read or parsed.
    pub async fn load(&mut self, path: &Path) -> Result<usize, AgendaError> {
        let events = read_agenda_file(path, self.config.validate_on_load).await?;
        let count = events.len();
        if count > 0 {
            self.agenda.merge_loaded(events);
            self.dirty = true;
        }
        Ok(count)
    }

    /// Sorts the agenda if needed and lists it.
    pub fn display(&mut self) -> Listing<'_> {
        if !self.agenda.is_sorted() {
            self.dirty = true;
        }
        self.agenda.display()
    }

    /// Removes every event.
    pub fn clear(&mut self) -> ClearOutcome {
        let outcome = self.agenda.clear();
        if let ClearOutcome::Cleared(count) = outcome {
            tracing::debug!(count, "agenda cleared");
            self.dirty = true;
        }
        outcome
    }

    /// Writes the agenda back to its backing file if it was changed.
    #[tracing::instrument(skip(self), fields(path = ?self.backing_path))]
    pub async fn close(self) -> Result<(), AgendaError> {
        let Some(path) = self.backing_path else {
            return Ok(());
        };
        if !self.dirty {
            tracing::debug!("agenda unchanged, nothing to write back");
            return Ok(());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| AgendaError::Io {
                    path: parent.to_owned(),
                    source,
                })?;
        }
        write_agenda_file(&path, self.agenda.events()).await
    }
}

/// Result of [`Planner::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// This many events were written.
    Saved(usize),

    /// The agenda is empty, no file was written.
    NothingToSave,
}
