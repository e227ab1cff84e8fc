// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::slice;

use crate::validate::{is_valid_date, is_valid_time};
use crate::{Event, ValidationError};

/// Ordered collection of events, sorted by `(date, time)`.
///
/// Events sharing a key keep the order they were inserted in. The only way to
/// break the ordering is [`Agenda::merge_loaded`]; [`Agenda::display`]
/// restores it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Agenda {
    events: Vec<Event>,
}

impl Agenda {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The events in their current order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Inserts the event before the first event with a strictly greater key,
    /// so it lands after any event sharing its key.
    pub fn insert_sorted(&mut self, event: Event) -> &Event {
        let index = self
            .events
            .iter()
            .position(|e| e.cmp_key(&event).is_gt())
            .unwrap_or(self.events.len());

        self.events.insert(index, event);
        &self.events[index]
    }

    /// Removes the first event scheduled at `date` and `time`.
    ///
    /// Returns `Ok(None)` when no event matches. Both strings are validated
    /// before the agenda is searched.
    pub fn delete(&mut self, date: &str, time: &str) -> Result<Option<Event>, ValidationError> {
        if !is_valid_date(date) {
            return Err(ValidationError::Date(date.to_string()));
        }
        if !is_valid_time(time) {
            return Err(ValidationError::Time(time.to_string()));
        }

        Ok(self
            .events
            .iter()
            .position(|e| e.is_at(date, time))
            .map(|index| self.events.remove(index)))
    }

    /// Whether every event is ordered after the one before it.
    pub fn is_sorted(&self) -> bool {
        self.events.windows(2).all(|w| w[0].cmp_key(&w[1]).is_le())
    }

    /// Stable sort by `(date, time)`.
    pub fn sort(&mut self) {
        self.events.sort_by(Event::cmp_key);
    }

    /// Prepends freshly loaded events, in their given order, without sorting.
    pub fn merge_loaded(&mut self, loaded: Vec<Event>) {
        if loaded.is_empty() {
            return;
        }
        self.events.splice(0..0, loaded);
    }

    /// Sorts the agenda if needed and returns a listing of its events.
    pub fn display(&mut self) -> Listing<'_> {
        let resorted = !self.is_sorted();
        if resorted {
            tracing::debug!(count = self.events.len(), "agenda out of order, sorting");
            self.sort();
        }

        Listing {
            events: &self.events,
            resorted,
        }
    }

    /// Releases every event.
    pub fn clear(&mut self) -> ClearOutcome {
        if self.events.is_empty() {
            return ClearOutcome::AlreadyEmpty;
        }

        let count = self.events.len();
        self.events.clear();
        ClearOutcome::Cleared(count)
    }
}

impl<'a> IntoIterator for &'a Agenda {
    type Item = &'a Event;
    type IntoIter = slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Event> for Agenda {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut agenda = Agenda::new();
        for event in iter {
            agenda.insert_sorted(event);
        }
        agenda
    }
}

/// A sorted view of the agenda, produced by [`Agenda::display`].
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    events: &'a [Event],
    resorted: bool,
}

impl<'a> Listing<'a> {
    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether the agenda had to be sorted before listing.
    pub fn resorted(&self) -> bool {
        self.resorted
    }

    pub fn events(&self) -> &'a [Event] {
        self.events
    }

    /// Formatted `date time comment` lines, produced on demand.
    pub fn lines(self) -> impl Iterator<Item = String> + 'a {
        self.events.iter().map(Event::to_string)
    }
}

/// Result of [`Agenda::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// This many events were released.
    Cleared(usize),

    /// There was nothing to release.
    AlreadyEmpty,
}
