use std::{
    fmt::Display,
    mem,
};

use itertools::Itertools;

/// A battle event that is added to the [`EventLog`].
///
/// This object should not be constructed directly. Instead, use the
/// [`log_event`][`crate::log_event`] macro.
pub struct Event(pub(crate) String);

impl Event {
    pub fn from_parts(parts: &[&dyn Display]) -> Self {
        Self(parts.iter().map(|part| part.to_string()).join("|"))
    }
}

/// Constructs an [`Event`] to be added to the [`EventLog`].
///
/// This macro enforces a common format for all entries in the event log.
#[macro_export]
macro_rules! log_event {
    ($($arg:expr),* $(,)?) => {{
        $crate::log::Event::from_parts(&[$(&$arg),*])
    }};
}

/// A log of battle events that can be exported.
///
/// The engine never models time or animation; the presentation layer reads
/// events out incrementally and sequences its own delays around them.
pub struct EventLog {
    entries: Vec<String>,
    last_read: usize,
}

impl EventLog {
    /// Creates a new event log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            last_read: 0,
        }
    }

    /// Does the log contain new entries since the last call to
    /// [`Self::read_out`]?
    pub fn has_new_entries(&self) -> bool {
        self.last_read < self.entries.len()
    }

    /// Pushes a new event to the log.
    pub fn push(&mut self, event: Event) {
        self.entries.push(event.0)
    }

    /// Returns an iterator over all entries.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    /// Reads out any new entries that have been added since the last call to
    /// [`Self::read_out`].
    pub fn read_out(&mut self) -> impl Iterator<Item = &str> {
        let i = mem::replace(&mut self.last_read, self.entries.len());
        self.entries[i..].iter().map(|s| s.as_str())
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod event_log_test {
    use crate::log::EventLog;

    #[test]
    fn formats_events() {
        let mut log = EventLog::new();
        log.push(log_event!("attack", "player"));
        log.push(log_event!("damage", 14u64));
        assert_eq!(
            log.entries().collect::<Vec<_>>(),
            vec!["attack|player", "damage|14"],
        );
    }

    #[test]
    fn reads_out_incrementally() {
        let mut log = EventLog::new();
        log.push(log_event!("a"));
        log.push(log_event!("b"));
        assert!(log.has_new_entries());
        assert_eq!(log.read_out().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(!log.has_new_entries());
        log.push(log_event!("c"));
        assert_eq!(log.read_out().collect::<Vec<_>>(), vec!["c"]);
        assert_eq!(log.entries().count(), 3);
    }
}
