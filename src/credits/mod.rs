//! # Credits Format
//!
//! Line-oriented input: each line either declares an actor (`<a>` marker
//! followed immediately by the display name) or credits the current actor
//! with a movie (`<t>` marker followed immediately by the title). Anything
//! else is noise and parses to `None`.
//!
//! Parsing is a pure function. The reader/builder layer owns I/O, record
//! ordering, and skip accounting.

use crate::model::NodeKind;

/// A well-formed line of the credits format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `<a>Name`: starts a new current-actor context.
    Actor(String),
    /// `<t>Title`: credits the current actor with a movie.
    Title(String),
}

impl Record {
    pub fn kind(&self) -> NodeKind {
        match self {
            Record::Actor(_) => NodeKind::Actor,
            Record::Title(_) => NodeKind::Movie,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Record::Actor(name) | Record::Title(name) => name,
        }
    }
}

/// Parse one line of the credits format.
///
/// Returns `None` for malformed lines: no marker, marker not at the start,
/// or nothing after the marker. Names keep interior and trailing whitespace
/// verbatim; the format's names are exact keys, not prose.
pub fn parse_line(line: &str) -> Option<Record> {
    if let Some(name) = line.strip_prefix(NodeKind::Actor.marker()) {
        if name.is_empty() {
            return None;
        }
        return Some(Record::Actor(name.to_owned()));
    }
    if let Some(title) = line.strip_prefix(NodeKind::Movie.marker()) {
        if title.is_empty() {
            return None;
        }
        return Some(Record::Title(title.to_owned()));
    }
    None
}
