//! Separation — the answer to a distance query.

use serde::{Deserialize, Serialize};

/// Outcome of asking how far an actor is from the reference actor.
///
/// "Not found" and "unreachable" are ordinary answers, not errors: a query
/// against a built graph cannot fail on account of the queried name's
/// connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Separation {
    /// The name is not an actor in the loaded data.
    NotFound,
    /// The actor exists but no chain connects it to the reference actor.
    Unreachable,
    /// Bacon number: costarring links on the shortest chain.
    Degrees(u32),
}

impl Separation {
    pub fn is_found(&self) -> bool {
        !matches!(self, Separation::NotFound)
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Separation::Degrees(_))
    }

    /// Extract the Bacon number, if one exists.
    pub fn degrees(&self) -> Option<u32> {
        match self {
            Separation::Degrees(n) => Some(*n),
            _ => None,
        }
    }
}
