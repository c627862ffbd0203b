use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// A revision number in a walked history.
///
/// Revision numbers are dense non-negative integers assigned in topological
/// order: a parent always carries a smaller number than any of its children.
/// A backward walk therefore visits revisions in strictly decreasing numeric
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u64);

impl Revision {
    pub const fn new(number: u64) -> Self {
        Revision(number)
    }

    pub const fn number(self) -> u64 {
        self.0
    }
}

impl From<u64> for Revision {
    fn from(number: u64) -> Self {
        Revision(number)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Revision {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Revision(s.parse()?))
    }
}

/// Walk bounds that were rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid revision range: start {start} is below stop {stop}")]
pub struct InvalidRangeError {
    pub start: Revision,
    pub stop: Revision,
}

/// Inclusive walk bounds, from `start` down to `stop`.
///
/// Both ends are visited. Every revision number in between produces a row,
/// whether or not anything in the graph references it, so the number of rows
/// a walk yields is known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionRange {
    start: Revision,
    stop: Revision,
}

impl RevisionRange {
    /// Validates the bounds. `start` must not be below `stop`; a range where
    /// the two coincide is fine and covers exactly one revision.
    pub fn new(start: Revision, stop: Revision) -> Result<Self, InvalidRangeError> {
        if start < stop {
            return Err(InvalidRangeError { start, stop });
        }

        Ok(RevisionRange { start, stop })
    }

    pub fn start(&self) -> Revision {
        self.start
    }

    pub fn stop(&self) -> Revision {
        self.stop
    }

    /// Number of rows a full walk over this range yields.
    pub fn row_count(&self) -> u64 {
        self.start.number() - self.stop.number() + 1
    }
}
