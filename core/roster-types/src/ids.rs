//! Identifier types used throughout the roster service.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a user record.
///
/// Issued by the registry starting at 1 and strictly increasing in
/// assignment order. Signed so that any 64-bit id a client sends can be
/// looked up (and simply not found) rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// The first id a fresh registry hands out.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw id value.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the id that follows this one.
    ///
    /// Ids are issued one per create, so `i64::MAX` is never reached in
    /// practice. Stepping past it panics instead of wrapping to a reused id.
    #[must_use]
    pub const fn next(self) -> Self {
        match self.0.checked_add(1) {
            Some(raw) => Self(raw),
            None => panic!("user id space exhausted"),
        }
    }
}

impl From<i64> for UserId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
