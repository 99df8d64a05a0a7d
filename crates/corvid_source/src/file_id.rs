//! Opaque identifier for files loaded into a compilation session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a file loaded into the [`SourceDb`](crate::SourceDb).
///
/// Two diagnostics refer to the same file exactly when their `FileId`s are equal,
/// which is what duplicate suppression keys on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct FileId(u32);

impl FileId {
    /// Creates a `FileId` from a raw `u32` value.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw `u32` value of this `FileId`.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}
