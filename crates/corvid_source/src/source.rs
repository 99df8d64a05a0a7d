//! The lookup contract between diagnostics and the files they point into.

use crate::file_object::FileObject;
use std::fmt;

/// A file being compiled, as seen by the diagnostic layer.
///
/// Offsets are byte offsets into the file. Lines and columns are 1-based. Every
/// lookup returns `None` instead of failing when the offset cannot be mapped
/// (out of range, not on a character boundary, or no text available).
pub trait DiagnosticSource: fmt::Debug + Send + Sync {
    /// The file handle, used for naming and identity.
    fn file(&self) -> &FileObject;

    /// The full file name.
    fn name(&self) -> String {
        self.file().name()
    }

    /// The line containing `offset`.
    fn line_number(&self, offset: u32) -> Option<u32>;

    /// The column of `offset` within its line. With `expand_tabs`, a tab advances
    /// to the next multiple of the tab width.
    fn column_number(&self, offset: u32, expand_tabs: bool) -> Option<u32>;

    /// The text of the line containing `offset`, without its terminator.
    fn line(&self, offset: u32) -> Option<String>;
}
