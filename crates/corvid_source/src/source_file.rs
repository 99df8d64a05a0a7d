//! Source file representation with line-start indexing for fast line/column lookup.

use crate::file_id::FileId;
use crate::file_object::{FileKind, FileObject};
use crate::source::DiagnosticSource;
use std::path::PathBuf;

/// Columns a tab advances to when column numbers are computed with tab expansion.
pub const TAB_WIDTH: u32 = 8;

/// A file loaded into the compilation session.
///
/// Stores the file's text along with precomputed line-start offsets for
/// efficient line/column resolution during diagnostic rendering. Class files are
/// loaded without text; every line lookup on them returns `None`.
#[derive(Debug)]
pub struct SourceFile {
    file: FileObject,
    /// The full text content of the file.
    pub content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Creates a `SourceFile` with precomputed line starts.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        let kind = FileKind::from_path(&path);
        let line_starts = compute_line_starts(&content);
        Self {
            file: FileObject::new(id, path, kind),
            content,
            line_starts,
        }
    }

    /// Creates a text-less entry for a compiled class artifact.
    pub fn class_file(id: FileId, path: PathBuf) -> Self {
        Self {
            file: FileObject::new(id, path, FileKind::Class),
            content: String::new(),
            line_starts: Vec::new(),
        }
    }

    /// Returns the index into `line_starts` of the line containing `offset`.
    ///
    /// Uses binary search on the precomputed line-start offsets.
    fn line_index(&self, offset: u32) -> Option<usize> {
        if self.line_starts.is_empty() || offset as usize > self.content.len() {
            return None;
        }
        Some(match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        })
    }

    /// Returns the byte range of line `idx`, excluding its terminator.
    fn line_bounds(&self, idx: usize) -> (usize, usize) {
        let start = self.line_starts[idx] as usize;
        let mut end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.content.len(), |&next| next as usize - 1);
        if self.content[start..end].ends_with('\r') {
            end -= 1;
        }
        (start, end)
    }
}

impl DiagnosticSource for SourceFile {
    fn file(&self) -> &FileObject {
        &self.file
    }

    fn line_number(&self, offset: u32) -> Option<u32> {
        self.line_index(offset).map(|idx| idx as u32 + 1)
    }

    fn column_number(&self, offset: u32, expand_tabs: bool) -> Option<u32> {
        let idx = self.line_index(offset)?;
        let start = self.line_starts[idx] as usize;
        let prefix = self.content.get(start..offset as usize)?;
        let column = prefix.chars().fold(0, |col, c| {
            if c == '\t' && expand_tabs {
                (col / TAB_WIDTH + 1) * TAB_WIDTH
            } else {
                col + 1
            }
        });
        Some(column + 1)
    }

    fn line(&self, offset: u32) -> Option<String> {
        let idx = self.line_index(offset)?;
        let (start, end) = self.line_bounds(idx);
        Some(self.content[start..end].to_string())
    }
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}
