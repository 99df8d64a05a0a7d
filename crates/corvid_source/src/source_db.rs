//! Central database of all files in a compilation session.

use crate::file_id::FileId;
use crate::source_file::SourceFile;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The source database, owning all loaded files.
///
/// Files are handed out as shared [`Arc<SourceFile>`] handles so diagnostics can
/// keep looking lines up after the database has moved on to other files.
pub struct SourceDb {
    files: Vec<Arc<SourceFile>>,
}

impl SourceDb {
    /// Creates an empty source database.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Loads a source file from the filesystem and returns its [`FileId`].
    pub fn load_file(&mut self, path: &Path) -> Result<FileId, io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(self.push(|id| SourceFile::new(id, path.to_path_buf(), content)))
    }

    /// Adds a source file from an in-memory string.
    ///
    /// The `name` parameter is used as the file path in diagnostics.
    pub fn add_source(&mut self, name: impl Into<PathBuf>, content: impl Into<String>) -> FileId {
        let (name, content) = (name.into(), content.into());
        self.push(|id| SourceFile::new(id, name, content))
    }

    /// Registers a compiled class artifact, which has no source text.
    pub fn add_class_file(&mut self, path: impl Into<PathBuf>) -> FileId {
        let path = path.into();
        self.push(|id| SourceFile::class_file(id, path))
    }

    /// Returns the [`SourceFile`] for the given [`FileId`].
    ///
    /// # Panics
    ///
    /// Panics if the `FileId` was not issued by this database.
    pub fn get_file(&self, id: FileId) -> &Arc<SourceFile> {
        &self.files[id.as_raw() as usize]
    }

    /// Returns the number of loaded files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no files have been loaded.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn push(&mut self, make: impl FnOnce(FileId) -> SourceFile) -> FileId {
        let id = FileId::from_raw(self.files.len() as u32);
        self.files.push(Arc::new(make(id)));
        id
    }
}

impl Default for SourceDb {
    fn default() -> Self {
        Self::new()
    }
}
