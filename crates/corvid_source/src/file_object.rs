//! Handles describing the files that diagnostics point into.

use crate::file_id::FileId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What a file contains, which decides how an unpositioned diagnostic in it is laid out.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileKind {
    /// Program text written by the user.
    Source,
    /// A compiled class artifact; it has no source lines.
    Class,
    /// Anything else (standard input, generated buffers).
    Other,
}

impl FileKind {
    /// Infers the kind from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("class") => FileKind::Class,
            Some(_) => FileKind::Source,
            None => FileKind::Other,
        }
    }
}

/// Identity, path and kind of a file known to the session.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FileObject {
    id: FileId,
    path: PathBuf,
    kind: FileKind,
}

impl FileObject {
    /// Creates a file handle.
    pub fn new(id: FileId, path: impl Into<PathBuf>, kind: FileKind) -> Self {
        Self {
            id,
            path: path.into(),
            kind,
        }
    }

    /// Returns the session-unique identifier.
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Returns the path the file was loaded from (or its synthetic name).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file kind.
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// The full name, as given when the file was loaded.
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }

    /// The last path component, e.g. `Test.java` for `src/pkg/Test.java`.
    pub fn simple_name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.name(),
        }
    }
}
