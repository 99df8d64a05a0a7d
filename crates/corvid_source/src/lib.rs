//! Source file management and position lookup for diagnostics.
//!
//! This crate provides the [`DiagnosticSource`] contract that the diagnostic layer
//! uses to turn offsets into line/column numbers and source lines, the
//! [`SourceFile`] in-memory implementation of that contract, the [`SourceDb`] that
//! owns loaded files, and the [`FileId`], [`FileObject`] and [`Position`] types that
//! identify files and locations within them.

#![warn(missing_docs)]

pub mod file_id;
pub mod file_object;
pub mod position;
pub mod source;
pub mod source_db;
pub mod source_file;

pub use file_id::FileId;
pub use file_object::{FileKind, FileObject};
pub use position::Position;
pub use source::DiagnosticSource;
pub use source_db::SourceDb;
pub use source_file::SourceFile;
