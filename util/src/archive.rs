//! Struct archiving functionality
//!
//! Cyclic modules write one CSV row per cycle into the session's archive directory so that runs
//! can be plotted afterwards. To add archiving to a module implement the [`Archived`] trait.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use std::fs::File;
use std::path::Path;
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use thiserror::Error;

// Internal imports
use crate::session::Session;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An object used to write CSV archive files.
///
/// A default archiver has no file and silently discards records, which is what modules built
/// outside of a session (for example in tests) get.
#[derive(Default)]
pub struct Archiver {
    writer: Option<Writer<File>>
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors that can occur while archiving.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Could not create the archive file: {0}")]
    FileCreateError(std::io::Error),

    #[error("Could not write the record: {0}")]
    WriteError(csv::Error),

    #[error("Could not flush the archive: {0}")]
    FlushError(std::io::Error),
}

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A trait which enables a struct to be archived as a timestamped csv.
pub trait Archived {
    /// Write the archives for this struct
    fn write(&mut self) -> Result<(), ArchiveError>;
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Archiver {
    /// Create a new archiver from a paricular path relative to the session's archive root.
    pub fn from_path<P: AsRef<Path>>(
        session: &Session, path: P
    ) -> Result<Self, ArchiveError> {
        Self::from_file_path(session.arch_root.join(path))
    }

    /// Create a new archiver writing to the given file path, creating parent directories as
    /// required.
    pub fn from_file_path<P: AsRef<Path>>(file_path: P) -> Result<Self, ArchiveError> {
        let file_path = file_path.as_ref();

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(ArchiveError::FileCreateError)?;
        }

        let file = File::create(file_path)
            .map_err(ArchiveError::FileCreateError)?;

        // Headers are taken from the field names of the first record
        let writer = WriterBuilder::new()
            .has_headers(true)
            .from_writer(file);

        Ok(Self {
            writer: Some(writer)
        })
    }

    /// Serialise a record into the archive.
    ///
    /// Records must be flat structs (no nested structs, sequences or maps).
    pub fn serialise<T: Serialize>(&mut self, record: T) -> Result<(), ArchiveError> {
        if let Some(ref mut w) = self.writer {
            w.serialize(record).map_err(ArchiveError::WriteError)?;

            w.flush().map_err(ArchiveError::FlushError)?;
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        cycle: u64,
        value: f64,
    }

    #[test]
    fn test_archiver_writes_rows() -> Result<(), ArchiveError> {
        let path = std::env::temp_dir()
            .join(format!("util_archive_test_{}", std::process::id()))
            .join("rows.csv");

        let mut arch = Archiver::from_file_path(&path)?;
        arch.serialise(Row { cycle: 0, value: 0.5 })?;
        arch.serialise(Row { cycle: 1, value: -1.0 })?;

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["cycle,value", "0,0.5", "1,-1.0"]);

        Ok(())
    }

    #[test]
    fn test_default_archiver_discards() {
        let mut arch = Archiver::default();
        assert!(arch.serialise(Row { cycle: 0, value: 0.0 }).is_ok());
    }
}
