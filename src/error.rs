//! Error types for project conversion

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a conversion run.
///
/// Filtering decisions (unaccepted extensions, files outside the hdlcc type
/// map) are never errors; those records are dropped and logged.
#[derive(Debug, Error)]
pub enum Error {
    /// The input project file could not be opened or read.
    #[error("cannot read '{}': {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not well-formed XML.
    #[error("XML parse error at byte {position}: {message}")]
    Parse { position: u64, message: String },

    /// The XML is well-formed but lacks the structure of a project file.
    #[error("malformed project file: {0}")]
    Malformed(String),

    /// The requested fileset does not exist in the project.
    #[error("fileset '{name}' not found (available: {})", format_available(available))]
    FilesetNotFound { name: String, available: Vec<String> },

    /// A library group without files reached the TOML writer.
    #[error("library '{0}' has no files")]
    EmptyLibraryGroup(String),

    /// Writing the generated output failed.
    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

fn format_available(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

/// Convenience `Result` alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
