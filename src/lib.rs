//! xprconv - Convert Vivado XPR project files into HDL tool configurations
//!
//! The conversion is a linear pipeline: [`extract`] the files of one
//! fileset, optionally [`group_by_library`], then write one output format.

pub mod error;
pub mod extract;
pub mod group;
pub mod language;
pub mod output;
pub mod project;
pub mod selector;
pub mod string_utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use extract::{DEFAULT_LIBRARY, FileRecord, extract};
pub use group::{LibraryGroup, group_by_library};
pub use language::HdlType;
pub use output::{Banner, OutputFormat, write_filelist, write_output, write_toml};
pub use project::{Element, ProjectFile};
pub use selector::{DEFAULT_FILESET, FilesetSelector, HdlFamily};
