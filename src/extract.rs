//! Fileset extraction
//!
//! Walks one fileset of a [`ProjectFile`] and produces the HDL source files
//! it lists, filtered by extension, with their logical library.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::project::{Element, ProjectFile};
use crate::selector::FilesetSelector;
use crate::string_utils::{extension_of, strip_pprdir};

/// Library assigned to files that don't declare one.
pub const DEFAULT_LIBRARY: &str = "work";

/// One source file of the selected fileset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Project-relative path with `$PPRDIR/` removed.
    pub path: String,
    pub library: String,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, library: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            library: library.into(),
        }
    }
}

/// Extract the files of `selector.fileset_name` whose extension is accepted.
///
/// Records are returned in document order. Fails with
/// [`Error::FilesetNotFound`] if the fileset does not exist and with
/// [`Error::Malformed`] if a `File` element has no `Path`.
pub fn extract(project: &ProjectFile, selector: &FilesetSelector) -> Result<Vec<FileRecord>> {
    let fileset = project.fileset(&selector.fileset_name)?;
    let records = extract_fileset(fileset, selector)?;
    info!(
        "extracted {} file(s) from fileset '{}'",
        records.len(),
        selector.fileset_name
    );
    Ok(records)
}

/// Extract from an already located `FileSet` element.
pub fn extract_fileset(fileset: &Element, selector: &FilesetSelector) -> Result<Vec<FileRecord>> {
    let mut records = Vec::new();

    for file in fileset.children_named("File") {
        let raw_path = file.attr("Path").ok_or_else(|| {
            Error::Malformed(format!(
                "<File> in fileset '{}' has no Path attribute",
                fileset.attr("Name").unwrap_or("?")
            ))
        })?;

        let ext = extension_of(raw_path);
        if !selector.accepts(&ext) {
            debug!("skipping {} (extension '{}' not accepted)", raw_path, ext);
            continue;
        }

        let library = library_of(file).unwrap_or(DEFAULT_LIBRARY);
        records.push(FileRecord::new(strip_pprdir(raw_path), library));
    }

    Ok(records)
}

/// Value of `FileInfo/Attr[@Name='Library']/@Val`, if declared.
fn library_of(file: &Element) -> Option<&str> {
    file.children_named("FileInfo")
        .flat_map(|info| info.children_named("Attr"))
        .find(|attr| attr.attr("Name") == Some("Library"))
        .and_then(|attr| attr.attr("Val"))
}
