//! Test utilities for building Vivado project fixtures.
//!
//! This module is only compiled for tests, benchmarks and the `test-utils`
//! feature.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

struct FixtureFile {
    path: String,
    library: Option<String>,
}

struct FixtureFileset {
    name: String,
    files: Vec<FixtureFile>,
}

/// Builder producing the XML text of a minimal XPR project.
///
/// Files are added to the most recently declared fileset.
#[derive(Default)]
pub struct XprBuilder {
    filesets: Vec<FixtureFileset>,
}

impl XprBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fileset.
    pub fn fileset(mut self, name: &str) -> Self {
        self.filesets.push(FixtureFileset {
            name: name.to_string(),
            files: Vec::new(),
        });
        self
    }

    /// Add a file to the current fileset, optionally with a library.
    ///
    /// # Panics
    ///
    /// Panics if no fileset has been declared yet.
    pub fn file(mut self, path: &str, library: Option<&str>) -> Self {
        self.filesets
            .last_mut()
            .expect("declare a fileset before adding files")
            .files
            .push(FixtureFile {
                path: path.to_string(),
                library: library.map(str::to_string),
            });
        self
    }

    /// Render the project XML.
    pub fn build(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <!-- Product Version: Vivado v2020.2 (64-bit) -->\n\
             <Project Version=\"7\" Minor=\"54\" Path=\"/tmp/fixture/fixture.xpr\">\n\
             \x20 <Configuration>\n\
             \x20   <Option Name=\"Part\" Val=\"xc7a35tcpg236-1\"/>\n\
             \x20 </Configuration>\n\
             \x20 <FileSets Version=\"1\" Minor=\"31\">\n",
        );

        for fileset in &self.filesets {
            xml.push_str(&format!(
                "    <FileSet Name=\"{}\" Type=\"DesignSrcs\">\n",
                escape(&fileset.name)
            ));
            xml.push_str("      <Filter Type=\"Srcs\"/>\n");
            for file in &fileset.files {
                xml.push_str(&format!("      <File Path=\"{}\">\n", escape(&file.path)));
                xml.push_str("        <FileInfo>\n");
                if let Some(ref lib) = file.library {
                    xml.push_str(&format!(
                        "          <Attr Name=\"Library\" Val=\"{}\"/>\n",
                        escape(lib)
                    ));
                }
                xml.push_str("          <Attr Name=\"UsedIn\" Val=\"synthesis\"/>\n");
                xml.push_str("        </FileInfo>\n");
                xml.push_str("      </File>\n");
            }
            xml.push_str("    </FileSet>\n");
        }

        xml.push_str("  </FileSets>\n</Project>\n");
        xml
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}

/// A temporary directory holding project fixtures.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `name` inside the directory and return its full path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write a project built with [`XprBuilder`].
    pub fn write_xpr(&self, name: &str, builder: &XprBuilder) -> PathBuf {
        self.write(name, &builder.build())
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
