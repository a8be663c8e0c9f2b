//! Fileset selection and extension filtering
//!
//! The accepted-extension table here is configurable and open-ended. It is
//! deliberately separate from [`crate::language::HdlType`], the fixed type
//! map the hdlcc writer applies, and the two may disagree.

use std::collections::BTreeSet;

/// Fileset read when none is requested.
pub const DEFAULT_FILESET: &str = "sources_1";

/// A family of HDL source extensions that can be toggled as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HdlFamily {
    Vhdl,
    Verilog,
    SystemVerilog,
}

impl HdlFamily {
    pub const ALL: [HdlFamily; 3] = [
        HdlFamily::Vhdl,
        HdlFamily::Verilog,
        HdlFamily::SystemVerilog,
    ];

    /// File extensions (lower-case, without dot) belonging to this family.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            HdlFamily::Vhdl => &["vhd", "vhdl"],
            HdlFamily::Verilog => &["v"],
            HdlFamily::SystemVerilog => &["sv"],
        }
    }
}

/// Which fileset to read and which file extensions to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesetSelector {
    pub fileset_name: String,
    /// Lower-case extensions without a leading dot.
    pub accepted_extensions: BTreeSet<String>,
}

impl FilesetSelector {
    /// Selector for `fileset_name` accepting no extensions yet.
    pub fn new(fileset_name: impl Into<String>) -> Self {
        Self {
            fileset_name: fileset_name.into(),
            accepted_extensions: BTreeSet::new(),
        }
    }

    /// Accept every extension of `family`.
    pub fn with_family(mut self, family: HdlFamily) -> Self {
        self.accepted_extensions
            .extend(family.extensions().iter().map(|e| e.to_string()));
        self
    }

    /// Accept an additional extension. Case and a leading `.` are ignored.
    pub fn with_extension(mut self, ext: &str) -> Self {
        let ext = ext.trim().trim_start_matches('.').to_lowercase();
        if !ext.is_empty() {
            self.accepted_extensions.insert(ext);
        }
        self
    }

    /// Check whether a (lower-cased) extension passes the filter.
    pub fn accepts(&self, ext: &str) -> bool {
        self.accepted_extensions.contains(ext)
    }
}

impl Default for FilesetSelector {
    fn default() -> Self {
        HdlFamily::ALL
            .into_iter()
            .fold(Self::new(DEFAULT_FILESET), Self::with_family)
    }
}
