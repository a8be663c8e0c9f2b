//! HDL language classification for file-list output
//!
//! This is the fixed extension-to-type map used by the hdlcc writer. It is
//! independent of the configurable accepted-extension filter in
//! [`crate::selector`].

use std::fmt;

/// Source type tag written in front of each hdlcc file-list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HdlType {
    Vhdl,
    Verilog,
    SystemVerilog,
}

impl HdlType {
    /// Classify a lower-case extension.
    ///
    /// Returns `None` for anything outside the three known HDL types.
    ///
    /// # Examples
    ///
    /// ```
    /// use xprconv::language::HdlType;
    ///
    /// assert_eq!(HdlType::from_extension("vhd"), Some(HdlType::Vhdl));
    /// assert_eq!(HdlType::from_extension("sv"), Some(HdlType::SystemVerilog));
    /// assert_eq!(HdlType::from_extension("xci"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "vhd" | "vhdl" => Some(HdlType::Vhdl),
            "v" => Some(HdlType::Verilog),
            "sv" => Some(HdlType::SystemVerilog),
            _ => None,
        }
    }

    /// Classify a path by its derived extension.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::from_extension(&crate::string_utils::extension_of(path))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HdlType::Vhdl => "vhdl",
            HdlType::Verilog => "verilog",
            HdlType::SystemVerilog => "systemverilog",
        }
    }
}

impl fmt::Display for HdlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
