//! Output configuration types

use clap::ValueEnum;

/// Format of the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// vhdl_ls style TOML with one file array per library
    #[default]
    Toml,
    /// hdlcc style file list, one `type library path` line per file
    Hdlcc,
}

