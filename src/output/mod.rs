//! Generated document formatting
//!
//! Both formats start with the same [`Banner`]:
//! - `toml` - vhdl_ls configuration, files grouped by library
//! - `hdlcc` - flat `type library path` file list
//!
//! # Module Structure
//!
//! - `config` - Output format selection
//! - `banner` - Shared generated-file header
//! - `toml` - TOML writer
//! - `filelist` - hdlcc file-list writer

mod banner;
mod config;
mod filelist;
mod toml;

pub use banner::Banner;
pub use config::OutputFormat;
pub use filelist::write_filelist;
pub use toml::write_toml;

use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::extract::FileRecord;
use crate::group::group_by_library;

/// Write `records` in the requested format.
///
/// Records are grouped by library only when the format needs it.
pub fn write_output<W: Write + ?Sized>(
    format: OutputFormat,
    records: &[FileRecord],
    banner: &Banner,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Toml => {
            let groups = group_by_library(records);
            info!("writing {} librar(ies) as TOML", groups.len());
            write_toml(&groups, banner, out)
        }
        OutputFormat::Hdlcc => {
            info!("writing {} file(s) as hdlcc list", records.len());
            write_filelist(records, banner, out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: OutputFormat, records: &[FileRecord]) -> String {
        let mut out = Vec::new();
        write_output(format, records, &banner::fixed(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_toml_groups_records() {
        let records = [
            FileRecord::new("a.vhd", "work"),
            FileRecord::new("b.vhd", "lib"),
            FileRecord::new("c.vhd", "work"),
        ];
        let text = render(OutputFormat::Toml, &records);
        assert!(text.contains("work.files = [\n'a.vhd',\n'c.vhd'\n]\n"));
        assert!(text.contains("lib.files = [\n'b.vhd'\n]\n"));
        assert!(text.find("work.files").unwrap() < text.find("lib.files").unwrap());
    }

    #[test]
    fn test_hdlcc_keeps_record_order() {
        let records = [
            FileRecord::new("a.vhd", "work"),
            FileRecord::new("b.vhd", "lib"),
            FileRecord::new("c.vhd", "work"),
        ];
        let text = render(OutputFormat::Hdlcc, &records);
        assert!(text.ends_with("vhdl work a.vhd\nvhdl lib b.vhd\nvhdl work c.vhd\n"));
    }

    #[test]
    fn test_formats_share_banner() {
        let toml = render(OutputFormat::Toml, &[]);
        let hdlcc = render(OutputFormat::Hdlcc, &[]);
        assert_eq!(
            toml.lines().take(5).collect::<Vec<_>>(),
            hdlcc.lines().take(5).collect::<Vec<_>>()
        );
    }
}
