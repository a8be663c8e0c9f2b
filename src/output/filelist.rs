//! hdlcc plain file-list output

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::extract::FileRecord;
use crate::language::HdlType;

use super::banner::Banner;

/// Write one `<type> <library> <path>` line per record.
///
/// The type is derived again from each path; records whose extension is
/// not VHDL, Verilog or SystemVerilog are skipped even if extraction
/// accepted them.
pub fn write_filelist<W: Write + ?Sized>(
    records: &[FileRecord],
    banner: &Banner,
    out: &mut W,
) -> Result<()> {
    banner.write_to(out)?;

    for record in records {
        let Some(kind) = HdlType::from_path(&record.path) else {
            debug!("no hdlcc type for {}, skipping", record.path);
            continue;
        };
        writeln!(out, "{} {} {}", kind, record.library, record.path)?;
    }

    Ok(())
}
