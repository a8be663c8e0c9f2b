//! Generated-file banner shared by all output formats

use std::io::Write;

use chrono::{Local, NaiveDateTime};

const RULE: &str = "###############################################################";

/// The four-line comment block written at the top of every output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    created: NaiveDateTime,
}

impl Banner {
    /// Banner stamped with the current local time.
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    /// Banner stamped with a fixed time.
    pub fn at(created: NaiveDateTime) -> Self {
        Self { created }
    }

    /// Write the banner followed by a blank line.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "# This file was automatically generated from Vivado XPR project file"
        )?;
        writeln!(out, "# Creation date: {}", self.created.format("%Y/%m/%d %H:%M"))?;
        writeln!(out, "{}", RULE)?;
        writeln!(out)
    }
}

#[cfg(test)]
pub(crate) fn fixed() -> Banner {
    use chrono::NaiveDate;

    let created = NaiveDate::from_ymd_opt(2024, 3, 7)
        .and_then(|d| d.and_hms_opt(9, 5, 42))
        .expect("valid fixture date");
    Banner::at(created)
}
