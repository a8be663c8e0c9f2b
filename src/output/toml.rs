//! vhdl_ls TOML output

use std::io::Write;

use crate::error::{Error, Result};
use crate::group::LibraryGroup;

use super::banner::Banner;

/// Write a `[libraries]` table with one `<name>.files` array per group.
///
/// Paths are single-quoted TOML literal strings; every element except the
/// last carries a trailing comma. Paths a literal string cannot hold, and
/// library names that are not bare keys, are written as escaped basic
/// strings instead.
pub fn write_toml<W: Write + ?Sized>(
    groups: &[LibraryGroup],
    banner: &Banner,
    out: &mut W,
) -> Result<()> {
    banner.write_to(out)?;
    writeln!(out, "[libraries]")?;

    for group in groups {
        let Some((last, rest)) = group.files().split_last() else {
            return Err(Error::EmptyLibraryGroup(group.name().to_string()));
        };

        writeln!(out, "{}.files = [", toml_key(group.name()))?;
        for path in rest {
            writeln!(out, "{},", toml_string(path))?;
        }
        writeln!(out, "{}", toml_string(last))?;
        writeln!(out, "]")?;
        writeln!(out)?;
    }

    Ok(())
}

fn is_bare_key(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn toml_key(name: &str) -> String {
    if is_bare_key(name) {
        name.to_string()
    } else {
        basic_string(name)
    }
}

fn toml_string(s: &str) -> String {
    if s.chars().any(|c| c == '\'' || (c.is_control() && c != '\t')) {
        basic_string(s)
    } else {
        format!("'{}'", s)
    }
}

fn basic_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04X}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::banner;

    fn render(groups: &[LibraryGroup]) -> String {
        let mut out = Vec::new();
        write_toml(groups, &banner::fixed(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn body(text: &str) -> &str {
        text.split_once("\n\n").map(|(_, rest)| rest).unwrap()
    }

    #[test]
    fn test_no_groups_is_bare_table() {
        let text = render(&[]);
        assert!(text.starts_with("####"));
        assert_eq!(body(&text), "[libraries]\n");
    }

    #[test]
    fn test_single_file_group_has_no_comma() {
        let groups = [LibraryGroup::new("work", "src/top.vhd")];
        assert_eq!(
            body(&render(&groups)),
            "[libraries]\nwork.files = [\n'src/top.vhd'\n]\n\n"
        );
    }

    #[test]
    fn test_commas_on_all_but_last() {
        let mut lib = LibraryGroup::new("lib_a", "a1.vhd");
        lib.push("a2.vhd");
        lib.push("a3.vhd");
        let groups = [lib, LibraryGroup::new("work", "w.v")];

        let expected = "[libraries]\n\
                        lib_a.files = [\n\
                        'a1.vhd',\n\
                        'a2.vhd',\n\
                        'a3.vhd'\n\
                        ]\n\
                        \n\
                        work.files = [\n\
                        'w.v'\n\
                        ]\n\
                        \n";
        assert_eq!(body(&render(&groups)), expected);
    }

    #[test]
    fn test_path_with_quote_uses_basic_string() {
        let groups = [LibraryGroup::new("work", "src/it's.vhd")];
        assert_eq!(
            body(&render(&groups)),
            "[libraries]\nwork.files = [\n\"src/it's.vhd\"\n]\n\n"
        );
    }

    #[test]
    fn test_windows_path_stays_literal() {
        let groups = [LibraryGroup::new("work", "C:\\proj\\top.vhd")];
        assert!(body(&render(&groups)).contains("\n'C:\\proj\\top.vhd'\n"));
    }

    #[test]
    fn test_basic_string_escapes() {
        assert_eq!(basic_string("a\"b\\c'd"), "\"a\\\"b\\\\c'd\"");
        assert_eq!(basic_string("x\ny"), "\"x\\ny\"");
        assert_eq!(basic_string("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn test_library_name_needing_quotes() {
        let groups = [
            LibraryGroup::new("my.lib", "a.vhd"),
            LibraryGroup::new("my lib", "b.vhd"),
            LibraryGroup::new("lib_a-2", "c.vhd"),
        ];
        let text = render(&groups);
        assert!(text.contains("\n\"my.lib\".files = [\n"));
        assert!(text.contains("\n\"my lib\".files = [\n"));
        assert!(text.contains("\nlib_a-2.files = [\n"));
    }
}
