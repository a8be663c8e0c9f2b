//! String helpers for project-relative file paths.

/// Placeholder Vivado uses for the project directory in `File` paths.
pub const PPRDIR_PREFIX: &str = "$PPRDIR/";

/// Derive the lower-cased extension of a path.
///
/// This is the text after the last `.`. A path without any `.` yields the
/// whole path, lower-cased, so it simply fails to match any real extension.
///
/// # Example
///
/// ```
/// use xprconv::string_utils::extension_of;
///
/// assert_eq!(extension_of("src/Top.VHD"), "vhd");
/// assert_eq!(extension_of("ip/clk.xci"), "xci");
/// assert_eq!(extension_of("Makefile"), "makefile");
/// ```
pub fn extension_of(path: &str) -> String {
    path.rsplit('.').next().unwrap_or(path).to_lowercase()
}

/// Strip a single leading `$PPRDIR/` from a path, if present.
///
/// # Example
///
/// ```
/// use xprconv::string_utils::strip_pprdir;
///
/// assert_eq!(strip_pprdir("$PPRDIR/src/a.vhd"), "src/a.vhd");
/// assert_eq!(strip_pprdir("/abs/src/a.vhd"), "/abs/src/a.vhd");
/// ```
pub fn strip_pprdir(path: &str) -> &str {
    path.strip_prefix(PPRDIR_PREFIX).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lowercased() {
        assert_eq!(extension_of("rtl/core.SV"), "sv");
    }

    #[test]
    fn test_extension_uses_last_dot() {
        assert_eq!(extension_of("rtl/pkg.tb.vhdl"), "vhdl");
    }

    #[test]
    fn test_extension_dot_in_directory() {
        // Only the final component after the last dot counts
        assert_eq!(extension_of("v1.2/readme"), "2/readme");
    }

    #[test]
    fn test_extension_without_dot_is_whole_path() {
        assert_eq!(extension_of("src/NoExt"), "src/noext");
    }

    #[test]
    fn test_extension_trailing_dot_is_empty() {
        assert_eq!(extension_of("weird."), "");
    }

    #[test]
    fn test_strip_pprdir_only_once() {
        assert_eq!(strip_pprdir("$PPRDIR/$PPRDIR/a.v"), "$PPRDIR/a.v");
    }

    #[test]
    fn test_strip_pprdir_not_in_middle() {
        assert_eq!(strip_pprdir("src/$PPRDIR/a.v"), "src/$PPRDIR/a.v");
    }

    #[test]
    fn test_strip_pprdir_relative_parent() {
        assert_eq!(strip_pprdir("$PPRDIR/../shared/b.vhd"), "../shared/b.vhd");
    }
}
