//! Separator conversion
//!
//! Both `/` and `\` are accepted as separators in every input. These functions
//! only rewrite one glyph into the other; no other character is touched.

use crate::config::{Platform, Separator, UNIX_SEPARATOR, WINDOWS_SEPARATOR};

/// Whether `ch` is a UNIX or Windows separator
pub fn is_separator(ch: char) -> bool {
    ch == UNIX_SEPARATOR || ch == WINDOWS_SEPARATOR
}

/// Replaces every occurrence of the other separator with `target`
///
/// # Examples
/// ```
/// use filename_utils::{to_separator, Separator};
///
/// assert_eq!(to_separator("a\\b/c", Separator::Unix), "a/b/c");
/// assert_eq!(to_separator("a\\b/c", Separator::Windows), "a\\b\\c");
/// ```
pub fn to_separator(path: &str, target: Separator) -> String {
    path.replace(target.other().as_char(), &target.as_char().to_string())
}

/// Converts all separators to the UNIX separator `/`
///
/// # Examples
/// ```
/// use filename_utils::separators_to_unix;
///
/// assert_eq!(separators_to_unix("D:\\a\\b\\c"), "D:/a/b/c");
/// ```
pub fn separators_to_unix(path: &str) -> String {
    to_separator(path, Separator::Unix)
}

/// Converts all separators to the Windows separator `\`
///
/// # Examples
/// ```
/// use filename_utils::separators_to_windows;
///
/// assert_eq!(separators_to_windows("D:/a/b/c"), "D:\\a\\b\\c");
/// ```
pub fn separators_to_windows(path: &str) -> String {
    to_separator(path, Separator::Windows)
}

/// Converts all separators to the native separator of `platform`
pub fn separators_to_system(path: &str, platform: &Platform) -> String {
    to_separator(path, platform.separator)
}
