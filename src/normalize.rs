//! Filename normalization and concatenation
//!
//! Normalization works on the text alone. It never consults a filesystem, so
//! symbolic links are not resolved and `..` is only resolved against the
//! segments written in the name itself.

use crate::config::{Platform, Separator, SeparatorStyle};
use crate::error::{fail_if_null_byte_present, Result};
use crate::prefix::{classify_prefix, Prefix};
use crate::separators::{is_separator, to_separator};

/// Normalize a filename, keeping a trailing separator
///
/// This function:
/// - Converts every separator to `separator`
/// - Collapses doubled separators after the prefix
/// - Removes `.` segments
/// - Resolves `..` segments against the segment before them
///
/// A trailing separator survives, and a trailing `.` or `..` counts as one.
/// A `..` with nothing left to remove yields `Ok(None)`, as does a malformed
/// prefix. A NUL character is an error.
///
/// # Examples
/// ```
/// use filename_utils::{normalize, Separator};
///
/// let unix = Separator::Unix;
/// assert_eq!(normalize("/foo//", unix).unwrap().as_deref(), Some("/foo/"));
/// assert_eq!(normalize("/foo/./", unix).unwrap().as_deref(), Some("/foo/"));
/// assert_eq!(normalize("/foo/../bar", unix).unwrap().as_deref(), Some("/bar"));
/// assert_eq!(normalize("foo/bar/..", unix).unwrap().as_deref(), Some("foo/"));
/// assert_eq!(normalize("../foo", unix).unwrap(), None);
/// assert_eq!(normalize("//server/foo/../bar", unix).unwrap().as_deref(), Some("//server/bar"));
/// assert_eq!(normalize("C:\\foo\\..\\bar", Separator::Windows).unwrap().as_deref(), Some("C:\\bar"));
/// assert_eq!(normalize("~/foo/../../bar", unix).unwrap(), None);
/// ```
pub fn normalize(path: &str, separator: Separator) -> Result<Option<String>> {
    normalize_with(path, true, separator)
}

/// Normalize a filename, dropping a trailing separator
///
/// Identical to [`normalize`] except that a trailing separator after the last
/// segment is removed. A name that normalizes to its prefix alone (`/`, `C:/`,
/// `~/`, `//server/`) keeps the prefix intact.
///
/// # Examples
/// ```
/// use filename_utils::{normalize_no_end_separator, Separator};
///
/// let unix = Separator::Unix;
/// assert_eq!(normalize_no_end_separator("/foo//", unix).unwrap().as_deref(), Some("/foo"));
/// assert_eq!(normalize_no_end_separator("foo/bar/..", unix).unwrap().as_deref(), Some("foo"));
/// assert_eq!(normalize_no_end_separator("/", unix).unwrap().as_deref(), Some("/"));
/// ```
pub fn normalize_no_end_separator(path: &str, separator: Separator) -> Result<Option<String>> {
    normalize_with(path, false, separator)
}

/// Normalize a filename with explicit control over the trailing separator
///
/// This is the canonical normalization routine; [`normalize`] and
/// [`normalize_no_end_separator`] delegate to it.
pub fn normalize_with(
    path: &str,
    keep_trailing_separator: bool,
    separator: Separator,
) -> Result<Option<String>> {
    fail_if_null_byte_present(path)?;

    if path.is_empty() {
        return Ok(Some(String::new()));
    }

    let Some(prefix) = classify_prefix(path) else {
        log::debug!("Cannot normalize {:?}: malformed prefix", path);
        return Ok(None);
    };

    let sep = separator.as_char();
    let converted = to_separator(path, separator);

    // Home prefixes may count a separator the input lacks
    let (head, rest) = if prefix.extends_past(path) {
        (format!("{}{}", converted, sep), "")
    } else {
        let (head, rest) = converted.split_at(prefix.len());
        (head.to_string(), rest)
    };

    let Some((segments, trailing)) = resolve_segments(rest, sep) else {
        log::debug!(
            "Cannot normalize {:?}: '..' climbs above {}",
            path,
            describe_anchor(&prefix)
        );
        return Ok(None);
    };

    if segments.is_empty() {
        return Ok(Some(head));
    }

    let mut normalized = head;
    normalized.push_str(&segments.join(&sep.to_string()));
    if trailing && keep_trailing_separator {
        normalized.push(sep);
    }
    Ok(Some(normalized))
}

/// Walks the segments after the prefix.
///
/// Returns the retained segments and whether the name ends like a directory,
/// or `None` when a `..` has no segment to remove.
fn resolve_segments(rest: &str, sep: char) -> Option<(Vec<&str>, bool)> {
    let mut trailing = rest.ends_with(sep);
    let mut segments: Vec<&str> = Vec::new();

    let mut parts = rest.split(sep).peekable();
    while let Some(segment) = parts.next() {
        let is_last = parts.peek().is_none();
        match segment {
            "" => {}
            "." => trailing |= is_last,
            ".." => {
                segments.pop()?;
                trailing |= is_last;
            }
            _ => segments.push(segment),
        }
    }

    Some((segments, trailing))
}

fn describe_anchor(prefix: &Prefix) -> &'static str {
    if prefix.is_anchored() {
        "its prefix"
    } else {
        "the start of the name"
    }
}

/// Concatenate a filename onto a base path and normalize the result
///
/// When `full_filename_to_add` carries its own prefix (`/`, `C:`, `~`,
/// `//server/`) it replaces `base_path` entirely. Otherwise the two are joined
/// with a separator. A malformed prefix on either side yields `Ok(None)`.
///
/// # Examples
/// ```
/// use filename_utils::{concat, Separator};
///
/// let unix = Separator::Unix;
/// assert_eq!(concat("/foo/", "bar", unix).unwrap().as_deref(), Some("/foo/bar"));
/// assert_eq!(concat("/foo", "bar", unix).unwrap().as_deref(), Some("/foo/bar"));
/// assert_eq!(concat("/foo", "/bar", unix).unwrap().as_deref(), Some("/bar"));
/// assert_eq!(concat("/foo/a/", "../bar", unix).unwrap().as_deref(), Some("/foo/bar"));
/// assert_eq!(concat("/foo/", "../../bar", unix).unwrap(), None);
/// ```
pub fn concat(
    base_path: &str,
    full_filename_to_add: &str,
    separator: Separator,
) -> Result<Option<String>> {
    let Some(prefix) = classify_prefix(full_filename_to_add) else {
        log::debug!(
            "Cannot concatenate {:?}: malformed prefix",
            full_filename_to_add
        );
        return Ok(None);
    };

    if !prefix.is_empty() || base_path.is_empty() {
        return normalize(full_filename_to_add, separator);
    }

    if base_path.ends_with(is_separator) {
        normalize(&format!("{}{}", base_path, full_filename_to_add), separator)
    } else {
        normalize(&format!("{}/{}", base_path, full_filename_to_add), separator)
    }
}

impl Platform {
    /// [`normalize`] with this platform's separator
    pub fn normalize(&self, path: &str) -> Result<Option<String>> {
        normalize(path, self.separator)
    }

    /// [`normalize_no_end_separator`] with this platform's separator
    pub fn normalize_no_end_separator(&self, path: &str) -> Result<Option<String>> {
        normalize_no_end_separator(path, self.separator)
    }

    /// [`normalize_with`] with the separator resolved from `style`
    pub fn normalize_styled(
        &self,
        path: &str,
        keep_trailing_separator: bool,
        style: SeparatorStyle,
    ) -> Result<Option<String>> {
        normalize_with(path, keep_trailing_separator, self.separator_for(style))
    }

    /// [`concat`] with this platform's separator
    pub fn concat(&self, base_path: &str, full_filename_to_add: &str) -> Result<Option<String>> {
        concat(base_path, full_filename_to_add, self.separator)
    }
}
