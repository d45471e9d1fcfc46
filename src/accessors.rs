//! Filename accessors
//!
//! Splits a filename into prefix, path, name, base name and extension:
//!
//! ```text
//! C:\dev\project\file.txt
//! prefix    = C:\
//! path      = dev\project\
//! full path = C:\dev\project\
//! name      = file.txt
//! base name = file
//! extension = txt
//! ```
//!
//! These are pure slicing operations. Separators are returned as written.

use crate::error::{fail_if_null_byte_present, Result};
use crate::prefix::classify_prefix;
use crate::separators::is_separator;

const EXTENSION_SEPARATOR: char = '.';

/// Index of the last `/` or `\` in `path`
pub fn index_of_last_separator(path: &str) -> Option<usize> {
    path.rfind(is_separator)
}

/// Index of the `.` that starts the extension of the last name in `path`
///
/// A `.` that appears in a directory segment is not an extension.
///
/// # Examples
/// ```
/// use filename_utils::index_of_extension;
///
/// assert_eq!(index_of_extension("a.txt/b.txt/c.txt"), Some(13));
/// assert_eq!(index_of_extension("a/b.notextension/c"), None);
/// ```
pub fn index_of_extension(path: &str) -> Option<usize> {
    let extension_pos = path.rfind(EXTENSION_SEPARATOR)?;
    match index_of_last_separator(path) {
        Some(last_separator) if last_separator > extension_pos => None,
        _ => Some(extension_pos),
    }
}

/// The prefix of `path`, as written
///
/// Home prefixes that run to the end of the input gain a `/`, so `~` yields
/// `~/`. Returns `Ok(None)` for a malformed prefix.
///
/// # Examples
/// ```
/// use filename_utils::get_prefix;
///
/// assert_eq!(get_prefix("C:\\a\\b").unwrap().as_deref(), Some("C:\\"));
/// assert_eq!(get_prefix("~user").unwrap().as_deref(), Some("~user/"));
/// assert_eq!(get_prefix("a/b").unwrap().as_deref(), Some(""));
/// ```
pub fn get_prefix(path: &str) -> Result<Option<String>> {
    let Some(prefix) = classify_prefix(path) else {
        return Ok(None);
    };

    let head = if prefix.extends_past(path) {
        format!("{}/", path)
    } else {
        path[..prefix.len()].to_string()
    };
    fail_if_null_byte_present(&head)?;
    Ok(Some(head))
}

/// The directory part of `path` after the prefix, ending with a separator
///
/// # Examples
/// ```
/// use filename_utils::get_path;
///
/// assert_eq!(get_path("C:\\a\\b\\c.txt").unwrap().as_deref(), Some("a\\b\\"));
/// assert_eq!(get_path("~/a/b/c.txt").unwrap().as_deref(), Some("a/b/"));
/// assert_eq!(get_path("a.txt").unwrap().as_deref(), Some(""));
/// ```
pub fn get_path(path: &str) -> Result<Option<String>> {
    path_between_prefix_and_name(path, 1)
}

/// The directory part of `path` after the prefix, without the final separator
///
/// # Examples
/// ```
/// use filename_utils::get_path_no_end_separator;
///
/// assert_eq!(get_path_no_end_separator("/a/b/c.txt").unwrap().as_deref(), Some("a/b"));
/// assert_eq!(get_path_no_end_separator("a/b/c/").unwrap().as_deref(), Some("a/b/c"));
/// ```
pub fn get_path_no_end_separator(path: &str) -> Result<Option<String>> {
    path_between_prefix_and_name(path, 0)
}

fn path_between_prefix_and_name(path: &str, separator_add: usize) -> Result<Option<String>> {
    let Some(prefix) = classify_prefix(path) else {
        return Ok(None);
    };
    let Some(index) = index_of_last_separator(path) else {
        return Ok(Some(String::new()));
    };

    let end = index + separator_add;
    if prefix.len() >= path.len() || prefix.len() >= end {
        return Ok(Some(String::new()));
    }

    let directory = &path[prefix.len()..end];
    fail_if_null_byte_present(directory)?;
    Ok(Some(directory.to_string()))
}

/// The prefix and directory part of `path`, ending with a separator
///
/// # Examples
/// ```
/// use filename_utils::get_full_path;
///
/// assert_eq!(get_full_path("C:\\a\\b\\c.txt").as_deref(), Some("C:\\a\\b\\"));
/// assert_eq!(get_full_path("C:a").as_deref(), Some("C:"));
/// assert_eq!(get_full_path("~").as_deref(), Some("~/"));
/// ```
pub fn get_full_path(path: &str) -> Option<String> {
    full_path(path, true)
}

/// The prefix and directory part of `path`, without the final separator
///
/// A separator that is itself the prefix is kept, so `/abc` yields `/`.
///
/// # Examples
/// ```
/// use filename_utils::get_full_path_no_end_separator;
///
/// assert_eq!(get_full_path_no_end_separator("/abc/xyz").as_deref(), Some("/abc"));
/// assert_eq!(get_full_path_no_end_separator("/abc").as_deref(), Some("/"));
/// assert_eq!(get_full_path_no_end_separator("~").as_deref(), Some("~"));
/// ```
pub fn get_full_path_no_end_separator(path: &str) -> Option<String> {
    full_path(path, false)
}

fn full_path(path: &str, include_separator: bool) -> Option<String> {
    let prefix = classify_prefix(path)?;

    if prefix.len() >= path.len() {
        return Some(if include_separator && prefix.extends_past(path) {
            format!("{}/", path)
        } else {
            path.to_string()
        });
    }

    let Some(index) = index_of_last_separator(path) else {
        return Some(path[..prefix.len()].to_string());
    };

    let end = if include_separator { index + 1 } else { index };
    Some(path[..end.max(1)].to_string())
}

/// The name after the last separator
///
/// # Examples
/// ```
/// use filename_utils::get_name;
///
/// assert_eq!(get_name("a/b/c.txt").unwrap(), "c.txt");
/// assert_eq!(get_name("a\\b\\c").unwrap(), "c");
/// assert_eq!(get_name("a/b/c/").unwrap(), "");
/// ```
pub fn get_name(path: &str) -> Result<String> {
    fail_if_null_byte_present(path)?;
    let start = index_of_last_separator(path).map_or(0, |index| index + 1);
    Ok(path[start..].to_string())
}

/// The name after the last separator, minus its extension
///
/// # Examples
/// ```
/// use filename_utils::get_base_name;
///
/// assert_eq!(get_base_name("a/b/c.txt").unwrap(), "c");
/// assert_eq!(get_base_name("file.txt.bak").unwrap(), "file.txt");
/// ```
pub fn get_base_name(path: &str) -> Result<String> {
    remove_extension(&get_name(path)?)
}

/// The extension of the last name in `path`, or `""` when it has none
///
/// # Examples
/// ```
/// use filename_utils::get_extension;
///
/// assert_eq!(get_extension("foo.txt"), "txt");
/// assert_eq!(get_extension("a/b/c.jpg"), "jpg");
/// assert_eq!(get_extension("a.b/c"), "");
/// ```
pub fn get_extension(path: &str) -> &str {
    match index_of_extension(path) {
        Some(index) => &path[index + 1..],
        None => "",
    }
}

/// `path` with the extension of its last name removed
///
/// # Examples
/// ```
/// use filename_utils::remove_extension;
///
/// assert_eq!(remove_extension("a/b/c.txt").unwrap(), "a/b/c");
/// assert_eq!(remove_extension("a.b/c").unwrap(), "a.b/c");
/// ```
pub fn remove_extension(path: &str) -> Result<String> {
    fail_if_null_byte_present(path)?;
    Ok(match index_of_extension(path) {
        Some(index) => path[..index].to_string(),
        None => path.to_string(),
    })
}

/// Whether the extension of `path` is one of `extensions`
///
/// Matching is case-sensitive. An empty set matches names without an
/// extension; to test a single extension pass a one-element slice.
///
/// # Examples
/// ```
/// use filename_utils::is_extension;
///
/// assert!(is_extension("a/b/file.txt", ["txt"]).unwrap());
/// assert!(is_extension("file.txt", ["rtf", "txt"]).unwrap());
/// assert!(!is_extension("file.txt", ["TXT"]).unwrap());
/// assert!(is_extension("file", [""; 0]).unwrap());
/// ```
pub fn is_extension<I, S>(path: &str, extensions: I) -> Result<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fail_if_null_byte_present(path)?;

    let file_ext = get_extension(path);
    let mut extensions = extensions.into_iter().peekable();
    if extensions.peek().is_none() {
        return Ok(index_of_extension(path).is_none());
    }
    Ok(extensions.any(|extension| extension.as_ref() == file_ext))
}
