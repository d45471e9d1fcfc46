//! Prefix classification
//!
//! The prefix is the root-anchoring head of a filename. It decides how many
//! `..` segments the rest of the name may consume, so every other operation in
//! this crate starts here. Both separators are accepted in any position:
//!
//! | Kind            | Examples                      | Length                    |
//! |-----------------|-------------------------------|---------------------------|
//! | none            | `a/b/c.txt`                   | 0                         |
//! | UNIX root       | `/a/b/c.txt`, `\a\b\c.txt`    | 1                         |
//! | drive relative  | `C:a/b/c.txt`                 | 2                         |
//! | drive absolute  | `C:\a\b\c.txt`                | 3                         |
//! | UNC server      | `\\server\a\b\c.txt`          | 2 + server + 1            |
//! | home            | `~`, `~/a/b/c.txt`            | 2                         |
//! | named home      | `~user`, `~user/a/b/c.txt`    | 1 + user + 1              |
//!
//! Home prefixes always count a separator after the user part, even when the
//! input stops before one, so their length can exceed the input length.

use crate::separators::is_separator;

/// The shape of a filename prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixKind {
    /// Relative name, no prefix
    None,
    /// Leading single separator
    UnixRoot,
    /// `C:` not followed by a separator
    DriveRelative,
    /// `C:` followed by a separator
    DriveAbsolute,
    /// Two separators, a server name and a separator
    Unc,
    /// `~` alone or followed by a separator
    Home,
    /// `~user`
    NamedHome,
}

/// A classified, valid prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    kind: PrefixKind,
    len: usize,
}

impl Prefix {
    fn new(kind: PrefixKind, len: usize) -> Self {
        Self { kind, len }
    }

    /// The shape of the prefix
    pub fn kind(&self) -> PrefixKind {
        self.kind
    }

    /// Length in bytes, including an implied trailing separator for home prefixes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the name has no prefix at all
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `..` segments are bounded by this prefix
    pub fn is_anchored(&self) -> bool {
        self.kind != PrefixKind::None
    }

    /// Whether the prefix counts a separator the input does not contain
    pub fn extends_past(&self, path: &str) -> bool {
        self.len > path.len()
    }
}

/// Classifies the prefix of `path`
///
/// Returns `None` when the prefix is malformed: a leading `:`, a non-letter
/// drive (`1:`), three leading separators, or a UNC prefix without a
/// terminated server name (`//a`).
///
/// # Examples
/// ```
/// use filename_utils::{classify_prefix, PrefixKind};
///
/// let prefix = classify_prefix("//server/a/b").unwrap();
/// assert_eq!(prefix.kind(), PrefixKind::Unc);
/// assert_eq!(prefix.len(), 9);
///
/// assert!(classify_prefix("1:").is_none());
/// ```
pub fn classify_prefix(path: &str) -> Option<Prefix> {
    let bytes = path.as_bytes();
    let Some(&first) = bytes.first() else {
        return Some(Prefix::new(PrefixKind::None, 0));
    };

    if first == b':' {
        return None;
    }

    if first == b'~' {
        let kind = match bytes.get(1) {
            None => PrefixKind::Home,
            Some(&ch) if is_separator(ch as char) => PrefixKind::Home,
            Some(_) => PrefixKind::NamedHome,
        };
        let len = match index_of_separator_from(path, 1) {
            Some(index) => index + 1,
            None => path.len() + 1,
        };
        return Some(Prefix::new(kind, len));
    }

    if let Some(&second) = bytes.get(1) {
        if second == b':' {
            if !first.is_ascii_alphabetic() {
                return None;
            }
            return match bytes.get(2) {
                Some(&ch) if is_separator(ch as char) => {
                    Some(Prefix::new(PrefixKind::DriveAbsolute, 3))
                }
                _ => Some(Prefix::new(PrefixKind::DriveRelative, 2)),
            };
        }

        if is_separator(first as char) && is_separator(second as char) {
            return match index_of_separator_from(path, 2) {
                Some(index) if index > 2 => Some(Prefix::new(PrefixKind::Unc, index + 1)),
                _ => None,
            };
        }
    }

    if is_separator(first as char) {
        Some(Prefix::new(PrefixKind::UnixRoot, 1))
    } else {
        Some(Prefix::new(PrefixKind::None, 0))
    }
}

/// Length of the prefix of `path`, or `None` when it is malformed
///
/// # Examples
/// ```
/// use filename_utils::prefix_length;
///
/// assert_eq!(prefix_length("C:\\a"), Some(3));
/// assert_eq!(prefix_length("~user"), Some(6));
/// assert_eq!(prefix_length(":"), None);
/// ```
pub fn prefix_length(path: &str) -> Option<usize> {
    classify_prefix(path).map(|prefix| prefix.len())
}

fn index_of_separator_from(path: &str, from: usize) -> Option<usize> {
    path.get(from..)
        .and_then(|rest| rest.find(is_separator))
        .map(|index| index + from)
}
