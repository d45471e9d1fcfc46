//! Filename comparison

use crate::config::{CaseSensitivity, Platform, Separator};
use crate::error::{FilenameError, Result};
use crate::normalize::normalize;

/// Whether two filenames are identical, character for character
///
/// No normalization is performed and case matters: `a\b` and `a/b` differ.
pub fn equals(filename1: &str, filename2: &str) -> bool {
    filename1 == filename2
}

/// Whether two filenames are identical after normalization
///
/// Separators and `.`/`..` segments are normalized before a case-sensitive
/// comparison. A trailing separator stays significant, so `a/b/` and `a/b`
/// differ. If either side cannot be normalized the comparison is meaningless
/// and [`FilenameError::NormalizationFailed`] is returned.
///
/// # Examples
/// ```
/// use filename_utils::equals_normalized;
///
/// assert!(equals_normalized("a\\b\\file.txt", "a/b/file.txt").unwrap());
/// assert!(equals_normalized("a/./b/../c", "a/c").unwrap());
/// assert!(!equals_normalized("a/b/", "a/b").unwrap());
/// assert!(equals_normalized("//file.txt", "file.txt").is_err());
/// ```
pub fn equals_normalized(filename1: &str, filename2: &str) -> Result<bool> {
    compare(
        filename1,
        filename2,
        true,
        CaseSensitivity::Sensitive,
        &Platform::UNIX,
    )
}

impl Platform {
    /// Whether two filenames are identical, using this platform's case rules
    pub fn equals_on_system(&self, filename1: &str, filename2: &str) -> bool {
        CaseSensitivity::System.check_equals(filename1, filename2, self)
    }

    /// Whether two filenames are identical after normalization, using this
    /// platform's case rules
    pub fn equals_normalized_on_system(&self, filename1: &str, filename2: &str) -> Result<bool> {
        self.equals(filename1, filename2, true, CaseSensitivity::System)
    }

    /// Compares two filenames with full control over normalization and case
    ///
    /// # Examples
    /// ```
    /// use filename_utils::{CaseSensitivity, Platform};
    ///
    /// let unix = Platform::UNIX;
    /// assert!(!unix.equals("file.txt", "FILE.TXT", true, CaseSensitivity::Sensitive).unwrap());
    /// assert!(unix.equals("file.txt", "FILE.TXT", true, CaseSensitivity::Insensitive).unwrap());
    /// assert!(!unix.equals("file.txt", "FILE.TXT", true, CaseSensitivity::System).unwrap());
    /// ```
    pub fn equals(
        &self,
        filename1: &str,
        filename2: &str,
        normalized: bool,
        case: CaseSensitivity,
    ) -> Result<bool> {
        compare(filename1, filename2, normalized, case, self)
    }
}

fn compare(
    filename1: &str,
    filename2: &str,
    normalized: bool,
    case: CaseSensitivity,
    platform: &Platform,
) -> Result<bool> {
    if !normalized {
        return Ok(case.check_equals(filename1, filename2, platform));
    }

    // Both sides are normalized with the same separator
    let first = normalize_for_comparison(filename1, platform.separator)?;
    let second = normalize_for_comparison(filename2, platform.separator)?;
    Ok(case.check_equals(&first, &second, platform))
}

fn normalize_for_comparison(filename: &str, separator: Separator) -> Result<String> {
    normalize(filename, separator)?.ok_or_else(|| {
        log::debug!("Comparison precondition failed: {:?} does not normalize", filename);
        FilenameError::NormalizationFailed {
            path: filename.to_string(),
        }
    })
}
