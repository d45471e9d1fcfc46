//! Error types for filename operations

use thiserror::Error;

/// The error type for filename operations
///
/// "No result" outcomes such as a malformed prefix or a `..` that climbs above
/// the root are not errors; they come back as `None`. This type is reserved for
/// conditions the caller must not silently absorb.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilenameError {
    /// A NUL character was found in a filename
    #[error("Null byte present in file/path name: {path:?}")]
    InvalidCharacters { path: String },

    /// A filename could not be normalized where normalization is a precondition
    #[error("Error normalizing file name: {path}")]
    NormalizationFailed { path: String },
}

/// Result type for filename operations
pub type Result<T> = std::result::Result<T, FilenameError>;

/// Rejects names carrying a NUL character.
pub(crate) fn fail_if_null_byte_present(path: &str) -> Result<()> {
    if path.contains('\0') {
        log::warn!("Rejecting file name containing a null byte: {:?}", path);
        return Err(FilenameError::InvalidCharacters {
            path: path.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_if_null_byte_present() {
        assert!(fail_if_null_byte_present("a/b/c.txt").is_ok());
        assert!(fail_if_null_byte_present("").is_ok());
        assert_eq!(
            fail_if_null_byte_present("a\0b"),
            Err(FilenameError::InvalidCharacters {
                path: "a\0b".to_string()
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = FilenameError::NormalizationFailed {
            path: "//file.txt".to_string(),
        };
        assert_eq!(err.to_string(), "Error normalizing file name: //file.txt");

        let err = FilenameError::InvalidCharacters {
            path: "a\0b".to_string(),
        };
        assert!(err.to_string().starts_with("Null byte present"));
    }
}
