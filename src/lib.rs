//! # filename-utils
//!
//! Filename normalization and manipulation that works on strings alone.
//!
//! Nothing here touches a filesystem. Names are parsed into a prefix (`/`,
//! `C:`, `C:\`, `//server/`, `~/`, `~user/`), a path and a final name with an
//! optional extension, using either separator regardless of the host.
//!
//! ## Features
//!
//! - **Prefix parsing**: UNIX roots, drive letters, UNC servers and home directories
//! - **Normalization**: `.` and `..` resolution bounded by the prefix
//! - **Accessors**: prefix, path, full path, name, base name and extension
//! - **Comparison**: raw, normalized and case-insensitive equality
//! - **Explicit platform**: separator and case rules are passed in, never read from globals
//! - **Stream decorators**: bounded, generated and per-thread readers and writers in [`io`]
//!
//! ## Examples
//!
//! ### Normalization
//!
//! ```rust
//! use filename_utils::{normalize, normalize_no_end_separator, Separator};
//!
//! assert_eq!(
//!     normalize("C:\\foo\\.\\bar\\..\\baz\\", Separator::Windows).unwrap().as_deref(),
//!     Some("C:\\foo\\baz\\")
//! );
//! assert_eq!(
//!     normalize_no_end_separator("/a/b/../c/", Separator::Unix).unwrap().as_deref(),
//!     Some("/a/c")
//! );
//!
//! // Climbing above the prefix has no answer
//! assert_eq!(normalize("/../a", Separator::Unix).unwrap(), None);
//! ```
//!
//! ### Taking a filename apart
//!
//! ```rust
//! use filename_utils::{get_base_name, get_extension, get_full_path, get_name, get_path, get_prefix};
//!
//! let name = "C:\\a\\b\\c.txt";
//! assert_eq!(get_prefix(name).unwrap().as_deref(), Some("C:\\"));
//! assert_eq!(get_path(name).unwrap().as_deref(), Some("a\\b\\"));
//! assert_eq!(get_full_path(name).as_deref(), Some("C:\\a\\b\\"));
//! assert_eq!(get_name(name).unwrap(), "c.txt");
//! assert_eq!(get_base_name(name).unwrap(), "c");
//! assert_eq!(get_extension(name), "txt");
//! ```
//!
//! ### Platform-specific behavior
//!
//! ```rust
//! use filename_utils::Platform;
//!
//! let windows = Platform::WINDOWS;
//! assert_eq!(windows.normalize("a/b/../c").unwrap().as_deref(), Some("a\\c"));
//! assert!(windows.equals_normalized_on_system("A/B.TXT", "a\\b.txt").unwrap());
//!
//! let unix = Platform::UNIX;
//! assert!(!unix.equals_normalized_on_system("A/B.TXT", "a\\b.txt").unwrap());
//! ```
//!
//! ### Rejected input
//!
//! ```rust
//! use filename_utils::{get_name, normalize, FilenameError, Separator};
//!
//! assert!(matches!(
//!     normalize("a\0b", Separator::Unix),
//!     Err(FilenameError::InvalidCharacters { .. })
//! ));
//! assert!(get_name("file\0.txt").is_err());
//! ```

mod accessors;
mod compare;
mod config;
mod error;
mod normalize;
mod prefix;
mod separators;

pub mod io;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use accessors::{
    get_base_name, get_extension, get_full_path, get_full_path_no_end_separator, get_name,
    get_path, get_path_no_end_separator, get_prefix, index_of_extension, index_of_last_separator,
    is_extension, remove_extension,
};
pub use compare::{equals, equals_normalized};
pub use config::{
    CaseSensitivity, Platform, Separator, SeparatorStyle, UNIX_SEPARATOR, WINDOWS_SEPARATOR,
};
pub use error::{FilenameError, Result};
pub use normalize::{concat, normalize, normalize_no_end_separator, normalize_with};
pub use prefix::{classify_prefix, prefix_length, Prefix, PrefixKind};
pub use separators::{
    is_separator, separators_to_system, separators_to_unix, separators_to_windows, to_separator,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
