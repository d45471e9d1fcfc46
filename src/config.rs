//! Host configuration
//!
//! Everything that depends on the host operating system (which separator is
//! native, whether filenames compare case-sensitively) is carried in a
//! [`Platform`] value and passed in explicitly. Nothing in this crate reads
//! process state to answer those questions.

/// The UNIX separator character
pub const UNIX_SEPARATOR: char = '/';

/// The Windows separator character
pub const WINDOWS_SEPARATOR: char = '\\';

/// A concrete separator character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `/`
    Unix,
    /// `\`
    Windows,
}

impl Separator {
    /// The character this separator stands for
    pub fn as_char(self) -> char {
        match self {
            Separator::Unix => UNIX_SEPARATOR,
            Separator::Windows => WINDOWS_SEPARATOR,
        }
    }

    /// The separator this one replaces during conversion
    pub fn other(self) -> Separator {
        match self {
            Separator::Unix => Separator::Windows,
            Separator::Windows => Separator::Unix,
        }
    }
}

/// Separator requested by a caller; `System` defers to the [`Platform`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparatorStyle {
    Unix,
    Windows,
    System,
}

/// Case sensitivity requested by a caller; `System` defers to the [`Platform`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
    System,
}

impl CaseSensitivity {
    /// Compares two strings under this sensitivity on the given platform.
    ///
    /// Insensitive comparison folds each character with its Unicode lowercase
    /// mapping.
    ///
    /// # Examples
    /// ```
    /// use filename_utils::{CaseSensitivity, Platform};
    ///
    /// assert!(CaseSensitivity::Insensitive.check_equals("File.TXT", "file.txt", &Platform::UNIX));
    /// assert!(!CaseSensitivity::System.check_equals("File.TXT", "file.txt", &Platform::UNIX));
    /// assert!(CaseSensitivity::System.check_equals("File.TXT", "file.txt", &Platform::WINDOWS));
    /// ```
    pub fn check_equals(self, a: &str, b: &str, platform: &Platform) -> bool {
        if platform.is_case_sensitive(self) {
            a == b
        } else {
            a.chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase))
        }
    }
}

/// Host conventions for filenames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
    /// Native separator
    pub separator: Separator,
    /// Whether filenames differing only in case name different files
    pub case_sensitive: bool,
}

impl Platform {
    /// UNIX-like hosts: `/`, case-sensitive
    pub const UNIX: Platform = Platform {
        separator: Separator::Unix,
        case_sensitive: true,
    };

    /// Windows hosts: `\`, case-insensitive
    pub const WINDOWS: Platform = Platform {
        separator: Separator::Windows,
        case_sensitive: false,
    };

    /// The conventions of the platform this crate was compiled for
    pub fn native() -> Self {
        if cfg!(windows) {
            Self::WINDOWS
        } else {
            Self::UNIX
        }
    }

    /// Resolves a requested style to a concrete separator
    pub fn separator_for(&self, style: SeparatorStyle) -> Separator {
        match style {
            SeparatorStyle::Unix => Separator::Unix,
            SeparatorStyle::Windows => Separator::Windows,
            SeparatorStyle::System => self.separator,
        }
    }

    /// Resolves a requested case mode to a yes/no answer
    pub fn is_case_sensitive(&self, case: CaseSensitivity) -> bool {
        match case {
            CaseSensitivity::Sensitive => true,
            CaseSensitivity::Insensitive => false,
            CaseSensitivity::System => self.case_sensitive,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::native()
    }
}
