//! crates/blackbox/src/priority.rs
//! Syslog-inspired severity levels for console diagnostics.

use std::fmt;

/// Priority of a log sent to the console.
///
/// The eight levels follow the syslog severity table. Declaration order is
/// the severity order: [`Priority::Emergency`] is the most severe and
/// [`Priority::Debug`] the least, so the derived ordering compares numeric
/// ranks (lower rank means more severe).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    /// System is unusable.
    Emergency,
    /// Action must be taken immediately.
    Alert,
    /// Critical conditions.
    Critical,
    /// Error conditions.
    Error,
    /// Warning conditions.
    Warning,
    /// Normal but significant conditions.
    Notice,
    /// Informational messages.
    Informational,
    /// Debug-level messages.
    Debug,
}

impl Priority {
    /// The uppercase name printed inside the block header, e.g. `"ERROR"`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Emergency => "EMERGENCY",
            Self::Alert => "ALERT",
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Notice => "NOTICE",
            Self::Informational => "INFORMATIONAL",
            Self::Debug => "DEBUG",
        }
    }

    /// Numeric syslog rank of the level; lower is more severe.
    ///
    /// Useful as a severity threshold when deciding which levels a custom
    /// sink or resolver should pass through:
    ///
    /// ```
    /// use blackbox::Priority;
    ///
    /// fn at_least_warning(level: Priority) -> bool {
    ///     level.rank() <= Priority::Warning.rank()
    /// }
    ///
    /// assert!(at_least_warning(Priority::Error));
    /// assert!(!at_least_warning(Priority::Notice));
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
