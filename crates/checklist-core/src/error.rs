use std::fmt;

/// Machine-readable error codes shared by the core and the panel binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigNotFound,
    ConfigParseError,
    IndexOutOfRange,
    TerminalUnavailable,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigNotFound => "E1001",
            Self::ConfigParseError => "E1002",
            Self::IndexOutOfRange => "E2001",
            Self::TerminalUnavailable => "E5001",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigNotFound => "Config file not found",
            Self::ConfigParseError => "Config file parse error",
            Self::IndexOutOfRange => "Checklist index out of range",
            Self::TerminalUnavailable => "Terminal unavailable",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to the user.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound => Some("Check the --config path or omit it to use defaults."),
            Self::ConfigParseError => Some("Fix the TOML syntax in the config file and retry."),
            Self::IndexOutOfRange => Some("Check `is_selectable` before deleting by index."),
            Self::TerminalUnavailable => {
                Some("Run from an interactive terminal, or use `todo show` instead.")
            }
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors reported by the checked [`Checklist`](crate::Checklist) operations.
///
/// The unchecked operations (e.g. [`Checklist::delete`](crate::Checklist::delete))
/// panic instead; these variants exist for callers that would rather branch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    /// The index does not name an item in the current sequence.
    #[error("{}: index {index} out of range for checklist of length {len}", ErrorCode::IndexOutOfRange.code())]
    IndexOutOfRange { index: usize, len: usize },
}

impl ChecklistError {
    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        self.code().hint()
    }
}
