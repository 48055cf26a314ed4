//! User-facing notifications: the only status channel of a submission.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// How long a short status message stays up.
pub const SHORT_DISPLAY: Duration = Duration::from_secs(3);
/// How long a success message stays up.
pub const LONG_DISPLAY: Duration = Duration::from_secs(5);

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Whether a notification dismisses itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Auto-dismissed after the duration.
    Timed(Duration),
    /// Stays until the user dismisses it.
    Persistent,
}

impl Lifetime {
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Persistent)
    }
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub lifetime: Lifetime,
    pub dismissible: bool,
}

impl Notification {
    /// Create a dismissible notification.
    #[must_use]
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
        lifetime: Lifetime,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            lifetime,
            dismissible: true,
        }
    }

    #[must_use]
    pub fn success(description: impl Into<String>) -> Self {
        Self::new(
            Severity::Success,
            "Success",
            description,
            Lifetime::Timed(LONG_DISPLAY),
        )
    }

    #[must_use]
    pub fn error(description: impl Into<String>) -> Self {
        Self::new(
            Severity::Error,
            "Error",
            description,
            Lifetime::Timed(SHORT_DISPLAY),
        )
    }

    #[must_use]
    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(
            Severity::Warning,
            title,
            description,
            Lifetime::Timed(SHORT_DISPLAY),
        )
    }

    /// Make the notification stay until dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.lifetime = Lifetime::Persistent;
        self
    }
}
