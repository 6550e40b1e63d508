//! Application error types.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Notification error: {message}")]
    Notify { message: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn notify(message: impl Into<String>) -> Self {
        Self::Notify {
            message: message.into(),
        }
    }

    /// Check if this error should abort the application.
    ///
    /// Config and notification failures degrade to defaults/no-ops and are
    /// only logged; losing the terminal is the one thing we cannot recover.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Terminal { .. })
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("bad toml");
        assert_eq!(err.to_string(), "Configuration error: bad toml");

        let err = Error::notify("dbus unavailable");
        assert!(err.to_string().contains("dbus unavailable"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_only_terminal_errors_are_fatal() {
        assert!(Error::terminal("lost the tty").is_fatal());
        assert!(!Error::config("bad toml").is_fatal());
        assert!(!Error::notify("no bell").is_fatal());
    }

    #[test]
    fn test_context_preserves_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let result: std::result::Result<(), std::io::Error> = Err(io_err);
        let err = result.context("saving settings").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
