//! Sentinel markers.

use crate::config::ConfigError;

/// Default start marker.
pub const DEFAULT_START_MARKER: &str = "<!-- CONTRIB-PROJECTS:START -->";

/// Default end marker.
pub const DEFAULT_END_MARKER: &str = "<!-- CONTRIB-PROJECTS:END -->";

/// Literal strings delimiting the rewritten region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    start: String,
    end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

impl Markers {
    /// Creates a custom marker pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if either marker is blank or both are
    /// identical.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, ConfigError> {
        let start = start.into();
        let end = end.into();

        if start.trim().is_empty() {
            return Err(ConfigError::Invalid {
                name: "start marker",
                message: "must not be empty".to_string(),
            });
        }
        if end.trim().is_empty() {
            return Err(ConfigError::Invalid {
                name: "end marker",
                message: "must not be empty".to_string(),
            });
        }
        if start == end {
            return Err(ConfigError::Invalid {
                name: "end marker",
                message: "must differ from the start marker".to_string(),
            });
        }

        Ok(Self { start, end })
    }

    /// Returns the start marker.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the end marker.
    pub fn end(&self) -> &str {
        &self.end
    }
}
