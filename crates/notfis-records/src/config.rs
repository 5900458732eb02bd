//! Record building options

use notfis_field::Encoding;
use serde::{Deserialize, Serialize};

/// Options applied to every column of a record build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotfisConfig {
    /// Characters allowed in alphanumeric columns (default: UTF-8)
    pub encoding: Encoding,
    /// Text placed between field messages of an aggregated error
    /// (default: newline)
    pub error_separator: String,
}

impl Default for NotfisConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::Utf8,
            error_separator: "\n".to_string(),
        }
    }
}

impl NotfisConfig {
    /// Create a new configuration with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the encoding
    #[must_use]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Restrict alphanumeric columns to ASCII
    #[must_use]
    pub fn ascii(self) -> Self {
        self.encoding(Encoding::Ascii)
    }

    /// Set the aggregated error separator
    #[must_use]
    pub fn error_separator(mut self, separator: impl Into<String>) -> Self {
        self.error_separator = separator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NotfisConfig::default();
        assert_eq!(config.encoding, Encoding::Utf8);
        assert_eq!(config.error_separator, "\n");
    }

    #[test]
    fn test_config_builder() {
        let config = NotfisConfig::new().ascii().error_separator("; ");
        assert_eq!(config.encoding, Encoding::Ascii);
        assert_eq!(config.error_separator, "; ");
    }
}
