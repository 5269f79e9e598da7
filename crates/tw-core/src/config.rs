//! Identity extraction configuration.
//!
//! [`IdentityConfig`] is deserialized from JSON and carries the user-editable
//! bad-word list plus the knobs that bound year detection and pattern
//! compilation. Every field defaults sensibly so a completely empty `{}` file
//! is valid.
//!
//! ```
//! use tw_core::config::IdentityConfig;
//!
//! let config = IdentityConfig::builder()
//!     .bad_word("GERMAN")
//!     .reference_year(2024)
//!     .build();
//! assert_eq!(config.bad_words, vec!["GERMAN".to_string()]);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::Error;

/// Default upper bound for the compiled size of one bad-word pattern.
pub const DEFAULT_PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Configuration for title/year extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Regular expressions removed (case-insensitively) from every input
    /// before tokenization.
    pub bad_words: Vec<String>,

    /// Year used to bound release-year detection. `None` means the current
    /// calendar year.
    pub reference_year: Option<i32>,

    /// Maximum compiled size, in bytes, of a single bad-word pattern.
    pub pattern_size_limit: usize,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            bad_words: Vec::new(),
            reference_year: None,
            pattern_size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
        }
    }
}

impl IdentityConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> IdentityConfigBuilder {
        IdentityConfigBuilder::default()
    }

    /// Deserialize an `IdentityConfig` from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None`, the file does not exist, or it cannot be parsed.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => config,
            Err(Error::Io { source }) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No identity config at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to load identity config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for (i, word) in self.bad_words.iter().enumerate() {
            if word.trim().is_empty() {
                warnings.push(format!("bad_words[{i}] is blank and will be ignored"));
            }
        }

        if let Some(year) = self.reference_year {
            if !(1900..=9999).contains(&year) {
                warnings.push(format!(
                    "reference_year {year} is outside 1900..=9999; year detection will be unreliable"
                ));
            }
        }

        if self.pattern_size_limit == 0 {
            warnings.push("pattern_size_limit is 0; every bad word will be rejected".into());
        }

        warnings
    }
}

/// Builder for [`IdentityConfig`].
#[derive(Debug, Clone, Default)]
pub struct IdentityConfigBuilder {
    bad_words: Vec<String>,
    reference_year: Option<i32>,
    pattern_size_limit: Option<usize>,
}

impl IdentityConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one bad-word pattern.
    pub fn bad_word(mut self, pattern: impl Into<String>) -> Self {
        self.bad_words.push(pattern.into());
        self
    }

    /// Append several bad-word patterns.
    pub fn bad_words<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bad_words.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Pin the year used to bound release-year detection.
    ///
    /// Without this the current calendar year is used, which makes results
    /// for near-future years drift over time.
    pub fn reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// Set the maximum compiled size of one bad-word pattern.
    ///
    /// Default: [`DEFAULT_PATTERN_SIZE_LIMIT`]
    pub fn pattern_size_limit(mut self, bytes: usize) -> Self {
        self.pattern_size_limit = Some(bytes);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> IdentityConfig {
        IdentityConfig {
            bad_words: self.bad_words,
            reference_year: self.reference_year,
            pattern_size_limit: self
                .pattern_size_limit
                .unwrap_or(DEFAULT_PATTERN_SIZE_LIMIT),
        }
    }
}
