//! Provider identifiers attached to a scanned item.
//!
//! The ID extractor fills a [`MediaIds`] map from file and folder names;
//! metadata-provider clients read it to skip a title search entirely.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Season number reported when no season could be determined.
///
/// Downstream episode detection never uses `0` or a missing value for this.
pub const UNKNOWN_SEASON: i32 = -1;

/// Metadata provider an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Imdb,
    Tmdb,
    Tvdb,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Imdb => write!(f, "imdb"),
            Provider::Tmdb => write!(f, "tmdb"),
            Provider::Tvdb => write!(f, "tvdb"),
        }
    }
}

/// Identifier map for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaIds {
    /// IMDb id including the `tt` prefix.
    pub imdb: Option<String>,
    /// Numeric TMDB id.
    pub tmdb: Option<u32>,
    /// TVDB id as found in the text.
    pub tvdb: Option<String>,
}

impl MediaIds {
    /// Whether no identifier is known.
    pub fn is_empty(&self) -> bool {
        self.imdb.is_none() && self.tmdb.is_none() && self.tvdb.is_none()
    }

    /// Fill the gaps in `self` from `other`. Values already present win.
    pub fn merge(&mut self, other: MediaIds) {
        if self.imdb.is_none() {
            self.imdb = other.imdb;
        }
        if self.tmdb.is_none() {
            self.tmdb = other.tmdb;
        }
        if self.tvdb.is_none() {
            self.tvdb = other.tvdb;
        }
    }

    /// Look up the identifier for one provider as a string.
    pub fn get(&self, provider: Provider) -> Option<String> {
        match provider {
            Provider::Imdb => self.imdb.clone(),
            Provider::Tmdb => self.tmdb.map(|id| id.to_string()),
            Provider::Tvdb => self.tvdb.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        assert!(MediaIds::default().is_empty());
    }

    #[test]
    fn merge_keeps_existing_values() {
        let mut ids = MediaIds {
            imdb: Some("tt0133093".into()),
            ..Default::default()
        };
        ids.merge(MediaIds {
            imdb: Some("tt9999999".into()),
            tmdb: Some(603),
            tvdb: None,
        });
        assert_eq!(ids.imdb.as_deref(), Some("tt0133093"));
        assert_eq!(ids.tmdb, Some(603));
        assert!(ids.tvdb.is_none());
    }

    #[test]
    fn get_by_provider() {
        let ids = MediaIds {
            imdb: None,
            tmdb: Some(19995),
            tvdb: Some("81189".into()),
        };
        assert_eq!(ids.get(Provider::Tmdb).as_deref(), Some("19995"));
        assert_eq!(ids.get(Provider::Tvdb).as_deref(), Some("81189"));
        assert_eq!(ids.get(Provider::Imdb), None);
    }

    #[test]
    fn provider_serializes_lowercase() {
        let json = serde_json::to_string(&Provider::Tvdb).unwrap();
        assert_eq!(json, "\"tvdb\"");
        assert_eq!(Provider::Imdb.to_string(), "imdb");
    }

    #[test]
    fn serde_roundtrip() {
        let ids = MediaIds {
            imdb: Some("tt1375666".into()),
            tmdb: Some(27205),
            tvdb: None,
        };
        let json = serde_json::to_string(&ids).unwrap();
        let back: MediaIds = serde_json::from_str(&json).unwrap();
        assert_eq!(ids, back);
    }
}
