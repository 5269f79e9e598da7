//! # tw-parser
//!
//! Turns raw media file and folder names into a structured identity: a clean
//! title, an optional release year, embedded provider ids and a trailing
//! language tag.
//!
//! ## Quick Start
//!
//! ```
//! use tw_parser::segment;
//!
//! let id = segment("Inception.2010.1080p.BluRay.x264-GROUP.mkv");
//! assert_eq!(id.title, "Inception");
//! assert_eq!(id.year, Some(2010));
//! ```
//!
//! ## Choosing between candidates
//!
//! ```
//! use tw_parser::{IdentityConfig, Segmenter};
//!
//! let config = IdentityConfig::builder()
//!     .bad_word("SAMPLE")
//!     .reference_year(2026)
//!     .build();
//!
//! let segmenter = Segmenter::new(config);
//! let best = segmenter.pick_cleanest(&["MOVIE.2020.1080p", "Movie (2020)"]);
//! assert_eq!(best.original, "Movie (2020)");
//! assert_eq!(best.clean, "Movie");
//! ```

pub mod episode;
pub mod identify;
pub mod ids;
pub mod language;
pub mod lexicon;
pub mod scorer;
pub mod segment;
pub mod tokenizer;

pub use identify::PathIdentity;
pub use ids::{detect_ids, detect_imdb_id, detect_tmdb_id, detect_tvdb_id, is_valid_imdb_id};
pub use language::{
    does_string_end_with_language, find_language_in_string, iso3_for, language_name, locale_for,
};
pub use scorer::Candidate;
pub use segment::{BadWords, Identity, Segmenter, StopwordFloor, YearAnchor};
pub use tokenizer::{tokenize, Token, TokenPool};
pub use tw_core::{IdentityConfig, MediaIds, UNKNOWN_SEASON};

use std::path::Path;

/// Segment a file or folder name with the default configuration.
///
/// For bad words or a pinned reference year, use [`Segmenter`].
///
/// ```
/// let id = tw_parser::segment("The.Matrix.Reloaded.DVDRip.XviD.mkv");
/// assert_eq!(id.title, "The Matrix Reloaded");
/// assert_eq!(id.year, None);
/// ```
pub fn segment(filename: &str) -> Identity {
    Segmenter::default().segment(filename)
}

/// Pick the cleanest of several names for the same item with the default
/// configuration.
pub fn pick_cleanest<S: AsRef<str>>(candidates: &[S]) -> Candidate {
    Segmenter::default().pick_cleanest(candidates)
}

/// Strip whole-segment hard stopwords before episode detection.
///
/// ```
/// assert_eq!(
///     tw_parser::strip_tv_stopwords("Show.720p.S01E02.mkv"),
///     "Show.S01E02.mkv"
/// );
/// ```
pub fn strip_tv_stopwords(filename: &str) -> String {
    Segmenter::default().strip_tv_stopwords(filename)
}

/// Identify a file from its path with the default configuration.
pub fn identify_path(path: impl AsRef<Path>) -> PathIdentity {
    Segmenter::default().identify_path(path.as_ref())
}
