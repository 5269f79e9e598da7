//! Title/year segmentation.
//!
//! A cleaned input is tokenized and walked twice. The first pass blanks hard
//! stopwords, then the release year is anchored, then a second pass blanks
//! soft stopwords after the year. The title is whatever survives before the
//! earliest stopword or the year, whichever comes first.

use chrono::Datelike;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tw_core::{Error, IdentityConfig, Result};

use crate::ids::is_valid_imdb_id;
use crate::lexicon::{
    is_hard_stopword, is_roman_numeral, is_soft_stopword, CLEANWORDS, DELIMITER_CLASS,
    MIN_TRUNCATION_POSITION, WORD_BOUNDARY_CLASS,
};
use crate::tokenizer::{tokenize, Token};

pub(crate) static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[A-Za-z0-9_]{2,4}$").expect("extension regex"));

static RESOLUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i){DELIMITER_CLASS}[0-9]{{3,4}}x[0-9]{{3,4}}{DELIMITER_CLASS}"
    ))
    .expect("resolution regex")
});

static CLEANWORD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CLEANWORDS
        .iter()
        .map(|word| {
            Regex::new(&format!("(?i){DELIMITER_CLASS}{}", regex::escape(word)))
                .expect("cleanword regex")
        })
        .collect()
});

/// Result of segmenting one string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Clean title. Empty when identification failed.
    pub title: String,
    /// Release year, if one was found.
    pub year: Option<u16>,
}

impl Identity {
    /// Whether identification failed.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }
}

/// Earliest position at which a stopword truncates the title.
///
/// Positions below [`MIN_TRUNCATION_POSITION`] never lower the floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StopwordFloor {
    position: Option<usize>,
}

impl StopwordFloor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stopword at `position`. Returns whether the floor moved.
    pub fn observe(&mut self, position: usize) -> bool {
        let lowers = position >= MIN_TRUNCATION_POSITION
            && self.position.map_or(true, |current| position < current);
        if lowers {
            self.position = Some(position);
        }
        lowers
    }

    /// Current floor, if any stopword lowered it.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Exclusive end of the title for a split of `len` tokens.
    pub fn end(&self, len: usize) -> usize {
        self.position.map_or(len, |p| p.min(len))
    }
}

/// The token recognized as release year.
///
/// `position` is `None` when the year came from a bracket group and therefore
/// does not bound the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearAnchor {
    pub position: Option<usize>,
    pub value: u16,
}

impl YearAnchor {
    /// Parse `token` as a year strictly between 1800 and `reference_year + 5`.
    pub fn parse_year(token: &str, reference_year: i32) -> Option<u16> {
        if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year: u16 = token.parse().ok()?;
        (1800 < i32::from(year) && i32::from(year) < reference_year.saturating_add(5)).then_some(year)
    }

    /// Scan main tokens end-to-start, then bracket tokens front-to-back.
    ///
    /// The first token is never an inline year: a leading number such as
    /// `2001` or `1917` is title text. An inline year is blanked in `tokens`.
    pub fn find(tokens: &mut [Token], brackets: &[String], reference_year: i32) -> Option<Self> {
        for token in tokens.iter_mut().skip(1).rev() {
            if let Some(value) = Self::parse_year(token.text(), reference_year) {
                token.blank();
                return Some(Self {
                    position: Some(token.position()),
                    value,
                });
            }
        }

        brackets
            .iter()
            .find_map(|token| Self::parse_year(token, reference_year))
            .map(|value| Self {
                position: None,
                value,
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bounds {
    Anywhere,
    // Match must touch a word boundary or the string edge on both sides.
    Delimited,
}

/// Compiled, case-insensitive bad-word rules.
#[derive(Debug, Clone)]
pub struct BadWords {
    rules: Vec<Regex>,
    bounds: Bounds,
}

impl BadWords {
    /// Compile `patterns`, logging and skipping any rule that fails.
    pub fn compile<S: AsRef<str>>(patterns: &[S], size_limit: usize) -> Self {
        Self::build(patterns, size_limit, Bounds::Anywhere)
    }

    /// Compile `patterns` so that each only matches a whole delimited segment.
    pub fn compile_delimited<S: AsRef<str>>(patterns: &[S], size_limit: usize) -> Self {
        Self::build(patterns, size_limit, Bounds::Delimited)
    }

    /// Compile `patterns`, failing on the first invalid rule.
    pub fn try_compile<S: AsRef<str>>(patterns: &[S], size_limit: usize) -> Result<Self> {
        let rules = patterns
            .iter()
            .map(AsRef::as_ref)
            .filter(|p| !p.trim().is_empty())
            .map(|p| compile_rule(p, size_limit, Bounds::Anywhere))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rules,
            bounds: Bounds::Anywhere,
        })
    }

    fn build<S: AsRef<str>>(patterns: &[S], size_limit: usize, bounds: Bounds) -> Self {
        let mut rules = Vec::with_capacity(patterns.len());
        for pattern in patterns.iter().map(AsRef::as_ref) {
            if pattern.trim().is_empty() {
                continue;
            }
            match compile_rule(pattern, size_limit, bounds) {
                Ok(rule) => rules.push(rule),
                Err(e) => tracing::warn!("Skipping bad word: {e}"),
            }
        }
        Self { rules, bounds }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Remove every match of every rule from `text`.
    ///
    /// Delimited rules keep the leading delimiter and are reapplied until the
    /// text stops changing, so adjacent matches are all removed.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            match self.bounds {
                Bounds::Anywhere => out = rule.replace_all(&out, "").into_owned(),
                Bounds::Delimited => out = replace_until_stable(rule, &out),
            }
        }
        out
    }
}

fn compile_rule(pattern: &str, size_limit: usize, bounds: Bounds) -> Result<Regex> {
    let source = match bounds {
        Bounds::Anywhere => pattern.to_string(),
        Bounds::Delimited => delimited(&format!("(?:{pattern})")),
    };
    RegexBuilder::new(&source)
        .case_insensitive(true)
        .size_limit(size_limit)
        .dfa_size_limit(size_limit)
        .build()
        .map_err(|e| Error::invalid_pattern(pattern, e))
}

/// Wrap `body` so it only matches between [`WORD_BOUNDARY_CLASS`] characters
/// or string edges, capturing the left boundary as group 1.
pub(crate) fn delimited(body: &str) -> String {
    format!("(^|{WORD_BOUNDARY_CLASS}){body}({WORD_BOUNDARY_CLASS}|$)")
}

/// Replace matches of a [`delimited`] regex with their left delimiter until the
/// text stops changing.
pub(crate) fn replace_until_stable(re: &Regex, text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = re.replace_all(&current, "$1").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Title/year segmenter bound to one [`IdentityConfig`].
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: IdentityConfig,
    bad_words: BadWords,
    delimited_bad_words: BadWords,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(IdentityConfig::default())
    }
}

impl Segmenter {
    /// Create a segmenter, compiling the configured bad words.
    pub fn new(config: IdentityConfig) -> Self {
        for warning in config.validate() {
            tracing::warn!("identity config: {warning}");
        }
        let bad_words = BadWords::compile(&config.bad_words, config.pattern_size_limit);
        let delimited_bad_words =
            BadWords::compile_delimited(&config.bad_words, config.pattern_size_limit);
        Self {
            config,
            bad_words,
            delimited_bad_words,
        }
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    pub(crate) fn delimited_bad_words(&self) -> &BadWords {
        &self.delimited_bad_words
    }

    /// Year bounding release-year detection.
    pub fn reference_year(&self) -> i32 {
        self.config
            .reference_year
            .unwrap_or_else(|| chrono::Utc::now().year())
    }

    /// Apply the text-level cleanup that runs before tokenization.
    ///
    /// Strips the extension, one `WIDTHxHEIGHT` resolution, the cleanwords and
    /// the configured bad words. If the bad words would leave nothing, their
    /// removal is undone.
    pub fn clean(&self, filename: &str) -> String {
        let mut text = EXTENSION.replace(filename, "").into_owned();
        text = RESOLUTION.replace(&text, " ").into_owned();
        for re in CLEANWORD_PATTERNS.iter() {
            text = re.replace(&text, " ").into_owned();
        }

        let stripped = self.bad_words.apply(&text);
        if stripped.trim().is_empty() {
            tracing::trace!(input = filename, "bad words removed everything; reverting");
            text
        } else {
            stripped
        }
    }

    /// Split `filename` into a clean title and an optional release year.
    pub fn segment(&self, filename: &str) -> Identity {
        if filename.trim().is_empty() {
            tracing::trace!("empty input; nothing to segment");
            return Identity::default();
        }

        let cleaned = self.clean(filename);
        let mut pool = tokenize(&cleaned);
        let tokens = &mut pool.main;
        let mut floor = StopwordFloor::new();

        for token in tokens.iter_mut() {
            if is_hard_stopword(token.text()) {
                floor.observe(token.position());
                tracing::trace!(token = token.text(), position = token.position(), "hard stopword");
                token.blank();
            } else if is_valid_imdb_id(token.text()) {
                token.blank();
            }
        }

        let anchor = YearAnchor::find(tokens, &pool.brackets, self.reference_year());
        let inline_year = anchor.and_then(|a| a.position);

        for token in tokens.iter_mut().skip(inline_year.unwrap_or(0)) {
            if is_soft_stopword(token.text()) {
                floor.observe(token.position());
                tracing::trace!(token = token.text(), position = token.position(), "soft stopword");
                token.blank();
            } else if is_valid_imdb_id(token.text()) {
                token.blank();
            }
        }

        let mut end = floor.end(tokens.len());
        if let Some(position) = inline_year {
            end = end.min(position);
        }

        let mut title = reconstruct(&tokens[..end]);
        if title.is_empty() {
            title = cleaned.trim().to_string();
        }

        let identity = Identity {
            title,
            year: anchor.map(|a| a.value),
        };
        tracing::debug!(
            input = filename,
            title = %identity.title,
            year = ?identity.year,
            "segmented"
        );
        identity
    }
}

fn reconstruct(tokens: &[Token]) -> String {
    let words: Vec<String> = tokens
        .iter()
        .filter(|t| !t.is_blank())
        .map(|t| {
            if is_roman_numeral(t.text()) {
                t.text().to_uppercase()
            } else {
                t.text().to_string()
            }
        })
        .collect();
    words.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> Segmenter {
        Segmenter::new(IdentityConfig::builder().reference_year(2026).build())
    }

    fn seg(input: &str) -> (String, Option<u16>) {
        let id = segmenter().segment(input);
        (id.title, id.year)
    }

    #[test]
    fn scene_release_with_year() {
        assert_eq!(
            seg("Inception.2010.1080p.BluRay.x264-GROUP.mkv"),
            ("Inception".into(), Some(2010))
        );
    }

    #[test]
    fn stopwords_without_year() {
        assert_eq!(
            seg("The.Matrix.Reloaded.DVDRip.XviD.mkv"),
            ("The Matrix Reloaded".into(), None)
        );
    }

    #[test]
    fn roman_numeral_survives_early_stopword() {
        assert_eq!(seg("Movie.Part.II.2005.mkv"), ("Movie II".into(), Some(2005)));
    }

    #[test]
    fn roman_numerals_are_uppercased() {
        assert_eq!(seg("Rocky.iv.1985.avi"), ("Rocky IV".into(), Some(1985)));
    }

    #[test]
    fn other_case_is_preserved() {
        assert_eq!(seg("the.mATRIX.1999.mkv"), ("the mATRIX".into(), Some(1999)));
    }

    #[test]
    fn last_year_wins() {
        assert_eq!(seg("2001.A.Space.Odyssey.1968.mkv"), ("2001 A Space Odyssey".into(), Some(1968)));
    }

    #[test]
    fn parenthesized_year() {
        assert_eq!(seg("Movie (2020)"), ("Movie".into(), Some(2020)));
    }

    #[test]
    fn out_of_range_years_are_ignored() {
        assert_eq!(seg("Movie.1799.mkv"), ("Movie 1799".into(), None));
        assert_eq!(seg("Movie.2031.mkv"), ("Movie 2031".into(), None));
        assert_eq!(seg("Movie.2030.mkv"), ("Movie".into(), Some(2030)));
    }

    #[test]
    fn bracket_year_does_not_bound_title() {
        assert_eq!(
            seg("Movie Title [1080p] [2010].mkv"),
            ("Movie Title".into(), Some(2010))
        );
    }

    #[test]
    fn soft_stopwords_after_year() {
        assert_eq!(
            seg("Heat.1995.Extended.Remastered.mkv"),
            ("Heat".into(), Some(1995))
        );
        assert_eq!(
            seg("Some.Great.Movie.Extended.Cut.mkv"),
            ("Some Great Movie".into(), None)
        );
    }

    #[test]
    fn resolution_and_cleanwords_are_removed() {
        assert_eq!(
            seg("Movie.Name.1920x1080.WEB-DL.mkv"),
            ("Movie Name".into(), None)
        );
        assert_eq!(seg("Movie.Name.23.976.mkv"), ("Movie Name".into(), None));
    }

    #[test]
    fn imdb_ids_are_blanked() {
        assert_eq!(
            seg("Movie.tt0133093.1999.mkv"),
            ("Movie".into(), Some(1999))
        );
    }

    #[test]
    fn leading_number_is_title_text() {
        assert_eq!(seg("1999.mkv"), ("1999".into(), None));
        assert_eq!(
            seg("2001.A.Space.Odyssey.1080p.BluRay.x264.mkv"),
            ("2001 A Space Odyssey".into(), None)
        );
        assert_eq!(seg("1917.1080p.BluRay.mkv"), ("1917".into(), None));
        assert_eq!(seg("1917.2019.1080p.mkv"), ("1917".into(), Some(2019)));
    }

    #[test]
    fn bracket_only_year_keeps_title() {
        assert_eq!(seg("[1999]"), ("1999".into(), Some(1999)));
    }

    #[test]
    fn extension_must_be_ascii() {
        assert_eq!(seg("Le.Café"), ("Le Café".into(), None));
        assert_eq!(seg("Le.Café.avi"), ("Le Café".into(), None));
    }

    #[test]
    fn empty_input() {
        assert_eq!(segmenter().segment(""), Identity::default());
        assert_eq!(segmenter().segment("   "), Identity::default());
    }

    #[test]
    fn bad_words_are_removed() {
        let s = Segmenter::new(
            IdentityConfig::builder()
                .bad_word("SAMPLE")
                .reference_year(2026)
                .build(),
        );
        assert_eq!(s.segment("Movie.sample.2011.mkv").title, "Movie");
    }

    #[test]
    fn bad_words_removing_everything_are_reverted() {
        let s = Segmenter::new(IdentityConfig::builder().bad_word(".*").build());
        assert_eq!(s.clean("Movie.mkv"), "Movie");
        assert_eq!(s.segment("Movie.mkv").title, "Movie");
    }

    #[test]
    fn invalid_bad_word_is_skipped() {
        let s = Segmenter::new(
            IdentityConfig::builder()
                .bad_words(["(unclosed", "junk"])
                .reference_year(2026)
                .build(),
        );
        assert_eq!(s.segment("Movie.junk.2011.mkv").title, "Movie");
    }

    #[test]
    fn try_compile_reports_invalid_rule() {
        let err = BadWords::try_compile(&["ok", "(unclosed"], 1 << 20).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
        assert_eq!(BadWords::try_compile(&["ok", " "], 1 << 20).unwrap().len(), 1);
    }

    #[test]
    fn size_limit_rejects_large_rules() {
        let words = BadWords::compile(&["[a-z]{1000}"], 16);
        assert!(words.is_empty());
    }

    #[test]
    fn delimited_bad_words_need_both_bounds() {
        let words = BadWords::compile_delimited(&["ts"], 1 << 20);
        assert_eq!(words.apply("Shows.ts.ts.x"), "Shows.x");
        assert_eq!(words.apply("Show ts"), "Show ");
        assert_eq!(words.apply("VIDEO_TS"), "VIDEO_TS");
        assert_eq!(words.apply("Tsunami"), "Tsunami");
    }

    #[test]
    fn floor_ignores_first_two_positions() {
        let mut floor = StopwordFloor::new();
        assert!(!floor.observe(0));
        assert!(!floor.observe(1));
        assert_eq!(floor.position(), None);
        assert_eq!(floor.end(5), 5);
    }

    #[test]
    fn floor_only_moves_down() {
        let mut floor = StopwordFloor::new();
        assert!(floor.observe(4));
        assert!(!floor.observe(6));
        assert!(floor.observe(2));
        assert!(!floor.observe(3));
        assert_eq!(floor.position(), Some(2));
        assert_eq!(floor.end(5), 2);
    }

    #[test]
    fn year_parsing_bounds() {
        assert_eq!(YearAnchor::parse_year("1801", 2026), Some(1801));
        assert_eq!(YearAnchor::parse_year("1800", 2026), None);
        assert_eq!(YearAnchor::parse_year("2030", 2026), Some(2030));
        assert_eq!(YearAnchor::parse_year("2031", 2026), None);
        assert_eq!(YearAnchor::parse_year("199", 2026), None);
        assert_eq!(YearAnchor::parse_year("19999", 2026), None);
        assert_eq!(YearAnchor::parse_year("２０２０", 2026), None);
    }

    #[test]
    fn segment_is_idempotent_on_titles() {
        for input in [
            "Inception.2010.1080p.BluRay.x264-GROUP.mkv",
            "The.Matrix.Reloaded.DVDRip.XviD.mkv",
            "Movie.Part.II.2005.mkv",
            "2001.A.Space.Odyssey.1080p.BluRay.x264.mkv",
            "1917.1080p.BluRay.mkv",
        ] {
            let first = segmenter().segment(input).title;
            assert_eq!(segmenter().segment(&first).title, first, "input: {input}");
        }
    }

    #[test]
    fn segmenter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Segmenter>();
    }
}
