//! Stopword stripping ahead of season/episode detection.
//!
//! Works on the raw name rather than on tokens, so every stopword has to be a
//! whole segment: `Show.S01E02.720p.HDTV` loses `720p` and `HDTV`, while
//! `VIDEO_TS` and `Tsunami` are left alone.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use crate::lexicon::HARD_STOPWORDS;
use crate::segment::{delimited, replace_until_stable, Segmenter, EXTENSION};

static BOUNDED_HARD_STOPWORDS: LazyLock<Regex> = LazyLock::new(|| {
    let mut words: Vec<&str> = HARD_STOPWORDS.iter().copied().collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&delimited(&format!("(?:{alternation})")))
        .case_insensitive(true)
        .build()
        .expect("bounded stopword regex")
});

impl Segmenter {
    /// Remove hard stopwords and configured bad words that form whole
    /// segments of `filename`, keeping the extension.
    ///
    /// The delimiter in front of each removed word is kept.
    pub fn strip_tv_stopwords(&self, filename: &str) -> String {
        let (base, extension) = match EXTENSION.find(filename) {
            Some(m) => (&filename[..m.start()], m.as_str()),
            None => (filename, ""),
        };

        let stripped = replace_until_stable(&BOUNDED_HARD_STOPWORDS, base);
        let mut out = self.delimited_bad_words().apply(&stripped);
        out.push_str(extension);

        tracing::trace!(input = filename, output = %out, "stripped episode stopwords");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw_core::IdentityConfig;

    #[test]
    fn strips_release_noise() {
        let s = Segmenter::default();
        assert_eq!(
            s.strip_tv_stopwords("Show.Name.S01E02.720p.HDTV.x264-GRP.mkv"),
            "Show.Name.S01E02.GRP.mkv"
        );
    }

    #[test]
    fn requires_bounds_on_both_sides() {
        let s = Segmenter::default();
        assert_eq!(s.strip_tv_stopwords("VIDEO_TS.IFO"), "VIDEO_TS.IFO");
        assert_eq!(s.strip_tv_stopwords("VIDEO_TS"), "VIDEO_TS");
        assert_eq!(
            s.strip_tv_stopwords("Tsunami.S01E01.mkv"),
            "Tsunami.S01E01.mkv"
        );
        assert_eq!(s.strip_tv_stopwords("Show.1x01.DVDRipped"), "Show.1x01.DVDRipped");
    }

    #[test]
    fn strips_at_string_edges() {
        let s = Segmenter::default();
        assert_eq!(s.strip_tv_stopwords("HDTV Show 1x01"), "Show 1x01");
        assert_eq!(s.strip_tv_stopwords("Show 1x01 HDTV"), "Show 1x01 ");
    }

    #[test]
    fn keeps_extension_untouched() {
        let s = Segmenter::default();
        assert_eq!(s.strip_tv_stopwords("Show.S01E01.avi"), "Show.S01E01.avi");
        assert_eq!(s.strip_tv_stopwords("Show.S01E01.DVDRip.ts"), "Show.S01E01..ts");
    }

    #[test]
    fn applies_bounded_bad_words() {
        let s = Segmenter::new(IdentityConfig::builder().bad_word("GRP").build());
        assert_eq!(
            s.strip_tv_stopwords("Show.Name.S01E02.720p-GRP.mkv"),
            "Show.Name.S01E02..mkv"
        );
        assert_eq!(
            s.strip_tv_stopwords("Show.GRPX.S01E02.mkv"),
            "Show.GRPX.S01E02.mkv"
        );
    }
}
