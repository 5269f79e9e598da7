//! Provider identifier extraction.
//!
//! IDs are picked out of free text: release names carrying `tt0133093` or
//! `tmdb-603`, and pasted provider URLs.

use regex::Regex;
use std::sync::LazyLock;
use tw_core::MediaIds;

static IMDB_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tt[0-9]{6,}").expect("imdb id regex"));

static IMDB_ID_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^tt[0-9]{6,}$").expect("exact imdb id regex"));

// Old-style IMDb links: `imdb.com/Title?0133093`.
static IMDB_TITLE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/Title\?([0-9]{6,})").expect("imdb title url regex"));

static TMDB_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:tmdbid|tmdb)[ ._-]?([0-9]+)").expect("tmdb tag regex")
});

static TMDB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"themoviedb\.org/(?:movie|tv)/([0-9]+)").expect("tmdb url regex")
});

static TVDB_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:tvdbid|tvdb)[ ._-]?([0-9]+)").expect("tvdb tag regex")
});

static TVDB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"thetvdb\.com/(?:movies|series)/([0-9]+)").expect("tvdb url regex")
});

/// Whether `s` is exactly an IMDb id (`tt` followed by at least six digits).
pub fn is_valid_imdb_id(s: &str) -> bool {
    IMDB_ID_EXACT.is_match(s)
}

/// Find the first IMDb id in `text`.
///
/// Falls back to `.../Title?0133093` links, reassembled as `tt0133093`.
pub fn detect_imdb_id(text: &str) -> Option<String> {
    if let Some(m) = IMDB_ID.find(text) {
        return Some(m.as_str().to_string());
    }
    IMDB_TITLE_URL
        .captures(text)
        .map(|caps| format!("tt{}", &caps[1]))
}

/// Find the first TMDB id in `text`.
///
/// Matches `tmdb-603`, `tmdbid=603`-style tags first, then
/// `themoviedb.org/movie/603` links. Numbers that do not fit a `u32` are
/// ignored.
pub fn detect_tmdb_id(text: &str) -> Option<u32> {
    [&*TMDB_TAG, &*TMDB_URL].into_iter().find_map(|re| {
        let caps = re.captures(text)?;
        match caps[1].parse::<u32>() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::trace!(value = &caps[1], "ignoring tmdb id: {e}");
                None
            }
        }
    })
}

/// Find the first TVDB id in `text`.
pub fn detect_tvdb_id(text: &str) -> Option<String> {
    [&*TVDB_TAG, &*TVDB_URL]
        .into_iter()
        .find_map(|re| re.captures(text).map(|caps| caps[1].to_string()))
}

/// Collect every provider id found in `text`.
pub fn detect_ids(text: &str) -> MediaIds {
    MediaIds {
        imdb: detect_imdb_id(text),
        tmdb: detect_tmdb_id(text),
        tvdb: detect_tvdb_id(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_imdb_ids() {
        assert!(is_valid_imdb_id("tt1234567"));
        assert!(is_valid_imdb_id("tt0133093"));
        assert!(is_valid_imdb_id("tt12345678"));
    }

    #[test]
    fn invalid_imdb_ids() {
        assert!(!is_valid_imdb_id("1234567"));
        assert!(!is_valid_imdb_id("tt12345"));
        assert!(!is_valid_imdb_id("xtt1234567"));
        assert!(!is_valid_imdb_id("tt1234567x"));
        assert!(!is_valid_imdb_id(""));
    }

    #[test]
    fn imdb_id_in_release_name() {
        assert_eq!(
            detect_imdb_id("The.Matrix.1999.tt0133093.1080p.mkv").as_deref(),
            Some("tt0133093")
        );
    }

    #[test]
    fn imdb_id_from_title_url() {
        assert_eq!(
            detect_imdb_id("http://www.imdb.com/Title?0133093").as_deref(),
            Some("tt0133093")
        );
    }

    #[test]
    fn imdb_id_missing() {
        assert_eq!(detect_imdb_id("The Matrix (1999)"), None);
    }

    #[test]
    fn tmdb_id_in_release_name() {
        assert_eq!(detect_tmdb_id("Avatar (tmdb-19995).mkv"), Some(19995));
        assert_eq!(detect_tmdb_id("Avatar {tmdbid 19995}"), Some(19995));
        assert_eq!(detect_tmdb_id("Avatar.TMDB_19995"), Some(19995));
        assert_eq!(detect_tmdb_id("Avatar tmdb19995"), Some(19995));
    }

    #[test]
    fn tmdb_id_from_url() {
        assert_eq!(
            detect_tmdb_id("https://www.themoviedb.org/movie/603-the-matrix"),
            Some(603)
        );
        assert_eq!(detect_tmdb_id("https://www.themoviedb.org/tv/1399"), Some(1399));
    }

    #[test]
    fn tmdb_id_missing_or_overflowing() {
        assert_eq!(detect_tmdb_id("Avatar (2009).mkv"), None);
        assert_eq!(detect_tmdb_id("tmdb-99999999999"), None);
    }

    #[test]
    fn tvdb_ids() {
        assert_eq!(detect_tvdb_id("Lost [tvdbid-73739]").as_deref(), Some("73739"));
        assert_eq!(
            detect_tvdb_id("https://thetvdb.com/series/81189").as_deref(),
            Some("81189")
        );
        assert_eq!(detect_tvdb_id("Lost S01E01"), None);
    }

    #[test]
    fn detect_all_ids() {
        let ids = detect_ids("Movie tt0133093 tmdb-603 tvdb-1234");
        assert_eq!(ids.imdb.as_deref(), Some("tt0133093"));
        assert_eq!(ids.tmdb, Some(603));
        assert_eq!(ids.tvdb.as_deref(), Some("1234"));
        assert!(detect_ids("Movie").is_empty());
    }
}
