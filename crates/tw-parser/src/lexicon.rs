//! Constant word tables driving title segmentation.
//!
//! All sets are compile-time `phf` sets with lowercase keys; lookups lowercase
//! the probe first, so matching is case-insensitive.

use phf::phf_set;

/// Regex character class of token delimiters: `[](){}`, space, `,._-`.
pub const DELIMITER_CLASS: &str = r"[\[\](){} _,.\-]";

/// [`DELIMITER_CLASS`] without the underscore.
///
/// Used where whole words are cut from the raw string, so that names such as
/// `VIDEO_TS` stay intact.
pub const WORD_BOUNDARY_CLASS: &str = r"[\[\](){} ,.\-]";

/// Lowest token position at which a stopword may truncate the title.
///
/// The first two tokens are always kept as title candidates so a short title
/// that happens to collide with a stopword is not wiped out.
pub const MIN_TRUNCATION_POSITION: usize = 2;

/// Release/encoding noise that is always stripped.
pub static HARD_STOPWORDS: phf::Set<&'static str> = phf_set! {
    // resolution, dynamic range, frame rate
    "480", "480i", "480p", "576", "576i", "576p", "720", "720i", "720p",
    "1080", "1080i", "1080p", "2160", "2160i", "2160p", "4k", "3d",
    "8bit", "10bit", "hd", "uhd", "hdr", "hdr10", "fps", "ntsc",
    // sources
    "bd5", "bd9", "bdrip", "blueray", "bluray", "brrip", "cam", "dsr", "dsrip",
    "dtv", "dvd", "dvd1", "dvd2", "dvd3", "dvd4", "dvd5", "dvd6", "dvd7", "dvd8",
    "dvd9", "dvdivx", "dvdrip", "dvdscr", "dvdscreener", "hddvd", "hdrip",
    "hdtv", "hdtvrip", "hrhd", "hrhdtv", "pdtv", "r3", "r5", "remux", "rsvcd",
    "screener", "svcd", "tc", "telecine", "telesync", "ts", "vhsrip", "web",
    "webdl", "webrip",
    // video codecs and containers
    "avc", "divx", "divx5", "h264", "h265", "hevc", "x264", "x265", "xvid",
    "xvidvd", "ogg", "ogm",
    // audio
    "aac", "ac3", "ac3ld", "ac3md", "atmos", "dd20", "dd51", "ddp", "dts",
    "flac", "mp3", "truehd", "ld", "md",
    // multi-part media
    "cd1", "cd2", "cd3", "cd4", "cd5", "cd6", "cd7", "cd8", "cd9",
    "disc1", "disc2", "disc3", "disc4", "disc5", "disc6", "disc7", "disc8",
    "disc9", "part",
    // scene tags
    "aoe", "dl", "emule", "etm", "ind", "nfo", "nfofix", "ntg", "rerail",
    "roor", "rs", "xxx",
    // provider id prefixes
    "imdb", "imdbid", "tmdb", "tmdbid", "tvdb", "tvdbid",
};

/// Noise words that may also be legitimate title words; stripped in the
/// second segmentation pass only.
pub static SOFT_STOPWORDS: phf::Set<&'static str> = phf_set! {
    "complete", "custom", "dc", "directors", "docu", "doku", "dual", "dubbed",
    "dutch", "extended", "festival", "fragment", "german", "imax", "internal",
    "limited", "multi", "multisubs", "pal", "proper", "read", "readnfo",
    "remastered", "repack", "rerip", "retail", "subbed", "subs", "swedish",
    "theatrical", "uncut", "unrated", "ws",
};

/// Literal noise that spans delimiters and therefore has to be removed before
/// splitting. Each entry only matches when preceded by a delimiter. Longer
/// entries come before their prefixes.
pub const CLEANWORDS: &[&str] = &[
    "24.000", "23.976", "23.98", "24.00", "29.97", "web-dl", "web-rip",
    "blue-ray", "blu-ray", "dts-hd", "dts-ma", "h.264", "h.265", "ddp5.1",
    "dd+5.1", "dd5.1", "ddp7.1", "aac2.0",
];

static ROMAN_NUMERALS: phf::Set<&'static str> = phf_set! {
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x",
};

/// Whether `token` is a hard stopword (case-insensitive).
pub fn is_hard_stopword(token: &str) -> bool {
    !token.is_empty() && HARD_STOPWORDS.contains(token.to_lowercase().as_str())
}

/// Whether `token` is a soft stopword (case-insensitive).
pub fn is_soft_stopword(token: &str) -> bool {
    !token.is_empty() && SOFT_STOPWORDS.contains(token.to_lowercase().as_str())
}

/// Whether `token` is a bare Roman numeral between I and X (case-insensitive).
pub fn is_roman_numeral(token: &str) -> bool {
    !token.is_empty() && ROMAN_NUMERALS.contains(token.to_lowercase().as_str())
}
