//! Cleanliness ranking over competing extractions for one item.
//!
//! A folder name, a file name and an alternate title often describe the same
//! movie. Each is segmented and ranked; the cleanest wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::segment::Segmenter;

static CAMEL_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]").expect("camel pair regex"));

/// A segmented candidate string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// The raw input.
    pub original: String,
    /// Title extracted from `original`.
    pub clean: String,
    /// Year extracted from `original`.
    pub year: Option<u16>,
}

impl Candidate {
    /// Cleanliness rank. Higher is better; `-1` when nothing was extracted.
    ///
    /// Rewards mixed case, few words and a detected year; penalizes
    /// separators in the original and long titles.
    pub fn rate(&self) -> i32 {
        if self.clean.is_empty() {
            return -1;
        }

        let words = count(self.clean.split(' ').count());
        let seps = separator_pieces(&self.original).saturating_sub(1);
        let clean_len = self.clean.chars().count();
        let original_len = self.original.chars().count().max(1);
        let cleaned_pct = 100 - count(clean_len * 100 / original_len);
        let camel = count(CAMEL_PAIR.find_iter(&self.clean).count());

        let mut rate = camel * 20 + (10 - words * 2) * 2 - count(seps) * 20 - count(clean_len) * 2
            + cleaned_pct;
        if self.year.is_some() {
            rate += 20;
        }
        rate
    }
}

// Number of `[_.-]`-separated pieces, trailing empty pieces dropped.
fn separator_pieces(text: &str) -> usize {
    let mut pieces: Vec<&str> = text.split(['_', '.', '-']).collect();
    while pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }
    pieces.len()
}

fn count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

impl Segmenter {
    /// Segment `original` into a [`Candidate`].
    pub fn candidate(&self, original: &str) -> Candidate {
        let identity = self.segment(original);
        Candidate {
            original: original.to_string(),
            clean: identity.title,
            year: identity.year,
        }
    }

    /// Segment every string and return the highest-ranked candidate.
    ///
    /// Ties keep the earlier candidate. An empty list yields an empty
    /// candidate.
    pub fn pick_cleanest<S: AsRef<str>>(&self, candidates: &[S]) -> Candidate {
        let mut best: Option<(i32, Candidate)> = None;

        for original in candidates {
            let candidate = self.candidate(original.as_ref());
            let rank = candidate.rate();
            tracing::trace!(original = %candidate.original, clean = %candidate.clean, rank, "ranked");
            if best.as_ref().map_or(true, |(top, _)| rank > *top) {
                best = Some((rank, candidate));
            }
        }

        match best {
            Some((rank, candidate)) => {
                tracing::debug!(clean = %candidate.clean, year = ?candidate.year, rank, "picked cleanest");
                candidate
            }
            None => Candidate::default(),
        }
    }
}
