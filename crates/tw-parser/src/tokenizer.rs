//! Logos-based tokenizer for file and folder names.
//!
//! Tokenization runs in a fixed order:
//! 1. every `[...]` group is cut out and split into side tokens,
//! 2. a trailing recording timestamp (`_12.11.17_20-15_`) is discarded,
//! 3. the rest is split on the delimiter class.
//!
//! Splitting keeps the empty pieces between consecutive delimiters so that
//! token positions stay comparable across inputs ("Movie (2020)" yields
//! `["Movie", "", "2020"]`); trailing empty pieces are dropped.

use logos::Logos;
use regex::Regex;
use std::sync::LazyLock;

/// Lexemes emitted by the Logos lexer: runs of text separated by single
/// delimiter characters.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum Lexeme<'src> {
    /// One delimiter character: `[](){}`, space, `,._-`.
    #[regex(r"[\[\](){} _,.\-]")]
    Delimiter,

    /// A maximal run of non-delimiter characters.
    #[regex(r"[^\[\](){} _,.\-]+")]
    Text(&'src str),
}

static BRACKET_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("bracket group regex"));

// Recording timestamp as written by TV recorders, e.g. `_12.11.17_20-15_`.
static RECORDING_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_[0-9]{2}\.[0-9]{2}\.[0-9]{2}[_ ]+[0-9]{2}-[0-9]{2}_")
        .expect("recording timestamp regex")
});

/// A piece of the split input with its stable position.
///
/// Blanking a token marks it consumed without shifting the positions of the
/// tokens after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    position: usize,
    blank: bool,
}

impl Token {
    /// Create a token at `position`.
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
            blank: false,
        }
    }

    /// Token text, or `""` once blanked.
    pub fn text(&self) -> &str {
        if self.blank {
            ""
        } else {
            &self.text
        }
    }

    /// 0-based position in the split.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the token was consumed or never had any text.
    pub fn is_blank(&self) -> bool {
        self.blank || self.text.is_empty()
    }

    /// Mark the token as consumed.
    pub fn blank(&mut self) {
        self.blank = true;
    }
}

/// Result of tokenizing one input string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPool {
    /// Tokens of the main split (or of the bracket groups when the main split
    /// was empty).
    pub main: Vec<Token>,
    /// Non-empty tokens recovered from `[...]` groups. Used for supplementary
    /// year lookup only, never for title text.
    pub brackets: Vec<String>,
    /// Working string after bracket and timestamp removal.
    pub residual: String,
}

/// Tokenize `input` into main and bracket tokens.
pub fn tokenize(input: &str) -> TokenPool {
    let mut brackets = Vec::new();
    for caps in BRACKET_GROUP.captures_iter(input) {
        brackets.extend(
            split_pieces(&caps[1])
                .into_iter()
                .filter(|piece| !piece.is_empty())
                .map(str::to_string),
        );
    }
    let mut working = BRACKET_GROUP.replace_all(input, "").into_owned();

    if let Some(stamp) = RECORDING_TIMESTAMP.find(&working) {
        if stamp.start() > 0 {
            tracing::trace!(timestamp = stamp.as_str(), "dropping recording timestamp");
            working.truncate(stamp.start());
        }
    }

    let mut main: Vec<Token> = split_pieces(&working)
        .into_iter()
        .enumerate()
        .map(|(position, piece)| Token::new(piece, position))
        .collect();

    if main.iter().all(Token::is_blank) && !brackets.is_empty() {
        main = brackets
            .iter()
            .enumerate()
            .map(|(position, piece)| Token::new(piece.as_str(), position))
            .collect();
    }

    TokenPool {
        main,
        brackets,
        residual: working,
    }
}

/// Split `text` on the delimiter class.
///
/// Empty pieces between consecutive delimiters (and before a leading
/// delimiter) are kept; trailing empty pieces are dropped.
pub fn split_pieces(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut current = "";

    for lexeme in Lexeme::lexer(text).flatten() {
        match lexeme {
            Lexeme::Text(run) => current = run,
            Lexeme::Delimiter => {
                pieces.push(current);
                current = "";
            }
        }
    }
    pieces.push(current);

    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
}
