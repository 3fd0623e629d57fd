use once_cell::sync::Lazy;
use regex::Regex;

use super::*;
use crate::lexer::closing_quote;
use crate::utils::quote;

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?(ms|[smhd])?$").expect("valid number pattern"));

static KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(true|false|null)$").expect("valid keyword pattern"));

static OBJECT_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!?(host|service|user)\.\S").expect("valid reference pattern"));

static RAW_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\{\{.*\}\}$").expect("valid raw block pattern"));

pub(super) fn scalar(parser: &Parser, word: &str) -> String {
    if is_bare(parser, word) {
        word.to_string()
    } else {
        quote(word)
    }
}

pub(super) fn is_bare(parser: &Parser, word: &str) -> bool {
    NUMBER.is_match(word)
        || KEYWORD.is_match(word)
        || OBJECT_REFERENCE.is_match(word)
        || is_raw_block(word)
        || is_quoted(word)
        || parser.constants.references(word)
}

pub(super) fn is_raw_block(s: &str) -> bool {
    RAW_BLOCK.is_match(s)
}

/// A single string literal, not several joined by bare words.
fn is_quoted(word: &str) -> bool {
    !word.is_empty() && closing_quote(word) == Some(word.len() - 1)
}
