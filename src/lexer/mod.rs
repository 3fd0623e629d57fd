// Author: Dustin Pilgrim
// License: MIT

use std::str::CharIndices;

mod scanner;
mod tokenizer;

pub use tokenizer::{closing_quote, matching_close, split_list, tokenize};

/// Binary operators recognised between operands, longest first so that
/// `!in` wins over `in` and `<=` over `<`.
pub const OPERATORS: &[&str] = &[
    "!in", "==", "!=", "<=", ">=", "&&", "||", "in", "+", "-", "*", "/", "%", "<", ">",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Operand(String),
    Operator(String),
}

/// Character walker over a single Icinga2 expression.
///
/// Tracks whether the current position sits inside a string literal or
/// any `(`, `[`, `{` nesting, so splitting only ever happens at the top
/// level of the expression.
pub struct Lexer<'a> {
    chars: CharIndices<'a>,
    peek: Option<(usize, char)>,
    nesting: usize,
    in_string: bool,
    escaped: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut chars = input.char_indices();
        let peek = chars.next();
        Lexer {
            chars,
            peek,
            nesting: 0,
            in_string: false,
            escaped: false,
        }
    }

    /// True when the next character is outside of strings and brackets.
    pub fn at_top_level(&self) -> bool {
        self.nesting == 0 && !self.in_string
    }

    pub fn peek(&self) -> Option<(usize, char)> {
        self.peek
    }

    pub fn bump(&mut self) -> Option<(usize, char)> {
        scanner::bump(self)
    }
}
