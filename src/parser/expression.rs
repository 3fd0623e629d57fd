use super::*;
use crate::lexer::{matching_close, split_list, tokenize, Token};
use crate::utils::quote;

pub(super) fn normalize(parser: &Parser, expr: &str) -> String {
    let tokens = tokenize(expr);
    if tokens.is_empty() {
        return quote(expr.trim());
    }

    tokens
        .iter()
        .map(|token| match token {
            Token::Operand(s) => operand(parser, s),
            Token::Operator(op) => op.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn operand(parser: &Parser, s: &str) -> String {
    if super::value::is_raw_block(s) {
        return s.to_string();
    }

    let encloses = |open: char| s.starts_with(open) && matching_close(s, 0) == Some(s.len() - 1);

    if encloses('(') {
        return format!("({})", normalize(parser, &s[1..s.len() - 1]));
    }
    if encloses('[') {
        return array(parser, &s[1..s.len() - 1]);
    }
    if s.starts_with('{') {
        // dictionary literal, emitted as written
        return s.to_string();
    }
    if let Some(call) = function_call(parser, s) {
        return call;
    }

    super::value::scalar(parser, s)
}

fn array(parser: &Parser, inner: &str) -> String {
    let items: String = split_list(inner)
        .iter()
        .map(|item| format!("{}, ", normalize(parser, item)))
        .collect();
    format!("[ {}]", items)
}

/// `name(arg, ...)` with an optional trailing member access like `.length`.
fn function_call(parser: &Parser, s: &str) -> Option<String> {
    let open = s.find('(')?;
    let name = &s[..open];
    let callee = name.strip_prefix('!').unwrap_or(name);
    let valid_name = callee
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && callee
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if !valid_name {
        return None;
    }

    let close = matching_close(s, open)?;
    let suffix = &s[close + 1..];
    if !(suffix.is_empty() || suffix.starts_with('.') || suffix.starts_with('[')) {
        return None;
    }

    let args = split_list(&s[open + 1..close])
        .iter()
        .map(|arg| normalize(parser, arg))
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!("{}({}){}", name, args, suffix))
}
