use super::*;
use super::scanner::{bump, skip_to};

/// Split an expression into operands and the binary operators between them.
///
/// An operator only counts when it stands at the top level with whitespace
/// on both sides and a non-empty operand on each side; `generic-host` stays
/// one operand while `a - b` splits.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    let mut start = 0;

    while let Some((pos, ch)) = lexer.peek() {
        if ch.is_whitespace() && lexer.at_top_level() {
            let operand = input[start..pos].trim();
            if !operand.is_empty() {
                if let Some((op, end)) = match_operator(input, pos) {
                    tokens.push(Token::Operand(operand.to_string()));
                    tokens.push(Token::Operator(op.to_string()));
                    skip_to(&mut lexer, end);
                    start = end;
                    continue;
                }
            }
        }
        bump(&mut lexer);
    }

    let rest = input[start..].trim();
    if !rest.is_empty() {
        tokens.push(Token::Operand(rest.to_string()));
    }
    tokens
}

/// Split a comma separated list at the top level, trimming each item.
/// Empty items (trailing commas) are dropped.
pub fn split_list(input: &str) -> Vec<String> {
    let mut lexer = Lexer::new(input);
    let mut items = Vec::new();
    let mut start = 0;

    while let Some((pos, ch)) = lexer.peek() {
        if ch == ',' && lexer.at_top_level() {
            items.push(input[start..pos].trim().to_string());
            start = pos + ch.len_utf8();
        }
        bump(&mut lexer);
    }
    items.push(input[start..].trim().to_string());

    items.retain(|item| !item.is_empty());
    items
}

/// Byte offset of the bracket closing the one opened at `open`.
pub fn matching_close(input: &str, open: usize) -> Option<usize> {
    let mut lexer = Lexer::new(input);
    skip_to(&mut lexer, open);
    let base = lexer.nesting;
    match bump(&mut lexer) {
        Some((_, '(' | '[' | '{')) => {}
        _ => return None,
    }
    while let Some((pos, _)) = bump(&mut lexer) {
        if lexer.nesting == base && !lexer.in_string {
            return Some(pos);
        }
    }
    None
}

/// Byte offset of the `"` that closes the string literal opening `input`.
pub fn closing_quote(input: &str) -> Option<usize> {
    let mut lexer = Lexer::new(input);
    match bump(&mut lexer) {
        Some((_, '"')) => {}
        _ => return None,
    }
    while let Some((pos, _)) = bump(&mut lexer) {
        if !lexer.in_string {
            return Some(pos);
        }
    }
    None
}

/// Match `<ws>OP<ws>` at byte offset `pos`, returning the operator and the
/// offset of the first character of the right-hand operand.
fn match_operator(input: &str, pos: usize) -> Option<(&'static str, usize)> {
    let rest = &input[pos..];
    let after_ws = rest.trim_start();
    let lead = rest.len() - after_ws.len();

    for op in OPERATORS {
        let Some(tail) = after_ws.strip_prefix(op) else {
            continue;
        };
        if !tail.starts_with(char::is_whitespace) {
            continue;
        }
        let operand = tail.trim_start();
        if operand.is_empty() {
            return None;
        }
        let trail = tail.len() - operand.len();
        return Some((op, pos + lead + op.len() + trail));
    }
    None
}
