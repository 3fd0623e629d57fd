use super::*;

/// Advance one character and update string/nesting tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<(usize, char)> {
    let curr = lexer.peek;
    if let Some((_, c)) = curr {
        track(lexer, c);
    }
    lexer.peek = lexer.chars.next();
    curr
}

fn track(lexer: &mut Lexer, c: char) {
    if lexer.in_string {
        if lexer.escaped {
            lexer.escaped = false;
        } else if c == '\\' {
            lexer.escaped = true;
        } else if c == '"' {
            lexer.in_string = false;
        }
        return;
    }

    match c {
        '"' => lexer.in_string = true,
        '(' | '[' | '{' => lexer.nesting += 1,
        ')' | ']' | '}' => lexer.nesting = lexer.nesting.saturating_sub(1),
        _ => {}
    }
}

/// Consume characters until the byte offset `end` is reached
pub(super) fn skip_to(lexer: &mut Lexer, end: usize) {
    while let Some((pos, _)) = lexer.peek {
        if pos >= end {
            break;
        }
        bump(lexer);
    }
}
