/// Format a number the way Icinga2 reads it back: integers without a
/// fractional part, everything else in shortest round-trip form.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Wrap a literal in double quotes, escaping backslashes and quotes.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// True for keys that Icinga2 accepts unquoted as attribute names.
pub fn is_simple_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// True for keys that can follow a `.` in a member-access path.
pub fn is_dotted_segment(s: &str) -> bool {
    is_simple_identifier(s) && !s.starts_with(|c: char| c.is_ascii_digit())
}

pub fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(4247.0), "4247");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1.5), "1.5");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("value2"), "\"value2\"");
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote(r"C:\temp"), r#""C:\\temp""#);
    }

    #[test]
    fn test_simple_identifier() {
        assert!(is_simple_identifier("key1"));
        assert!(is_simple_identifier("check_command"));
        assert!(!is_simple_identifier("generic-host"));
        assert!(!is_simple_identifier("my key"));
        assert!(!is_simple_identifier(""));
    }

    #[test]
    fn test_dotted_segment_rejects_leading_digit() {
        assert!(is_dotted_segment("key1"));
        assert!(!is_dotted_segment("1key"));
        assert!(!is_dotted_segment("4247"));
    }
}
