#[cfg(test)]
use super::*;

fn constants() -> ConstantSet {
    ["NodeName", "ZoneName", "PluginDir", "vars", "foo", "config"]
        .into_iter()
        .collect()
}

#[test]
fn test_assign_expression_quotes_literals() {
    let constants = constants();
    let parser = Parser::new(&constants);

    assert_eq!(
        parser.normalize("host.vars.os == bar && host.address"),
        "host.vars.os == \"bar\" && host.address"
    );
    assert_eq!(
        parser.normalize("generic-host in host.templates"),
        "\"generic-host\" in host.templates"
    );
}

#[test]
fn test_ignore_expression_keeps_constants_and_negation() {
    let constants = constants();
    let parser = Parser::new(&constants);

    assert_eq!(
        parser.normalize("NodeName != baz || !host.display_name"),
        "NodeName != \"baz\" || !host.display_name"
    );
}

#[test]
fn test_apply_bindings_stay_bare() {
    let constants = constants();
    let parser = Parser::new(&constants);

    assert_eq!(parser.normalize("vars + foo"), "vars + foo");
    assert_eq!(parser.normalize("vars + foo + config"), "vars + foo + config");
}

#[test]
fn test_scalar_classification() {
    let constants = constants();
    let parser = Parser::new(&constants);

    assert_eq!(parser.scalar("4247"), "4247");
    assert_eq!(parser.scalar("2.5"), "2.5");
    assert_eq!(parser.scalar("5m"), "5m");
    assert_eq!(parser.scalar("-1"), "-1");
    assert_eq!(parser.scalar("true"), "true");
    assert_eq!(parser.scalar("null"), "null");
    assert_eq!(parser.scalar("value2"), "\"value2\"");
    assert_eq!(parser.scalar("PluginDir"), "PluginDir");
    assert_eq!(parser.scalar("NodeName.length"), "NodeName.length");
    assert_eq!(parser.scalar("service.name"), "service.name");
    assert_eq!(parser.scalar("hostname"), "\"hostname\"");
    assert_eq!(parser.scalar("\"already\""), "\"already\"");
}

#[test]
fn test_constant_that_looks_like_a_literal_is_bare() {
    // a plain string equal to a constant name cannot be told apart
    let constants = constants();
    let parser = Parser::new(&constants);
    assert!(parser.is_bare("foo"));
    assert!(!parser.is_bare("foobar"));
}

#[test]
fn test_raw_block_passes_through() {
    let constants = ConstantSet::new();
    let parser = Parser::new(&constants);

    assert_eq!(
        parser.normalize("{{ unparsed string }}"),
        "{{ unparsed string }}"
    );
    assert_eq!(
        parser.normalize("host.vars.x == {{ get_time() }}"),
        "host.vars.x == {{ get_time() }}"
    );
    assert!(is_raw_block("{{\n  return 1\n}}"));
    assert!(!is_raw_block("{ a = 1 }"));
}

#[test]
fn test_function_call_arguments_are_normalized() {
    let constants = constants();
    let parser = Parser::new(&constants);

    assert_eq!(
        parser.normalize("match(*mysql*, host.name)"),
        "match(\"*mysql*\", host.name)"
    );
    assert_eq!(
        parser.normalize("len(host.vars.disks) > 0"),
        "len(host.vars.disks) > 0"
    );
    assert_eq!(
        parser.normalize("!regex(^web, host.name)"),
        "!regex(\"^web\", host.name)"
    );
    assert_eq!(
        parser.normalize("get_host(NodeName).vars"),
        "get_host(NodeName).vars"
    );
}

#[test]
fn test_grouping_and_arrays() {
    let constants = constants();
    let parser = Parser::new(&constants);

    assert_eq!(
        parser.normalize("(host.vars.os == linux || host.vars.os == bsd) && host.address"),
        "(host.vars.os == \"linux\" || host.vars.os == \"bsd\") && host.address"
    );
    assert_eq!(
        parser.normalize("[ foo, bar, 5 ]"),
        "[ foo, \"bar\", 5, ]"
    );
    assert_eq!(parser.normalize("[]"), "[ ]");
}

#[test]
fn test_plain_text_with_spaces_is_one_literal() {
    let constants = ConstantSet::new();
    let parser = Parser::new(&constants);

    assert_eq!(parser.normalize("hello world"), "\"hello world\"");
    assert_eq!(parser.normalize(""), "\"\"");
}

#[test]
fn test_normalize_is_deterministic() {
    let constants = constants();
    let parser = Parser::new(&constants);
    let expr = "host.vars.os == bar && NodeName in host.vars.zones";
    assert_eq!(parser.normalize(expr), parser.normalize(expr));
}

#[test]
fn test_joined_string_literals_are_requoted() {
    let constants = ConstantSet::new();
    let parser = Parser::new(&constants);

    assert_eq!(
        parser.scalar(r#""foo" bar "baz""#),
        r#""\"foo\" bar \"baz\"""#
    );
    assert_eq!(parser.scalar(r#""a\"b""#), r#""a\"b""#);
    assert_eq!(parser.scalar(r#""unterminated"#), r#""\"unterminated""#);
}
