// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;
use tracing::trace;

use crate::ast::{ConstantSet, Value};
use crate::parser::Parser;
use crate::utils::{format_number, indent, is_dotted_segment, is_simple_identifier, quote};

/// Icinga2 custom variables; the only attribute whose hash is flattened
/// into `vars.key` / `vars.key["sub"]` assignments.
const CUSTOM_VARS: &str = "vars";

/// Line terminator written after every emitted line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Render an attribute hash as Icinga2 attribute assignments.
///
/// Keys are emitted in insertion order, one assignment per line, starting
/// at `depth` indentation units (two spaces each):
/// - `vars` hashes flatten to `vars.key = ...` and `vars.key["sub"] = ...`;
///   anything nested deeper becomes a brace block
/// - every other hash becomes a `key = { ... }` block
/// - an empty hash is written inline as `key = {}`
/// - strings are re-quoted as expressions, so constants stay bare
///
/// # Examples
/// ```
/// use indexmap::IndexMap;
/// use icinga2_cfg::{ConstantSet, Value, printer::{render_attributes, LineEnding}};
///
/// let mut vars = IndexMap::new();
/// vars.insert("key1".to_string(), Value::from("4247"));
/// let mut attrs = IndexMap::new();
/// attrs.insert("vars".to_string(), Value::Hash(vars));
///
/// let text = render_attributes(&attrs, &ConstantSet::new(), 0, LineEnding::Lf);
/// assert_eq!(text, "vars.key1 = 4247\n");
/// ```
pub fn render_attributes(
    attrs: &IndexMap<String, Value>,
    constants: &ConstantSet,
    depth: usize,
    newline: LineEnding,
) -> String {
    let printer = Printer {
        parser: Parser::new(constants),
        newline: newline.as_str(),
    };
    let mut out = String::new();
    printer.attributes(&mut out, attrs, depth);
    out
}

/// Render a single value the way it would appear on the right-hand side of
/// an assignment at `depth`.
pub fn render_value(value: &Value, constants: &ConstantSet, depth: usize, newline: LineEnding) -> String {
    let printer = Printer {
        parser: Parser::new(constants),
        newline: newline.as_str(),
    };
    printer.value(value, depth)
}

struct Printer<'a> {
    parser: Parser<'a>,
    newline: &'static str,
}

impl Printer<'_> {
    fn attributes(&self, out: &mut String, attrs: &IndexMap<String, Value>, depth: usize) {
        for (key, value) in attrs {
            match value {
                Value::Hash(vars) if key == CUSTOM_VARS && !vars.is_empty() => {
                    self.custom_vars(out, vars, depth);
                }
                _ => self.assignment(out, &attribute_name(key), value, depth),
            }
        }
    }

    fn custom_vars(&self, out: &mut String, vars: &IndexMap<String, Value>, depth: usize) {
        for (key, value) in vars {
            let target = if is_dotted_segment(key) {
                format!("{}.{}", CUSTOM_VARS, key)
            } else {
                format!("{}[{}]", CUSTOM_VARS, quote(key))
            };

            match value {
                Value::Hash(nested) if !nested.is_empty() => {
                    for (sub, sub_value) in nested {
                        let sub_target = format!("{}[{}]", target, quote(sub));
                        self.assignment(out, &sub_target, sub_value, depth);
                    }
                }
                _ => self.assignment(out, &target, value, depth),
            }
        }
    }

    fn block(&self, out: &mut String, entries: &IndexMap<String, Value>, depth: usize) {
        for (key, value) in entries {
            self.assignment(out, &attribute_name(key), value, depth);
        }
    }

    fn assignment(&self, out: &mut String, target: &str, value: &Value, depth: usize) {
        trace!(attribute = target, depth, kind = value.type_name(), "render attribute");

        match value {
            Value::Hash(entries) if !entries.is_empty() => {
                self.line(out, depth, &format!("{} = {{", target));
                self.block(out, entries, depth + 1);
                self.line(out, depth, "}");
            }
            Value::String(s) => match split_compound(s) {
                Some((op, rest)) => {
                    let rhs = self.parser.normalize(rest);
                    self.line(out, depth, &format!("{} {}= {}", target, op, rhs));
                }
                None => {
                    let rhs = self.parser.normalize(s);
                    self.line(out, depth, &format!("{} = {}", target, rhs));
                }
            },
            _ => {
                let rhs = self.value(value, depth);
                self.line(out, depth, &format!("{} = {}", target, rhs));
            }
        }
    }

    fn value(&self, value: &Value, depth: usize) -> String {
        match value {
            Value::String(s) => self.parser.normalize(s),
            Value::Integer(n) => n.to_string(),
            Value::Number(n) => format_number(*n),
            Value::Bool(b) => b.to_string(),
            Value::Raw(s) => s.clone(),
            Value::Array(items) => {
                let body: String = items
                    .iter()
                    .map(|item| format!("{}, ", self.value(item, depth)))
                    .collect();
                format!("[ {}]", body)
            }
            Value::Hash(entries) if entries.is_empty() => "{}".to_string(),
            Value::Hash(entries) => {
                let mut out = format!("{{{}", self.newline);
                self.block(&mut out, entries, depth + 1);
                out.push_str(&indent(depth));
                out.push('}');
                out
            }
        }
    }

    fn line(&self, out: &mut String, depth: usize, text: &str) {
        out.push_str(&indent(depth));
        out.push_str(text);
        out.push_str(self.newline);
    }
}

fn attribute_name(key: &str) -> String {
    if is_simple_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

/// `+ [ "x" ]` style values become `key += [ "x" ]`.
fn split_compound(s: &str) -> Option<(char, &str)> {
    let mut chars = s.chars();
    let op = chars.next().filter(|c| matches!(c, '+' | '-' | '*' | '/'))?;
    let rest = chars.as_str();
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim();
    if rest.is_empty() { None } else { Some((op, rest)) }
}
