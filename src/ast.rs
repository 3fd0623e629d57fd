use indexmap::{IndexMap, IndexSet};

/// A single attribute value, classified once at the input boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    Hash(IndexMap<String, Value>),
    Array(Vec<Value>),
    Raw(String), // emitted verbatim, e.g. {{ get_time() }}
}

impl Value {
    pub fn as_hash(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Hash(map) = self {
            Some(map)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Raw(s) => Some(s),
            _ => None,
        }
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Integer(_) | Value::Number(_) => "Number",
            Value::Bool(_) => "Boolean",
            Value::Hash(_) => "Hash",
            Value::Array(_) => "Array",
            Value::Raw(_) => "Expression",
        }
    }

    /// Text shown when a value is quoted back to the user in an error.
    pub fn describe(&self) -> String {
        match self {
            Value::String(s) | Value::Raw(s) => s.clone(),
            Value::Integer(n) => n.to_string(),
            Value::Number(n) => crate::utils::format_number(*n),
            Value::Bool(b) => b.to_string(),
            Value::Hash(_) => "{...}".to_string(),
            Value::Array(_) => "[...]".to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Hash(map)
    }
}

/// Identifiers that are Icinga2 symbols rather than string literals.
///
/// A value naming one of these (optionally negated with `!` or followed by
/// member access such as `NodeName.length`) is emitted unquoted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantSet {
    names: IndexSet<String>,
}

impl ConstantSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True when `value` is a (possibly negated) reference to a constant.
    pub fn references(&self, value: &str) -> bool {
        let value = value.strip_prefix('!').unwrap_or(value);
        let head = value.split_once('.').map_or(value, |(head, member)| {
            if member.is_empty() { "" } else { head }
        });
        !head.is_empty() && self.contains(head)
    }
}

impl<S: Into<String>> FromIterator<S> for ConstantSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ConstantSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}
