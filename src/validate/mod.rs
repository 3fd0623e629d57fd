use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::Value;
use crate::Icinga2Error;

static POSIX_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/").expect("valid posix path pattern"));

static WINDOWS_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z]:[\\/]|\\\\[^\\/]+[\\/][^\\/]+)").expect("valid windows path pattern")
});

/// `<ident> in <expr>` or `<ident> => <ident> in <expr>`
const APPLY_FOR_PATTERN: &str =
    r"^(?P<key>[A-Za-z_]\w*)(?:\s+=>\s+(?P<value>[A-Za-z_]\w*))?\s+in\s+(?P<expr>\S.*)$";

static APPLY_FOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(APPLY_FOR_PATTERN).expect("valid apply pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ensure {
    Present,
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyTarget {
    Host,
    Service,
}

impl ApplyTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplyTarget::Host => "Host",
            ApplyTarget::Service => "Service",
        }
    }
}

impl fmt::Display for ApplyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `apply` directive: off, a plain apply rule, or an apply-for loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Apply {
    Disabled,
    Enabled,
    For(ApplyFor),
}

/// Parsed `apply for` binding such as `disk => config in host.vars.disks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyFor {
    pub key: String,
    pub value: Option<String>,
    pub collection: String,
}

impl ApplyFor {
    /// Identifiers introduced by the loop; they are constants in the body.
    pub fn bindings(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.key.as_str()).chain(self.value.as_deref())
    }
}

impl fmt::Display for ApplyFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} => {} in {}", self.key, value, self.collection),
            None => write!(f, "{} in {}", self.key, self.collection),
        }
    }
}

pub fn validate_ensure(value: &Value) -> Result<Ensure, Icinga2Error> {
    match value.as_str().map(str::to_lowercase).as_deref() {
        Some("present") => Ok(Ensure::Present),
        Some("absent") => Ok(Ensure::Absent),
        _ => Err(Icinga2Error::InvalidEnumValue {
            field: "ensure".into(),
            value: value.describe(),
            allowed: vec!["present".into(), "absent".into()],
        }),
    }
}

/// Accepts POSIX (`/etc/icinga2`), drive (`C:/ProgramData`, `C:\\x`) and
/// UNC (`\\\\server\\share`) paths.
pub fn validate_absolute_path(path: &str) -> Result<(), Icinga2Error> {
    if POSIX_PATH.is_match(path) || WINDOWS_PATH.is_match(path) {
        Ok(())
    } else {
        Err(Icinga2Error::InvalidPath {
            path: path.to_string(),
        })
    }
}

pub fn validate_boolean(value: &Value, field: &str) -> Result<bool, Icinga2Error> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        other => Err(Icinga2Error::type_mismatch(
            field,
            other.describe(),
            "a boolean",
            other.type_name(),
        )),
    }
}

pub fn validate_apply_target(value: &Value, object_type: &str) -> Result<ApplyTarget, Icinga2Error> {
    let target = match value.as_str() {
        Some("Host") => ApplyTarget::Host,
        Some("Service") => ApplyTarget::Service,
        _ => {
            return Err(Icinga2Error::InvalidEnumValue {
                field: "apply_target".into(),
                value: value.describe(),
                allowed: vec!["Host".into(), "Service".into()],
            });
        }
    };

    if target.as_str() == object_type {
        return Err(Icinga2Error::ConflictingValues {
            first: "apply_target".into(),
            second: "object_type".into(),
            value: object_type.to_string(),
        });
    }
    Ok(target)
}

pub fn validate_apply(value: &Value) -> Result<Apply, Icinga2Error> {
    match value {
        Value::Bool(true) => Ok(Apply::Enabled),
        Value::Bool(false) => Ok(Apply::Disabled),
        Value::String(s) => {
            let caps = APPLY_FOR.captures(s.trim()).ok_or_else(|| Icinga2Error::PatternMismatch {
                field: "apply".into(),
                value: s.clone(),
                pattern: APPLY_FOR_PATTERN.into(),
            })?;
            Ok(Apply::For(ApplyFor {
                key: caps["key"].to_string(),
                value: caps.name("value").map(|m| m.as_str().to_string()),
                collection: caps["expr"].trim_end().to_string(),
            }))
        }
        other => Err(Icinga2Error::PatternMismatch {
            field: "apply".into(),
            value: other.describe(),
            pattern: APPLY_FOR_PATTERN.into(),
        }),
    }
}

pub fn validate_array<'a>(value: &'a Value, field: &str) -> Result<&'a [Value], Icinga2Error> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(Icinga2Error::type_mismatch(
            field,
            other.describe(),
            "an Array",
            other.type_name(),
        )),
    }
}

/// An array whose items are all strings, e.g. `import` or `assign`.
pub fn validate_string_array(value: &Value, field: &str) -> Result<Vec<String>, Icinga2Error> {
    validate_array(value, field)?
        .iter()
        .map(|item| match item {
            Value::String(s) | Value::Raw(s) => Ok(s.clone()),
            other => Err(Icinga2Error::type_mismatch(
                field,
                other.describe(),
                "a String",
                other.type_name(),
            )),
        })
        .collect()
}

pub fn validate_string(value: &Value, field: &str) -> Result<String, Icinga2Error> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Integer(_) | Value::Number(_) => Ok(value.describe()),
        other => Err(Icinga2Error::type_mismatch(
            field,
            other.describe(),
            "a String",
            other.type_name(),
        )),
    }
}

#[cfg(test)]
mod tests;
