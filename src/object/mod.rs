// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;
use tracing::debug;

use crate::ast::{ConstantSet, Value};
use crate::config::ModuleConfig;
use crate::printer::render_attributes;
use crate::utils::quote;
use crate::validate::{validate_absolute_path, validate_string, Apply, ApplyTarget, Ensure};
use crate::Icinga2Error;

mod directives;

pub use directives::DirectiveSet;

/// Raw parameters of one object definition, before validation.
///
/// Fields that the validator type-checks are kept as [`Value`] so a wrong
/// type (e.g. `template => "foo"`) is reported with the offending value.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectParams {
    pub ensure: Value,
    pub object_name: Option<String>,
    pub object_type: Option<String>,
    pub template: Value,
    pub apply: Value,
    pub apply_target: Option<Value>,
    pub import: Value,
    pub assign: Value,
    pub ignore: Value,
    pub attrs: Value,
    pub target: Option<String>,
    pub order: Value,
}

impl Default for ObjectParams {
    fn default() -> Self {
        Self {
            ensure: Value::from("present"),
            object_name: None,
            object_type: None,
            template: Value::Bool(false),
            apply: Value::Bool(false),
            apply_target: None,
            import: Value::Array(Vec::new()),
            assign: Value::Array(Vec::new()),
            ignore: Value::Array(Vec::new()),
            attrs: Value::Hash(IndexMap::new()),
            target: None,
            order: Value::from("10"),
        }
    }
}

impl ObjectParams {
    pub fn new(object_type: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            object_type: Some(object_type.into()),
            target: Some(target.into()),
            ..Self::default()
        }
    }

    /// Build parameters from a JSON object such as
    /// `{"object_type": "Host", "target": "/etc/icinga2/conf.d/hosts.conf"}`.
    pub fn from_json(value: serde_json::Value) -> Result<Self, Icinga2Error> {
        let mut map = match Value::try_from(value)? {
            Value::Hash(map) => map,
            other => {
                return Err(Icinga2Error::type_mismatch(
                    "params",
                    other.describe(),
                    "a Hash",
                    other.type_name(),
                ));
            }
        };

        let mut params = Self::default();

        // a relative target is reported before any other field is looked at
        if let Some(target) = map.shift_remove("target") {
            let target = validate_string(&target, "target")?;
            validate_absolute_path(&target)?;
            params.target = Some(target);
        }

        for (key, value) in map {
            match key.as_str() {
                "ensure" => params.ensure = value,
                "object_name" => params.object_name = Some(validate_string(&value, &key)?),
                "object_type" => params.object_type = Some(validate_string(&value, &key)?),
                "template" => params.template = value,
                "apply" => params.apply = value,
                "apply_target" => params.apply_target = Some(value),
                "import" => params.import = value,
                "assign" => params.assign = value,
                "ignore" => params.ignore = value,
                "attrs" => params.attrs = value,
                "order" => params.order = value,
                _ => return Err(Icinga2Error::UnknownParameter { field: key.clone() }),
            }
        }
        Ok(params)
    }
}

/// One rendered object definition, ready for concatenation into `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub name: String,
    pub target: String,
    pub order: String,
    pub content: String,
}

/// Validate `params` and render the object titled `title`.
///
/// Returns `Ok(None)` for `ensure => absent`: the target file is still
/// managed by the caller but receives no fragment for this object.
///
/// # Examples
/// ```
/// use icinga2_cfg::{ModuleConfig, ObjectParams, render_object};
///
/// let params = ObjectParams::new("foo", "/bar/baz");
/// let fragment = render_object("bar", &params, &ModuleConfig::default())
///     .unwrap()
///     .unwrap();
/// assert!(fragment.content.starts_with("object foo \"bar\" {\n"));
/// ```
pub fn render_object(
    title: &str,
    params: &ObjectParams,
    config: &ModuleConfig,
) -> Result<Option<Fragment>, Icinga2Error> {
    let mut constants = config.constant_set();
    let directives = DirectiveSet::from_params(params, &mut constants)?;
    let target = params.target.clone().unwrap_or_default();

    if directives.ensure == Ensure::Absent {
        debug!(object = title, file = %target, "object absent, no fragment");
        return Ok(None);
    }

    let attrs = match &params.attrs {
        Value::Hash(attrs) => attrs,
        other => {
            return Err(Icinga2Error::type_mismatch(
                "attrs",
                other.describe(),
                "a Hash",
                other.type_name(),
            ));
        }
    };

    // attribute names are in scope inside the object body (`vars = vars + foo`)
    constants.extend(attrs.keys().map(String::as_str));

    let object_name = params.object_name.as_deref().unwrap_or(title);
    let content = compose(object_name, &directives, attrs, &constants, config);
    let order = validate_string(&params.order, "order")?;

    debug!(
        object = object_name,
        object_type = %directives.object_type,
        file = %target,
        order = %order,
        "rendered object fragment"
    );

    Ok(Some(Fragment {
        name: title.to_string(),
        target,
        order,
        content,
    }))
}

fn compose(
    object_name: &str,
    directives: &DirectiveSet,
    attrs: &IndexMap<String, Value>,
    constants: &ConstantSet,
    config: &ModuleConfig,
) -> String {
    let newline = config.line_ending();
    let nl = newline.as_str();

    let mut out = header(object_name, directives);
    out.push_str(" {");
    out.push_str(nl);

    for import in &directives.import {
        out.push_str(&format!("  import {}{}", quote(import), nl));
    }
    if !directives.import.is_empty() {
        out.push_str(nl);
    }

    for expr in &directives.assign {
        out.push_str(&format!("  assign where {}{}", expr, nl));
    }
    for expr in &directives.ignore {
        out.push_str(&format!("  ignore where {}{}", expr, nl));
    }
    if !(directives.assign.is_empty() && directives.ignore.is_empty()) {
        out.push_str(nl);
    }

    out.push_str(&render_attributes(attrs, constants, 1, newline));
    out.push('}');
    out.push_str(nl);
    out.push_str(nl);
    out
}

fn header(object_name: &str, directives: &DirectiveSet) -> String {
    let object_type = &directives.object_type;
    let to = |target: Option<ApplyTarget>| {
        target.map_or_else(String::new, |t| format!(" to {}", t))
    };

    if directives.template {
        return format!("template {} {}", object_type, quote(object_name));
    }
    match &directives.apply {
        Apply::Enabled => format!(
            "apply {} {}{}",
            object_type,
            quote(object_name),
            to(directives.apply_target)
        ),
        Apply::For(apply_for) => format!(
            "apply {} for ({}){}",
            object_type,
            apply_for,
            to(directives.apply_target)
        ),
        Apply::Disabled => format!("object {} {}", object_type, quote(object_name)),
    }
}
