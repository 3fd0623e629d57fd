use super::ObjectParams;
use crate::ast::{ConstantSet, Value};
use crate::parser::Parser;
use crate::validate::{
    validate_absolute_path, validate_apply, validate_apply_target, validate_array,
    validate_boolean, validate_ensure, validate_string_array, Apply, ApplyTarget, Ensure,
};
use crate::Icinga2Error;

/// Validated and normalized directives of one object.
///
/// `assign` and `ignore` hold the expressions already re-quoted, ready to
/// be written after `assign where` / `ignore where`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveSet {
    pub ensure: Ensure,
    pub object_type: String,
    pub template: bool,
    pub apply: Apply,
    pub apply_target: Option<ApplyTarget>,
    pub import: Vec<String>,
    pub assign: Vec<String>,
    pub ignore: Vec<String>,
}

impl DirectiveSet {
    /// Validate every directive of `params`.
    ///
    /// The target path is checked first so a relative path is always
    /// reported as such. Identifiers bound by an `apply for` loop are
    /// added to `constants` so they stay bare in expressions and
    /// attribute values.
    pub fn from_params(params: &ObjectParams, constants: &mut ConstantSet) -> Result<Self, Icinga2Error> {
        let target = params
            .target
            .as_deref()
            .ok_or_else(|| Icinga2Error::MissingParameter { field: "target".into() })?;
        validate_absolute_path(target)?;

        let ensure = validate_ensure(&params.ensure)?;
        let object_type = params
            .object_type
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Icinga2Error::MissingParameter { field: "object_type".into() })?;

        let template = validate_boolean(&params.template, "template")?;
        let apply = validate_apply(&params.apply)?;
        let apply_target = params
            .apply_target
            .as_ref()
            .map(|value| validate_apply_target(value, &object_type))
            .transpose()?;
        let import = validate_string_array(&params.import, "import")?;

        if let Apply::For(apply_for) = &apply {
            constants.extend(apply_for.bindings());
        }

        let parser = Parser::new(constants);
        let assign = expressions(&params.assign, "assign", &parser)?;
        let ignore = expressions(&params.ignore, "ignore", &parser)?;

        Ok(Self {
            ensure,
            object_type,
            template,
            apply,
            apply_target,
            import,
            assign,
            ignore,
        })
    }
}

fn expressions(value: &Value, field: &str, parser: &Parser) -> Result<Vec<String>, Icinga2Error> {
    validate_array(value, field)?
        .iter()
        .map(|item| match item {
            Value::String(expr) => Ok(parser.normalize(expr)),
            Value::Raw(expr) => Ok(expr.clone()),
            other => Err(Icinga2Error::type_mismatch(
                field,
                other.describe(),
                "a String",
                other.type_name(),
            )),
        })
        .collect()
}
