use crate::ast::ConstantSet;

mod expression;
mod value;

/// Re-quotes Icinga2 expressions and scalars against a set of constants.
///
/// Literal operands are wrapped in double quotes while numbers, durations,
/// booleans, `null`, constants, `host.`/`service.`/`user.` references,
/// function calls and `{{ ... }}` blocks are left bare.
pub struct Parser<'a> {
    constants: &'a ConstantSet,
}

impl<'a> Parser<'a> {
    pub fn new(constants: &'a ConstantSet) -> Self {
        Self { constants }
    }

    /// Normalize a full expression such as `host.vars.os == bar && host.address`.
    pub fn normalize(&self, expr: &str) -> String {
        expression::normalize(self, expr)
    }

    /// Render a single operand, quoting it unless it is Icinga2 syntax.
    pub fn scalar(&self, word: &str) -> String {
        value::scalar(self, word)
    }

    pub fn is_bare(&self, word: &str) -> bool {
        value::is_bare(self, word)
    }
}

/// True for the `{{ ... }}` lambda blocks Icinga2 evaluates at runtime.
pub fn is_raw_block(s: &str) -> bool {
    value::is_raw_block(s)
}

#[cfg(test)]
mod tests;
