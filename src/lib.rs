pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod validate;
pub mod utils;
pub mod config;
pub mod object;

pub use ast::{ConstantSet, Value};
pub use error::Icinga2Error;
pub use config::{ModuleConfig, Platform};
pub use object::{render_object, DirectiveSet, Fragment, ObjectParams};
pub use printer::{render_attributes, LineEnding};
