//! JavaScript builders for the generated CommonJS modules.
//!
//! These provide a high-level API for constructing JavaScript literals and
//! module statements, which can then be rendered via CodeBuilder.

mod array;
mod exports;
mod literal;
mod module;
mod object;

pub use array::JsArray;
pub use exports::ModuleExports;
pub use literal::string_literal;
pub use module::JsModule;
pub use object::{JsObject, Property, PropertyValue};
