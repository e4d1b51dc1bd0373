//! JavaScript code generation utilities for folio.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`js`] - JavaScript literal and module builders (JsObject, JsArray, ModuleExports, etc.)

pub mod builder;
pub mod js;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use js::{JsArray, JsModule, JsObject, ModuleExports, string_literal};
