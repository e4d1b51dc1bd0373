//! JavaScript array literal builder.

use super::string_literal;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// An element in a JavaScript array literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayElement {
    /// A literal string value (will be quoted and escaped).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
}

/// Builder for JavaScript array literals, rendered one element per line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsArray {
    elements: Vec<ArrayElement>,
}

impl JsArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an array from raw expressions.
    pub fn from_raw<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: iter.into_iter().map(|s| ArrayElement::Raw(s.into())).collect(),
        }
    }

    /// Add a string element (will be quoted).
    pub fn string(mut self, value: impl Into<String>) -> Self {
        self.elements.push(ArrayElement::String(value.into()));
        self
    }

    /// Add a raw expression element (will not be quoted).
    pub fn raw(mut self, value: impl Into<String>) -> Self {
        self.elements.push(ArrayElement::Raw(value.into()));
        self
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the array is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Build the array literal as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for JsArray {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.elements.is_empty() {
            return vec![CodeFragment::Raw("[]".to_string())];
        }

        let body = self
            .elements
            .iter()
            .map(|e| match e {
                ArrayElement::String(s) => CodeFragment::Line(format!("{},", string_literal(s))),
                ArrayElement::Raw(s) => CodeFragment::Line(format!("{s},")),
            })
            .collect();

        vec![CodeFragment::block("[", body, Some("]".to_string()))]
    }
}
