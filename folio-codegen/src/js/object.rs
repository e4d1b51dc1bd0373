//! JavaScript object literal builder.

use super::string_literal;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property in a JavaScript object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A literal string value (will be quoted and escaped).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// The `null` literal.
    Null,
}

/// Builder for JavaScript object literals.
///
/// Properties render in insertion order, one per line, each followed by a
/// comma.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(key, PropertyValue::String(value.into()))
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(key, PropertyValue::Raw(value.into()))
    }

    /// Add a raw expression property, or `null` when the value is absent.
    pub fn raw_or_null(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.raw(key, v),
            None => self.property(key, PropertyValue::Null),
        }
    }

    fn property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value,
        });
        self
    }

    /// Get the properties in insertion order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Look up a property value by key.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.key == key)
            .map(|p| &p.value)
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Build the object as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(self);
        builder.build()
    }

    fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|prop| match &prop.value {
                PropertyValue::String(s) => {
                    CodeFragment::Line(format!("{}: {},", prop.key, string_literal(s)))
                }
                PropertyValue::Raw(s) => CodeFragment::Line(format!("{}: {},", prop.key, s)),
                PropertyValue::Null => CodeFragment::Line(format!("{}: null,", prop.key)),
            })
            .collect()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::Raw("{}".to_string())];
        }

        vec![CodeFragment::Block {
            header: "{".to_string(),
            body: self.properties_to_fragments(),
            close: Some("}".to_string()),
        }]
    }
}
