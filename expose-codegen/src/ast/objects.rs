//! TypeScript/JavaScript object literal builder.

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
    /// A raw expression, such as a bound identifier (will not be quoted).
    Raw(String),
    /// A nested object.
    Object(JsObject),
}

impl Property {
    /// Create a property with a raw expression value (will not be quoted).
    pub fn raw(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        }
    }

    /// Create a property with a nested object value.
    pub fn object(key: impl Into<String>, value: JsObject) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Object(value),
        }
    }

    /// The key as a quoted string literal.
    ///
    /// Keys come from file and directory names, so they are always quoted
    /// rather than checked for identifier validity.
    fn quoted_key(&self) -> String {
        serde_json::Value::String(self.key.clone()).to_string()
    }
}

/// Builder for JavaScript/TypeScript object literals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::raw(key, value));
        self
    }

    /// Add a property with a nested object value.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push(Property::object(key, value));
        self
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Build the object literal as a string, without a trailing newline.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        let mut code = builder.build();
        if code.ends_with('\n') {
            code.pop();
        }
        code
    }

    /// Convert properties to code fragments.
    fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|prop| match &prop.value {
                PropertyValue::Raw(s) => {
                    CodeFragment::Line(format!("{}: {},", prop.quoted_key(), s))
                }
                PropertyValue::Object(obj) if obj.is_empty() => {
                    CodeFragment::Line(format!("{}: {{}},", prop.quoted_key()))
                }
                PropertyValue::Object(obj) => CodeFragment::Block {
                    header: format!("{}: {{", prop.quoted_key()),
                    body: obj.properties_to_fragments(),
                    close: Some("},".to_string()),
                },
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
