//! Method descriptors
//!
//! A descriptor is everything the generator needs to know about one method
//! of the drawing context: its name, its declared parameters, the default
//! values of its trailing parameters, and its docstring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parameter default value as declared upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// `None`
    None,
    /// `True` / `False`
    Bool(bool),
    /// Integer literal
    Int(i64),
    /// Float literal
    Float(f64),
    /// String, rendered without quotes
    Str(String),
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::None => write!(f, "None"),
            DefaultValue::Bool(true) => write!(f, "True"),
            DefaultValue::Bool(false) => write!(f, "False"),
            DefaultValue::Int(i) => write!(f, "{}", i),
            DefaultValue::Float(x) => fmt_float(*x, f),
            DefaultValue::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Write a float the way Python's `repr` does: shortest round-trip digits,
/// exponent form outside `1e-4 <= |x| < 1e16`, and a `.0` on integral values.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return write!(f, "nan");
    }
    if x.is_infinite() {
        return write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" });
    }

    let sci = format!("{:e}", x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return write!(f, "{}e{}{:02}", mantissa, sign, exp.abs());
    }

    let plain = x.to_string();
    if plain.contains('.') {
        write!(f, "{}", plain)
    } else {
        write!(f, "{}.0", plain)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Int(value)
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        DefaultValue::Float(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Str(value.to_string())
    }
}

/// Metadata for a single drawing-context method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name upstream (e.g., "set_source_rgb")
    pub name: String,
    /// Declared parameter names, receiver included
    #[serde(default)]
    pub params: Vec<String>,
    /// Default values for the trailing parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub defaults: Vec<DefaultValue>,
    /// Raw docstring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl MethodDescriptor {
    /// Create a new descriptor with no parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            defaults: Vec::new(),
            doc: None,
        }
    }

    /// Add a parameter
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(name.into());
        self
    }

    /// Set parameters
    pub fn with_params(mut self, params: &[&str]) -> Self {
        self.params = params.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Add a default value for the next trailing parameter
    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Self {
        self.defaults.push(value.into());
        self
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Go method name (snake_case to PascalCase)
    pub fn go_name(&self) -> String {
        to_pascal_case(&self.name)
    }
}

/// Convert snake_case to PascalCase
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
