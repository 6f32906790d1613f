//! Interface metadata
//!
//! `DrawerInterface` describes the whole generated Go file: its package,
//! the preamble aliases, the interface name and doc, and the methods in
//! emission order.

use crate::error::{WeldError, WeldResult};
use crate::ir::MethodDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A Go type alias emitted before the interface (`type name = target`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeAlias {
    pub name: String,
    pub target: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }
}

/// Metadata for the generated interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerInterface {
    /// Go package name (e.g., "goweasyprint")
    pub package: String,

    /// Where the methods came from, quoted in the header comment
    pub source: String,

    /// Interface name (e.g., "Drawer")
    pub name: String,

    /// Interface documentation
    pub doc: Option<String>,

    /// Type aliases declared before the interface
    pub aliases: Vec<TypeAlias>,

    /// Methods in emission order
    pub methods: Vec<MethodDescriptor>,
}

impl Default for DrawerInterface {
    fn default() -> Self {
        Self {
            package: "goweasyprint".to_string(),
            source: "cairocffi.py".to_string(),
            name: "Drawer".to_string(),
            doc: Some("Drawer is the backend doing the actual drawing\noperations".to_string()),
            aliases: vec![TypeAlias::new("float", "pr.Float")],
            methods: Vec::new(),
        }
    }
}

impl DrawerInterface {
    /// Create an interface with no doc, aliases or methods
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            source: String::new(),
            name: name.into(),
            doc: None,
            aliases: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Parse a descriptor document
    pub fn from_json(json: &str) -> WeldResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a descriptor document
    pub fn from_file(path: impl AsRef<Path>) -> WeldResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| WeldError::io(path, e))?;
        Self::from_json(&content)
    }

    /// Set the source label
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a type alias
    pub fn alias(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push(TypeAlias::new(name, target));
        self
    }

    /// Add a method
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Set methods
    pub fn with_methods(mut self, methods: Vec<MethodDescriptor>) -> Self {
        self.methods = methods;
        self
    }

    /// Validate the interface configuration
    pub fn validate(&self) -> Result<(), InterfaceValidationError> {
        if self.name.is_empty() {
            return Err(InterfaceValidationError::EmptyName);
        }

        if self.package.is_empty() {
            return Err(InterfaceValidationError::EmptyPackage);
        }

        // Two upstream names may collapse onto one Go name
        let mut seen: HashMap<String, &str> = HashMap::new();
        for method in &self.methods {
            if method.name.is_empty() {
                return Err(InterfaceValidationError::EmptyMethodName);
            }
            let go_name = method.go_name();
            if let Some(first) = seen.insert(go_name.clone(), method.name.as_str()) {
                return Err(InterfaceValidationError::DuplicateMethod {
                    go_name,
                    first: first.to_string(),
                    second: method.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Errors that can occur during interface validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceValidationError {
    /// Interface name is empty
    EmptyName,
    /// Package name is empty
    EmptyPackage,
    /// A method has an empty name
    EmptyMethodName,
    /// Two methods render to the same Go name
    DuplicateMethod {
        go_name: String,
        first: String,
        second: String,
    },
}

impl std::fmt::Display for InterfaceValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterfaceValidationError::EmptyName => write!(f, "interface name cannot be empty"),
            InterfaceValidationError::EmptyPackage => write!(f, "package name cannot be empty"),
            InterfaceValidationError::EmptyMethodName => write!(f, "method name cannot be empty"),
            InterfaceValidationError::DuplicateMethod {
                go_name,
                first,
                second,
            } => write!(
                f,
                "duplicate method {}: both {} and {} map to it",
                go_name, first, second
            ),
        }
    }
}

impl std::error::Error for InterfaceValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_interface() {
        let iface = DrawerInterface::default();

        assert_eq!(iface.package, "goweasyprint");
        assert_eq!(iface.name, "Drawer");
        assert_eq!(iface.aliases, vec![TypeAlias::new("float", "pr.Float")]);
        assert!(iface.methods.is_empty());
    }

    #[test]
    fn test_from_json_keeps_defaults() {
        let iface = DrawerInterface::from_json(
            r#"{"methods": [{"name": "stroke", "params": ["self"], "doc": "Strokes."}]}"#,
        )
        .unwrap();

        assert_eq!(iface.package, "goweasyprint");
        assert_eq!(iface.source, "cairocffi.py");
        assert_eq!(iface.methods.len(), 1);
        assert_eq!(iface.methods[0].doc.as_deref(), Some("Strokes."));
    }

    #[test]
    fn test_from_json_overrides() {
        let iface = DrawerInterface::from_json(
            r#"{"package": "backend", "name": "Canvas", "aliases": [], "methods": []}"#,
        )
        .unwrap();

        assert_eq!(iface.package, "backend");
        assert_eq!(iface.name, "Canvas");
        assert!(iface.aliases.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = DrawerInterface::from_json("{\"methods\": 3}").unwrap_err();
        assert!(matches!(err, WeldError::Descriptors(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"methods": [{{"name": "fill"}}]}}"#).unwrap();

        let iface = DrawerInterface::from_file(file.path()).unwrap();
        assert_eq!(iface.methods[0].name, "fill");
        assert!(iface.methods[0].params.is_empty());
    }

    #[test]
    fn test_from_missing_file() {
        let err = DrawerInterface::from_file("/nonexistent/methods.json").unwrap_err();
        assert!(matches!(err, WeldError::Io { .. }));
    }

    #[test]
    fn test_interface_validation() {
        let iface = DrawerInterface::new("", "Drawer");
        assert_eq!(iface.validate(), Err(InterfaceValidationError::EmptyPackage));

        let iface = DrawerInterface::new("backend", "");
        assert_eq!(iface.validate(), Err(InterfaceValidationError::EmptyName));

        let iface = DrawerInterface::new("backend", "Drawer")
            .method(MethodDescriptor::new("set_source"))
            .method(MethodDescriptor::new("set__source"));
        assert_eq!(
            iface.validate(),
            Err(InterfaceValidationError::DuplicateMethod {
                go_name: "SetSource".into(),
                first: "set_source".into(),
                second: "set__source".into(),
            })
        );

        let iface = DrawerInterface::new("backend", "Drawer")
            .method(MethodDescriptor::new("fill"))
            .method(MethodDescriptor::new("stroke"));
        assert!(iface.validate().is_ok());
    }
}
