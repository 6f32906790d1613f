//! Go interface generator
//!
//! Generates the Go source file declaring the drawing backend interface.

use crate::extract::{comment_block, render_method};
use crate::ir::DrawerInterface;

/// Generated Go source plus what went into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Full file content
    pub content: String,
    /// Number of methods written to the interface
    pub emitted: usize,
    /// Upstream names of methods left out for lack of documentation
    pub skipped: Vec<String>,
}

/// Generator for the Go interface file
pub struct GoGenerator<'a> {
    iface: &'a DrawerInterface,
}

impl<'a> GoGenerator<'a> {
    /// Create a new Go generator for an interface
    pub fn new(iface: &'a DrawerInterface) -> Self {
        Self { iface }
    }

    /// Generate the complete Go source
    pub fn generate(&self) -> GeneratedFile {
        let mut output = String::new();

        output.push_str(&format!("package {}\n\n", self.iface.package));

        if !self.iface.source.is_empty() {
            output.push_str(&format!("// autogenerated from {}\n\n", self.iface.source));
        }

        if !self.iface.aliases.is_empty() {
            output.push_str(&self.generate_aliases());
            output.push('\n');
        }

        let (body, emitted, skipped) = self.generate_body();

        if let Some(ref doc) = self.iface.doc {
            output.push_str(&comment_block(doc));
            output.push('\n');
        }
        output.push_str(&format!("type {} interface {{\n    ", self.iface.name));
        output.push_str(&body);
        output.push_str("\n}\n");

        GeneratedFile {
            content: output,
            emitted,
            skipped,
        }
    }

    /// Generate the `type name = target` lines
    fn generate_aliases(&self) -> String {
        let mut output = String::new();

        for alias in &self.iface.aliases {
            output.push_str(&format!("type {} = {}\n", alias.name, alias.target));
        }

        output
    }

    /// Concatenate the method fragments in declaration order
    fn generate_body(&self) -> (String, usize, Vec<String>) {
        let mut body = String::new();
        let mut emitted = 0;
        let mut skipped = Vec::new();

        for method in &self.iface.methods {
            match render_method(method) {
                Some(fragment) => {
                    body.push_str(&fragment);
                    emitted += 1;
                }
                None => skipped.push(method.name.clone()),
            }
        }

        (body, emitted, skipped)
    }
}
