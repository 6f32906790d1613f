//! DrawerBuilder for writing the generated interface
//!
//! This module provides a high-level API that validates the interface,
//! generates the Go source, writes it and runs the formatter over it.

use crate::build::Formatter;
use crate::codegen::GoGenerator;
use crate::error::{WeldError, WeldResult};
use crate::ir::DrawerInterface;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output path used when none is set
pub const DEFAULT_OUTPUT: &str = "drawer.go";

/// Builder for the generated Drawer interface file
///
/// # Example
/// ```no_run
/// use drawer_weld::build::DrawerBuilder;
/// use drawer_weld::ir::cairo_context;
///
/// DrawerBuilder::new(cairo_context().unwrap())
///     .output("backend/drawer.go")
///     .build()
///     .expect("Failed to generate drawer.go");
/// ```
pub struct DrawerBuilder {
    iface: DrawerInterface,
    output: PathBuf,
    formatter: Option<Formatter>,
}

impl DrawerBuilder {
    /// Create a builder writing to `drawer.go` and formatting with goimports
    pub fn new(iface: DrawerInterface) -> Self {
        Self {
            iface,
            output: PathBuf::from(DEFAULT_OUTPUT),
            formatter: Some(Formatter::default()),
        }
    }

    /// Set the output path
    pub fn output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = path.as_ref().to_path_buf();
        self
    }

    /// Set the formatter
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Write the file without running a formatter
    pub fn skip_format(mut self) -> Self {
        self.formatter = None;
        self
    }

    /// Build the interface file
    ///
    /// This will:
    /// 1. Validate the interface
    /// 2. Generate the Go source
    /// 3. Write it to the output path
    /// 4. Run the formatter, if any
    pub fn build(self) -> WeldResult<BuildOutput> {
        self.iface.validate()?;

        let generated = GoGenerator::new(&self.iface).generate();

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| WeldError::io(parent, e))?;
            }
        }
        fs::write(&self.output, &generated.content).map_err(|e| WeldError::io(&self.output, e))?;

        info!(
            path = %self.output.display(),
            emitted = generated.emitted,
            skipped = generated.skipped.len(),
            "wrote {} interface",
            self.iface.name
        );

        let formatted = match self.formatter {
            Some(ref formatter) => {
                formatter.run(&self.output)?;
                info!(program = formatter.program(), "formatted {}", self.output.display());
                true
            }
            None => false,
        };

        Ok(BuildOutput {
            path: self.output,
            emitted: generated.emitted,
            skipped: generated.skipped,
            formatted,
        })
    }
}

/// Result of a successful build
#[derive(Debug)]
pub struct BuildOutput {
    /// Path to the generated file
    pub path: PathBuf,
    /// Number of methods in the interface
    pub emitted: usize,
    /// Methods left out for lack of documentation
    pub skipped: Vec<String>,
    /// Whether the formatter ran
    pub formatted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{InterfaceValidationError, MethodDescriptor};
    use tempfile::TempDir;

    fn sample() -> DrawerInterface {
        DrawerInterface::default()
            .method(
                MethodDescriptor::new("stroke")
                    .with_params(&["self", "width"])
                    .with_doc(":type width: float\nDraws a line"),
            )
            .method(MethodDescriptor::new("get_target").param("self"))
    }

    #[test]
    fn test_builder_defaults() {
        let builder = DrawerBuilder::new(sample());

        assert_eq!(builder.output, PathBuf::from("drawer.go"));
        assert_eq!(builder.formatter, Some(Formatter::goimports()));
    }

    #[test]
    fn test_build_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gen").join("drawer.go");

        let output = DrawerBuilder::new(sample())
            .output(&path)
            .skip_format()
            .build()
            .unwrap();

        assert_eq!(output.path, path);
        assert_eq!(output.emitted, 1);
        assert_eq!(output.skipped, vec!["get_target"]);
        assert!(!output.formatted);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("package goweasyprint\n"));
        assert!(content.contains("// Draws a line\nStroke(width float)\n"));
    }

    #[test]
    fn test_build_overwrites_previous_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drawer.go");
        fs::write(&path, "stale").unwrap();

        DrawerBuilder::new(sample())
            .output(&path)
            .skip_format()
            .build()
            .unwrap();

        assert!(!fs::read_to_string(&path).unwrap().contains("stale"));
    }

    #[test]
    fn test_build_rejects_invalid_interface() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drawer.go");

        let err = DrawerBuilder::new(DrawerInterface::new("", "Drawer"))
            .output(&path)
            .skip_format()
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            WeldError::Validation(InterfaceValidationError::EmptyPackage)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_build_propagates_formatter_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drawer.go");

        let err = DrawerBuilder::new(sample())
            .output(&path)
            .formatter(Formatter::new("drawer-weld-no-such-formatter"))
            .build()
            .unwrap_err();

        assert!(matches!(err, WeldError::FormatterNotFound { .. }));
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_build_runs_formatter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drawer.go");

        let output = DrawerBuilder::new(sample())
            .output(&path)
            .formatter(Formatter::new("true"))
            .build()
            .unwrap();

        assert!(output.formatted);
    }
}
