//! External formatter invocation

use crate::error::{WeldError, WeldResult};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// An external program run over the generated file (`program args... file`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    program: String,
    args: Vec<String>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::goimports()
    }
}

impl Formatter {
    /// Create a formatter for `program` with no extra arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// `goimports -w <file>`
    pub fn goimports() -> Self {
        Self::new("goimports").arg("-w")
    }

    /// Add an argument placed before the file path
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the arguments placed before the file path
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Program name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the formatter over `file`
    pub fn run(&self, file: &Path) -> WeldResult<()> {
        let program = which::which(&self.program).map_err(|source| {
            WeldError::FormatterNotFound {
                program: self.program.clone(),
                source,
            }
        })?;

        debug!(program = %program.display(), file = %file.display(), "running formatter");

        let output = Command::new(&program)
            .args(&self.args)
            .arg(file)
            .output()
            .map_err(|source| WeldError::FormatterSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(WeldError::FormatterFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
