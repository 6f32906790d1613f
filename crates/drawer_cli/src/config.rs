//! Optional TOML configuration for drawer-gen
//!
//! ```toml
//! output = "backend/drawer.go"
//! methods = "cairo_context.json"
//!
//! [interface]
//! package = "backend"
//! name = "Drawer"
//!
//! [formatter]
//! program = "gofmt"
//! args = ["-w"]
//! ```

use anyhow::{Context, Result};
use drawer_weld::{DrawerInterface, Formatter, TypeAlias};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output path for the generated Go file
    pub output: Option<PathBuf>,
    /// Descriptor JSON to use instead of the built-in table
    pub methods: Option<PathBuf>,
    /// Overrides applied to the loaded interface
    pub interface: InterfaceOverrides,
    /// Formatter settings
    pub formatter: FormatterConfig,
}

/// Interface fields that replace the descriptor document's values
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterfaceOverrides {
    pub package: Option<String>,
    pub source: Option<String>,
    pub name: Option<String>,
    pub doc: Option<String>,
    pub aliases: Option<Vec<TypeAlias>>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub enabled: bool,
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: None,
            args: None,
        }
    }
}

impl Config {
    /// Parse configuration from file path
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.output = config.output.map(|p| base.join(p));
            config.methods = config.methods.map(|p| base.join(p));
        }

        Ok(config)
    }

    /// Apply interface overrides
    pub fn apply(&self, iface: &mut DrawerInterface) {
        let overrides = &self.interface;

        if let Some(ref package) = overrides.package {
            iface.package = package.clone();
        }
        if let Some(ref source) = overrides.source {
            iface.source = source.clone();
        }
        if let Some(ref name) = overrides.name {
            iface.name = name.clone();
        }
        if let Some(ref doc) = overrides.doc {
            iface.doc = Some(doc.clone());
        }
        if let Some(ref aliases) = overrides.aliases {
            iface.aliases = aliases.clone();
        }
    }

    /// The configured formatter, or `None` when formatting is disabled
    pub fn formatter(&self) -> Option<Formatter> {
        if !self.formatter.enabled {
            return None;
        }

        let mut formatter = match self.formatter.program {
            Some(ref program) => Formatter::new(program.clone()),
            None => Formatter::goimports(),
        };
        if let Some(ref args) = self.formatter.args {
            formatter = formatter.with_args(args.clone());
        }

        Some(formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").unwrap();

        assert!(config.output.is_none());
        assert!(config.methods.is_none());
        assert_eq!(config.formatter(), Some(Formatter::goimports()));
    }

    #[test]
    fn test_formatter_settings() {
        let config: Config = toml::from_str(
            r#"
            [formatter]
            program = "gofmt"
            args = ["-s", "-w"]
            "#,
        )
        .unwrap();
        assert_eq!(
            config.formatter(),
            Some(Formatter::new("gofmt").arg("-s").arg("-w"))
        );

        let config: Config = toml::from_str("[formatter]\nenabled = false\n").unwrap();
        assert_eq!(config.formatter(), None);
    }

    #[test]
    fn test_apply_overrides() {
        let config: Config = toml::from_str(
            r#"
            [interface]
            package = "backend"
            name = "Canvas"
            aliases = [{ name = "Fl", target = "float64" }]
            "#,
        )
        .unwrap();

        let mut iface = DrawerInterface::default();
        config.apply(&mut iface);

        assert_eq!(iface.package, "backend");
        assert_eq!(iface.name, "Canvas");
        assert_eq!(iface.source, "cairocffi.py");
        assert_eq!(iface.aliases, vec![TypeAlias::new("Fl", "float64")]);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<Config>("outptu = \"x.go\"").is_err());
    }

    #[test]
    fn test_paths_relative_to_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drawer-gen.toml");
        fs::write(&path, "output = \"gen/drawer.go\"\nmethods = \"methods.json\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.output, Some(dir.path().join("gen/drawer.go")));
        assert_eq!(config.methods, Some(dir.path().join("methods.json")));
    }
}
