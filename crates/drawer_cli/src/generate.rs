//! The generate command
//!
//! Loads the method descriptors, applies configuration, writes the Go file
//! and runs the formatter.

use crate::config::Config;
use anyhow::{bail, Context, Result};
use drawer_weld::build::DEFAULT_OUTPUT;
use drawer_weld::{cairo_context, DrawerBuilder, DrawerInterface};
use std::path::PathBuf;
use tracing::debug;

const USAGE: &str = "\
Usage: drawer-gen [OPTIONS]

Regenerates the Go Drawer interface from cairo Context method descriptors.

Options:
  -c, --config <FILE>    TOML configuration file
  -m, --methods <FILE>   Method descriptor JSON (default: built-in cairo table)
  -o, --output <PATH>    Output Go file (default: drawer.go)
      --no-format        Do not run the formatter on the output
  -h, --help             Print this help
";

/// Run the generate command with the given arguments
pub fn run(args: &[String]) -> Result<()> {
    let cmd = GenerateCommand::parse(args)?;

    if cmd.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let config = match cmd.config {
        Some(ref path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let methods = cmd.methods.clone().or_else(|| config.methods.clone());
    let mut iface = match methods {
        Some(ref path) => DrawerInterface::from_file(path)
            .with_context(|| format!("Failed to load method descriptors from {}", path.display()))?,
        None => cairo_context().context("Failed to load the built-in cairo Context table")?,
    };
    config.apply(&mut iface);
    debug!(methods = iface.methods.len(), interface = %iface.name, "loaded descriptors");

    let output = cmd
        .output
        .clone()
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let builder = DrawerBuilder::new(iface).output(&output);
    let builder = match config.formatter() {
        Some(formatter) if !cmd.no_format => builder.formatter(formatter),
        _ => builder.skip_format(),
    };

    let result = builder
        .build()
        .with_context(|| format!("Failed to generate {}", output.display()))?;

    println!(
        "Generated {}: {} methods, {} undocumented skipped",
        result.path.display(),
        result.emitted,
        result.skipped.len()
    );

    Ok(())
}

/// Generate command configuration
#[derive(Debug, Default, PartialEq)]
struct GenerateCommand {
    /// Configuration file
    config: Option<PathBuf>,
    /// Descriptor JSON overriding the built-in table
    methods: Option<PathBuf>,
    /// Output path
    output: Option<PathBuf>,
    /// Skip the formatter
    no_format: bool,
    /// Print usage and exit
    help: bool,
}

impl GenerateCommand {
    fn parse(args: &[String]) -> Result<Self> {
        let mut cmd = GenerateCommand::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    cmd.config = Some(PathBuf::from(value(args, i, "--config")?));
                    i += 2;
                }
                "--methods" | "-m" => {
                    cmd.methods = Some(PathBuf::from(value(args, i, "--methods")?));
                    i += 2;
                }
                "--output" | "-o" => {
                    cmd.output = Some(PathBuf::from(value(args, i, "--output")?));
                    i += 2;
                }
                "--no-format" => {
                    cmd.no_format = true;
                    i += 1;
                }
                "--help" | "-h" => {
                    cmd.help = true;
                    i += 1;
                }
                _ => {
                    bail!("Unknown argument: {}\n\n{}", args[i], USAGE);
                }
            }
        }

        Ok(cmd)
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    match args.get(i + 1) {
        Some(v) => Ok(v.as_str()),
        None => bail!("{} requires a value", flag),
    }
}
