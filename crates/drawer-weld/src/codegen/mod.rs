//! Code generation for the Drawer interface
//!
//! This module provides the Go generator that assembles the package
//! preamble, type aliases and interface declaration.

pub mod go;

pub use go::{GeneratedFile, GoGenerator};
