//! Build utilities for the Drawer interface
//!
//! This module provides:
//! - DrawerBuilder for writing the generated Go file
//! - Formatter for running the Go formatter over it

pub mod drawer;
pub mod format;

pub use drawer::{BuildOutput, DrawerBuilder, DEFAULT_OUTPUT};
pub use format::Formatter;
