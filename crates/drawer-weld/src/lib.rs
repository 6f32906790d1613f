//! Drawer-Weld: Go interface generation for the drawing backend
//!
//! This crate turns the methods of cairocffi's `Context` into the Go
//! `Drawer` interface used by the rendering engine. Each method's docstring
//! is copied over as comments, and its `:type name: kind` annotations
//! become the Go parameter types.
//!
//! # Architecture
//!
//! - `ir`: Method descriptors and the interface description
//! - `extract`: Docstring parsing and signature formatting
//! - `codegen`: Go source generation
//! - `build`: Writing the generated file and running the formatter
//!
//! # Usage
//!
//! ```rust,no_run
//! use drawer_weld::{build::DrawerBuilder, ir::cairo_context};
//!
//! DrawerBuilder::new(cairo_context().expect("built-in table"))
//!     .output("drawer.go")
//!     .build()
//!     .expect("Failed to generate drawer.go");
//! ```

pub mod build;
pub mod codegen;
pub mod error;
pub mod extract;
pub mod ir;

// Re-export commonly used types
pub use build::{BuildOutput, DrawerBuilder, Formatter};
pub use codegen::GoGenerator;
pub use error::{WeldError, WeldResult};
pub use extract::{
    clean_docstring, comment_block, format_default_comment, format_parameter_list,
    parse_type_annotations, parse_type_annotations_with, render_method, AnnotationMatcher,
    SphinxTypeMatcher, TypeAnnotationMap,
};
pub use ir::{
    cairo_context, to_pascal_case, DefaultValue, DrawerInterface, InterfaceValidationError,
    MethodDescriptor, TypeAlias,
};
