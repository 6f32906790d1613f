//! Signature extraction
//!
//! Turns one method descriptor into the fragments of the generated
//! interface:
//! - the docstring with its `:type` annotation lines removed
//! - a parameter name to kind map built from those annotations
//! - the default-value comment
//! - the Go parameter list

pub mod annotations;
pub mod docstring;
pub mod lines;
pub mod signature;

pub use annotations::{
    parse_type_annotations, parse_type_annotations_with, AnnotationMatcher, SphinxTypeMatcher,
    TypeAnnotationMap,
};
pub use docstring::clean_docstring;
pub use lines::{split_lines, split_lines_inclusive};
pub use signature::{
    comment_block, format_default_comment, format_parameter_list, render_method, ANY_KIND,
    RECEIVER_PARAM,
};
