//! `:type name: kind` annotation parsing
//!
//! Docstrings declare parameter kinds with Sphinx field lines such as
//! `:type width: float`. Those lines are pulled out of the documentation and
//! collected into a [`TypeAnnotationMap`].

use crate::extract::lines::split_lines_inclusive;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    /// Regex for `:type name: kind` anywhere in a line
    static ref TYPE_REGEX: Regex = Regex::new(r":type (\w+): (\w+)").unwrap();
}

/// Parameter name to declared kind
pub type TypeAnnotationMap = BTreeMap<String, String>;

/// Recognizes annotation lines in a docstring
pub trait AnnotationMatcher {
    /// Return `(name, kind)` when `line` is an annotation line
    fn match_line(&self, line: &str) -> Option<(String, String)>;
}

/// Matches the Sphinx `:type name: kind` convention
#[derive(Debug, Clone, Copy, Default)]
pub struct SphinxTypeMatcher;

impl AnnotationMatcher for SphinxTypeMatcher {
    fn match_line(&self, line: &str) -> Option<(String, String)> {
        TYPE_REGEX
            .captures(line)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
    }
}

/// Split a docstring into its plain text and its `:type` annotations
///
/// Annotation lines are removed from the returned text; every other line is
/// kept verbatim, terminator included. A repeated name keeps its last kind.
pub fn parse_type_annotations(doc: &str) -> (String, TypeAnnotationMap) {
    parse_type_annotations_with(doc, &SphinxTypeMatcher)
}

/// [`parse_type_annotations`] with a custom line matcher
pub fn parse_type_annotations_with<M>(doc: &str, matcher: &M) -> (String, TypeAnnotationMap)
where
    M: AnnotationMatcher + ?Sized,
{
    let mut cleaned = String::with_capacity(doc.len());
    let mut types = TypeAnnotationMap::new();

    for line in split_lines_inclusive(doc) {
        match matcher.match_line(line) {
            Some((mut name, mut kind)) => {
                // cairocffi writes `:type float: x` for some float parameters
                if name == "float" {
                    std::mem::swap(&mut name, &mut kind);
                }
                types.insert(name, kind);
            }
            None => cleaned.push_str(line),
        }
    }

    (cleaned, types)
}
