//! Go signature formatting
//!
//! Builds the comment block, default-value comment and parameter list for a
//! method, and assembles them into the fragment emitted inside the
//! interface body.

use crate::extract::{clean_docstring, parse_type_annotations, split_lines, TypeAnnotationMap};
use crate::ir::{DefaultValue, MethodDescriptor};
use tracing::debug;

/// Receiver parameter dropped from signatures
pub const RECEIVER_PARAM: &str = "self";

/// Go kind used for parameters without a `:type` annotation
pub const ANY_KIND: &str = "interface{}";

/// Render a Go parameter list: `name kind, name kind`
///
/// A leading `self` is dropped. Unannotated parameters get [`ANY_KIND`].
pub fn format_parameter_list<S: AsRef<str>>(params: &[S], types: &TypeAnnotationMap) -> String {
    let params = match params.first() {
        Some(first) if first.as_ref() == RECEIVER_PARAM => &params[1..],
        _ => params,
    };

    params
        .iter()
        .map(|p| {
            let name = p.as_ref();
            let kind = types.get(name).map(String::as_str).unwrap_or(ANY_KIND);
            format!("{} {}", name, kind)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the default values as a line comment: `// name = value ...`
///
/// Defaults belong to the trailing parameters. Returns `None` when there
/// are no defaults.
pub fn format_default_comment<S: AsRef<str>>(
    params: &[S],
    defaults: &[DefaultValue],
) -> Option<String> {
    if defaults.is_empty() {
        return None;
    }

    let start = params.len().saturating_sub(defaults.len());
    let mut out = String::from("//");
    for (name, value) in params[start..].iter().zip(defaults) {
        out.push_str(&format!(" {} = {}", name.as_ref(), value));
    }

    Some(out)
}

/// Prefix every line of `text` with `// `
pub fn comment_block(text: &str) -> String {
    split_lines(text)
        .into_iter()
        .map(|line| format!("// {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one method as it appears inside the interface body
///
/// Returns `None` for undocumented methods, which are left out of the
/// interface.
pub fn render_method(method: &MethodDescriptor) -> Option<String> {
    let doc = clean_docstring(method.doc.as_deref().unwrap_or_default());
    if doc.is_empty() {
        debug!(method = %method.name, "skipping undocumented method");
        return None;
    }

    let (text, types) = parse_type_annotations(&doc);
    let signature = format!(
        "{}({})",
        method.go_name(),
        format_parameter_list(&method.params, &types)
    );

    let mut output = String::new();
    output.push('\n');
    output.push_str(&comment_block(&text));
    output.push('\n');
    if let Some(defaults) = format_default_comment(&method.params, &method.defaults) {
        output.push_str(&defaults);
        output.push('\n');
    }
    output.push_str(&signature);
    output.push('\n');

    debug!(
        method = %method.name,
        signature = %signature,
        annotated = types.len(),
        "rendered method"
    );
    Some(output)
}
