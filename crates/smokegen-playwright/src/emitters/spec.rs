use minijinja::{Environment, context};

use smokegen_core::ops::HttpMethod;
use smokegen_core::parse::operation::Operation;
use smokegen_core::template;

use crate::EmitError;

/// Emit the body of one `<stem>.spec.ts` file for a single operation.
///
/// The rendered file contains exactly one test: a base-URL guard, the
/// templated request path (placeholders resolve from `PATH_<NAME>` at test
/// execution, not here), an optional `Authorization` header from
/// `AUTH_HEADER`, one HTTP call, and the two baseline status assertions.
pub fn emit_spec(method: HttpMethod, path: &str, op: &Operation) -> Result<String, EmitError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(
        "test.spec.ts.j2",
        include_str!("../../templates/test.spec.ts.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("test.spec.ts.j2").unwrap();

    let templated = template::template_path(path);
    let title = test_title(method, path, op.summary.as_deref());

    Ok(tmpl.render(context! {
        title => escape_single_quotes(&title),
        method => method.as_str(),
        path_expr => templated.expr,
        security_comment => security_comment(op),
    })?)
}

/// Title shown by the runner: `<METHOD> <path>`, plus the summary when present.
fn test_title(method: HttpMethod, path: &str, summary: Option<&str>) -> String {
    let base = format!("{} {}", method.as_upper(), path);
    match summary {
        Some(summary) => format!("{base} - {summary}"),
        None => base,
    }
}

/// The title is embedded in a single-quoted TypeScript string.
fn escape_single_quotes(s: &str) -> String {
    s.replace('\'', "\\'")
}

/// ` // security: [...]` appended to the TODO marker, or empty. The metadata
/// is passed through verbatim for human review, never enforced.
fn security_comment(op: &Operation) -> String {
    match &op.security {
        Some(security) => format!(
            " // security: {}",
            serde_json::to_string(security).expect("security metadata should serialize")
        ),
        None => String::new(),
    }
}
