/// A path pattern broken into its placeholder structure plus the TypeScript
/// expression that produces the request path at test-execution time.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatedPath {
    pub has_params: bool,
    /// Placeholder names, one entry per occurrence, left to right.
    pub params: Vec<String>,
    /// TypeScript expression producing the request path.
    pub expr: String,
}

/// Environment variable consulted for a placeholder at test-run time.
///
/// Only the case changes; a placeholder like `{season-id}` resolves via
/// `PATH_SEASON-ID`.
pub fn env_var_name(param: &str) -> String {
    format!("PATH_{}", param.to_uppercase())
}

enum Segment<'a> {
    Literal(&'a str),
    Param(&'a str),
}

/// Split a pattern on `{name}` placeholders. A `{` with no closing `}` (and
/// the empty `{}`) stays literal.
fn segments(pattern: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = pattern;
    while let Some(open) = rest.find('{') {
        match rest[open + 1..].find('}') {
            None => break,
            Some(0) => {
                out.push(Segment::Literal(&rest[..open + 2]));
                rest = &rest[open + 2..];
            }
            Some(len) => {
                if open > 0 {
                    out.push(Segment::Literal(&rest[..open]));
                }
                out.push(Segment::Param(&rest[open + 1..open + 1 + len]));
                rest = &rest[open + 2 + len..];
            }
        }
    }
    if !rest.is_empty() {
        out.push(Segment::Literal(rest));
    }
    out
}

/// Convert a path pattern into its resolved-path expression.
///
/// Without placeholders the expression is the single-quoted literal pattern.
/// With placeholders it is a template literal substituting each `{name}` from
/// `PATH_<NAME>`, falling back to the deliberately bogus `REPLACE_<NAME>` so
/// an unresolved parameter fails the request loudly instead of silently.
pub fn template_path(pattern: &str) -> TemplatedPath {
    let segments = segments(pattern);
    let params: Vec<String> = segments
        .iter()
        .filter_map(|s| match s {
            Segment::Param(name) => Some((*name).to_string()),
            Segment::Literal(_) => None,
        })
        .collect();

    if params.is_empty() {
        return TemplatedPath {
            has_params: false,
            params,
            expr: format!("'{pattern}'"),
        };
    }

    let mut expr = String::with_capacity(pattern.len() * 2);
    expr.push('`');
    for segment in &segments {
        match segment {
            Segment::Literal(text) => expr.push_str(text),
            Segment::Param(name) => {
                expr.push_str(&format!(
                    "${{process.env[\"{}\"] || \"REPLACE_{}\"}}",
                    env_var_name(name),
                    name.to_uppercase()
                ));
            }
        }
    }
    expr.push('`');

    TemplatedPath {
        has_params: true,
        params,
        expr,
    }
}
