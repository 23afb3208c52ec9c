/// Make a file-system-safe stem out of an arbitrary string, typically
/// `"<method>_<path>"`.
///
/// Placeholder interiors are flattened first so parameter names survive as
/// readable tokens, then every maximal run outside `[a-zA-Z0-9_-]` collapses
/// to a single underscore, leading and trailing underscores are trimmed, and
/// the result is capped at 200 characters. Deterministic, no collision
/// detection: two operations can sanitize to the same stem.
pub fn file_stem(input: &str) -> String {
    let flattened = flatten_placeholders(input);

    let mut collapsed = String::with_capacity(flattened.len());
    let mut in_run = false;
    for ch in flattened.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            collapsed.push(ch);
            in_run = false;
        } else if !in_run {
            collapsed.push('_');
            in_run = true;
        }
    }

    collapsed.trim_matches('_').chars().take(200).collect()
}

/// Replace each `{...}` run with the word characters inside it, dropping the
/// braces. Unclosed or empty braces are left for the general pass.
fn flatten_placeholders(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find('{') {
        match rest[open + 1..].find('}') {
            None | Some(0) => {
                out.push_str(&rest[..open + 1]);
                rest = &rest[open + 1..];
            }
            Some(len) => {
                out.push_str(&rest[..open]);
                out.extend(
                    rest[open + 1..open + 1 + len]
                        .chars()
                        .filter(|c| c.is_ascii_alphanumeric() || *c == '_'),
                );
                rest = &rest[open + 2 + len..];
            }
        }
    }
    out.push_str(rest);
    out
}
