use minijinja::{Environment, context};

use crate::EmitError;

/// File name of the generated manifest.
pub const MANIFEST_FILE: &str = "_index.generated.ts";

/// Emit the manifest: the base-URL precedence note followed by one re-export
/// per generated module.
pub fn emit_manifest(default_server: Option<&str>, stems: &[String]) -> Result<String, EmitError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(
        "manifest.ts.j2",
        include_str!("../../templates/manifest.ts.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("manifest.ts.j2").unwrap();

    Ok(tmpl.render(context! {
        default_server => default_server.unwrap_or("n/a"),
        stems => stems,
    })?)
}
