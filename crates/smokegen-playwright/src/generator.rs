use smokegen_core::parse::spec::ApiDocument;
use smokegen_core::{CodeGenerator, GeneratedFile, ops, sanitize};

use crate::EmitError;
use crate::emitters::{manifest, spec};

/// Playwright smoke-test generator: one `<stem>.spec.ts` per operation plus
/// the manifest.
pub struct PlaywrightGenerator;

impl CodeGenerator for PlaywrightGenerator {
    type Error = EmitError;

    fn generate(&self, doc: &ApiDocument) -> Result<Vec<GeneratedFile>, EmitError> {
        let mut files = Vec::new();
        let mut stems: Vec<String> = Vec::new();

        for op in ops::operations(doc) {
            let stem = sanitize::file_stem(&format!("{}_{}", op.method.as_str(), op.path));
            if stems.contains(&stem) {
                // Overwrite is kept; the collision is only surfaced.
                log::warn!(
                    "file name collision: {stem}.spec.ts is produced by more than one operation"
                );
            }
            files.push(GeneratedFile {
                path: format!("{stem}.spec.ts"),
                content: spec::emit_spec(op.method, op.path, op.operation)?,
            });
            stems.push(stem);
        }

        files.push(GeneratedFile {
            path: manifest::MANIFEST_FILE.to_string(),
            content: manifest::emit_manifest(doc.default_server_url(), &stems)?,
        });

        Ok(files)
    }
}
