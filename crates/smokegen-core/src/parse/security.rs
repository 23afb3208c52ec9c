use indexmap::IndexMap;

/// A security requirement: map of scheme name → required scopes.
///
/// Carried through to the generated files as an annotation for human review;
/// never interpreted.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;
