use smokegen_core::ops::{self, HttpMethod};
use smokegen_core::parse;

const STARDUST: &str = include_str!("fixtures/stardust.yml");
const MINIMAL: &str = include_str!("fixtures/minimal.yml");

#[test]
fn parse_stardust_yaml() {
    let doc = parse::from_yaml(STARDUST).expect("should parse stardust.yml");
    assert_eq!(doc.servers.len(), 1);
    assert_eq!(
        doc.default_server_url(),
        Some("https://api.staging.stardustlab.com")
    );
    assert_eq!(doc.paths.len(), 8);

    let subs = doc
        .paths
        .get("/subscriptions")
        .expect("should have /subscriptions");
    let post = subs.post.as_ref().expect("should have POST");
    assert_eq!(post.summary.as_deref(), Some("Create subscription"));

    let security = post.security.as_ref().expect("should have security");
    assert_eq!(security.len(), 1);
    assert!(security[0].contains_key("bearerAuth"));
    assert!(security[0]["bearerAuth"].is_empty());

    // Methods not present in the document stay absent.
    assert!(subs.put.is_none());
    assert!(subs.delete.is_none());
}

#[test]
fn parse_minimal_yaml() {
    let doc = parse::from_yaml(MINIMAL).expect("should parse minimal.yml");
    assert!(doc.servers.is_empty());
    assert_eq!(doc.default_server_url(), None);
    assert_eq!(doc.paths.len(), 1);
}

#[test]
fn parse_paths_keep_document_order() {
    let doc = parse::from_yaml(STARDUST).unwrap();
    let order: Vec<&String> = doc.paths.keys().collect();
    assert_eq!(order[0], "/subscriptions");
    assert_eq!(order[3], "/gifts/{giftId}");
    assert_eq!(order[7], "/offers/{offerID}/localizations/{countryCode}");
}

#[test]
fn parse_defaults_paths_and_servers() {
    // A document without `paths` parses to an empty table, not an error.
    let doc = parse::from_yaml("info:\n  title: Empty\n").unwrap();
    assert!(doc.paths.is_empty());
    assert!(doc.servers.is_empty());
}

#[test]
fn parse_ignores_unknown_fields() {
    let yaml = r#"
openapi: 3.0.3
info:
  title: Stardust API
  version: "1.0"
paths:
  /passes:
    get:
      summary: List passes
      operationId: listPasses
      tags: [passes]
"#;
    let doc = parse::from_yaml(yaml).expect("unknown fields should be ignored");
    let passes = doc.paths.get("/passes").unwrap();
    assert_eq!(
        passes.get.as_ref().unwrap().summary.as_deref(),
        Some("List passes")
    );
}

#[test]
fn parse_json_document() {
    let json = r#"{
  "servers": [{"url": "https://api.example.com"}],
  "paths": {"/a": {"get": {"summary": "A"}}}
}"#;
    let doc = parse::from_json(json).expect("should parse JSON");
    assert_eq!(doc.default_server_url(), Some("https://api.example.com"));
    assert_eq!(doc.paths.len(), 1);
}

#[test]
fn parse_malformed_yaml_errors() {
    let result = parse::from_yaml("paths: [not, a, mapping\n");
    assert!(result.is_err());
}

#[test]
fn enumerate_stardust_operations() {
    let doc = parse::from_yaml(STARDUST).unwrap();
    let descriptors: Vec<(HttpMethod, &str)> =
        ops::operations(&doc).map(|op| (op.method, op.path)).collect();

    assert_eq!(descriptors.len(), 11);
    // Paths in document order, methods in fixed order within a path.
    assert_eq!(descriptors[0], (HttpMethod::Get, "/subscriptions"));
    assert_eq!(descriptors[1], (HttpMethod::Post, "/subscriptions"));
    assert_eq!(
        descriptors[2],
        (HttpMethod::Get, "/subscriptions/{subscriptionId}")
    );
    assert_eq!(
        descriptors[3],
        (HttpMethod::Patch, "/subscriptions/{subscriptionId}")
    );
    assert_eq!(descriptors[9], (HttpMethod::Delete, "/offers/season-groups/{id}"));
    assert_eq!(
        descriptors[10],
        (HttpMethod::Patch, "/offers/{offerID}/localizations/{countryCode}")
    );
}
