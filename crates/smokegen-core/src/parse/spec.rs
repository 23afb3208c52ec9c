use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::PathItem;
use super::server::Server;

/// Top-level API description.
///
/// Only the parts the generator consumes are modeled; everything else in the
/// document (`openapi`, `info`, `components`, ...) is ignored on load. The
/// path table keeps document order, which downstream emission relies on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathItem>,
}

impl ApiDocument {
    /// URL of the first declared server, if any.
    pub fn default_server_url(&self) -> Option<&str> {
        self.servers.first().map(|s| s.url.as_str())
    }
}
