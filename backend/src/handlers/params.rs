//! Lenient query-string access

use serde::Deserialize;

/// Query pairs in arrival order. A repeated key resolves to its first
/// value, and no query string is ever rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
