//! Template catalog entry.

use serde::{Deserialize, Serialize};

/// One template demo site in the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Branch (industry vertical), first half of the slug.
    pub branch: String,
    /// Template name within the branch, second half of the slug.
    pub name: String,
    /// Template type classification used by link filters.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: Option<String>,
}

impl TemplateEntry {
    /// Composite `branch/name` key.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.branch, self.name)
    }

    /// Returns `true` if this entry is identified by `slug`.
    pub fn has_slug(&self, slug: &str) -> bool {
        slug.split_once('/')
            .is_some_and(|(branch, name)| branch == self.branch && name == self.name)
    }
}
