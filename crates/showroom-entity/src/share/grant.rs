//! The set of template slugs a link, token, or session grants.

use serde::{Deserialize, Serialize};

/// Template access granted to a visitor.
///
/// On the wire this is `Option<Vec<String>>`: `null` or an absent field
/// means every template, a list means exactly those slugs. An empty list
/// therefore grants nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum SlugGrant {
    /// Unrestricted access.
    #[default]
    All,
    /// Access restricted to the listed `branch/name` slugs.
    Only(Vec<String>),
}

impl SlugGrant {
    /// Returns `true` if `slug` is covered by this grant.
    pub fn allows(&self, slug: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(slugs) => slugs.iter().any(|s| s == slug),
        }
    }

    /// Returns `true` if the grant cannot match any template.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Only(slugs) if slugs.is_empty())
    }
}

impl From<Option<Vec<String>>> for SlugGrant {
    fn from(value: Option<Vec<String>>) -> Self {
        match value {
            None => Self::All,
            Some(slugs) => Self::Only(slugs),
        }
    }
}

impl From<SlugGrant> for Option<Vec<String>> {
    fn from(value: SlugGrant) -> Self {
        match value {
            SlugGrant::All => None,
            SlugGrant::Only(slugs) => Some(slugs),
        }
    }
}

impl From<Vec<String>> for SlugGrant {
    fn from(value: Vec<String>) -> Self {
        Self::Only(value)
    }
}
