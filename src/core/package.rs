use std::fmt;

use serde::Serialize;

/// A named node in the dependency graph.
///
/// Equality and hashing are exact, case-sensitive name comparisons. Ordering
/// is lexicographic by name and only used to make output deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Package(String);

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Package {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
