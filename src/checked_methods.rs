use crate::constants::method;
use indexmap::IndexSet;

/// HTTP methods that must pass the origin check. Anything else bypasses the gate.
///
/// Matching is exact and case-sensitive: `post` is not `POST`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CheckedMethods(IndexSet<String>);

impl CheckedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, method: &str) -> bool {
        self.0.contains(method)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CheckedMethods {
    fn default() -> Self {
        Self::list([method::POST, method::PUT, method::PATCH, method::DELETE])
    }
}

#[cfg(test)]
#[path = "checked_methods_test.rs"]
mod checked_methods_test;
