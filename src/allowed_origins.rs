use indexmap::IndexSet;

/// Exact origins (`scheme://host[:port]`) the gate trusts.
///
/// Values are compared byte for byte. No scheme, host or port canonicalization
/// happens, so `https://example.com` and `https://example.com:443` are distinct.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AllowedOrigins(IndexSet<String>);

impl AllowedOrigins {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    /// The empty allowlist: every checked request is rejected.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.contains(origin)
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

#[cfg(test)]
#[path = "allowed_origins_test.rs"]
mod allowed_origins_test;
