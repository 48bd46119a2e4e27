use crate::constants::fetch_site;
use indexmap::IndexSet;
use std::fmt;
use std::str::FromStr;

/// Relationship between the initiating context and the target, as reported by
/// the browser in the `Sec-Fetch-Site` request header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FetchSite {
    CrossSite,
    SameOrigin,
    SameSite,
    None,
}

impl FetchSite {
    pub const ALL: [FetchSite; 4] = [
        FetchSite::CrossSite,
        FetchSite::SameOrigin,
        FetchSite::SameSite,
        FetchSite::None,
    ];

    /// Header value representation.
    pub fn as_str(self) -> &'static str {
        match self {
            FetchSite::CrossSite => fetch_site::CROSS_SITE,
            FetchSite::SameOrigin => fetch_site::SAME_ORIGIN,
            FetchSite::SameSite => fetch_site::SAME_SITE,
            FetchSite::None => fetch_site::NONE,
        }
    }
}

impl fmt::Display for FetchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four `Sec-Fetch-Site` tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized Sec-Fetch-Site value '{0}'")]
pub struct UnknownFetchSite(pub String);

impl FromStr for FetchSite {
    type Err = UnknownFetchSite;

    /// Matching is exact: header tokens are lowercase and no folding is applied.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            fetch_site::CROSS_SITE => Ok(FetchSite::CrossSite),
            fetch_site::SAME_ORIGIN => Ok(FetchSite::SameOrigin),
            fetch_site::SAME_SITE => Ok(FetchSite::SameSite),
            fetch_site::NONE => Ok(FetchSite::None),
            other => Err(UnknownFetchSite(other.to_string())),
        }
    }
}

/// Set of `Sec-Fetch-Site` relations the gate trusts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AllowedFetchSites(IndexSet<FetchSite>);

impl AllowedFetchSites {
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator<Item = FetchSite>,
    {
        Self(values.into_iter().collect())
    }

    /// Trust every relation, leaving only the origin allowlist in effect.
    pub fn all() -> Self {
        Self::list(FetchSite::ALL)
    }

    pub fn contains(&self, site: FetchSite) -> bool {
        self.0.contains(&site)
    }

    pub fn iter(&self) -> impl Iterator<Item = FetchSite> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AllowedFetchSites {
    fn default() -> Self {
        Self::list([FetchSite::SameOrigin])
    }
}

impl FromIterator<FetchSite> for AllowedFetchSites {
    fn from_iter<I: IntoIterator<Item = FetchSite>>(iter: I) -> Self {
        Self::list(iter)
    }
}

#[cfg(test)]
#[path = "fetch_site_test.rs"]
mod fetch_site_test;
