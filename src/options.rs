use crate::allowed_origins::AllowedOrigins;
use crate::checked_methods::CheckedMethods;
use crate::fetch_site::AllowedFetchSites;
use crate::util::is_http_token;
use thiserror::Error;

/// Caller-facing gate configuration. Every field left as `None` falls back to
/// its documented default when the gate is built:
///
/// * `checked_methods`: `POST`, `PUT`, `PATCH`, `DELETE`
/// * `allowed_origins`: empty, so every checked request is rejected
/// * `allowed_fetch_sites`: `same-origin`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct OriginGateOptions {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub checked_methods: Option<CheckedMethods>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub allowed_origins: Option<AllowedOrigins>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub allowed_fetch_sites: Option<AllowedFetchSites>,
}

/// Configuration errors detected when the gate is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("checked method '{0}' is not a valid HTTP method token")]
    InvalidCheckedMethod(String),
}

impl OriginGateOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(methods) = &self.checked_methods
            && let Some(invalid) = methods.iter().find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidCheckedMethod(invalid.to_string()));
        }

        Ok(())
    }

    /// Validate and fill every unset field with its default.
    pub fn resolve(self) -> Result<ResolvedOptions, ValidationError> {
        self.validate()?;

        Ok(ResolvedOptions {
            checked_methods: self.checked_methods.unwrap_or_default(),
            allowed_origins: self.allowed_origins.unwrap_or_default(),
            allowed_fetch_sites: self.allowed_fetch_sites.unwrap_or_default(),
        })
    }
}

/// Fully populated configuration. Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedOptions {
    checked_methods: CheckedMethods,
    allowed_origins: AllowedOrigins,
    allowed_fetch_sites: AllowedFetchSites,
}

impl ResolvedOptions {
    pub fn checked_methods(&self) -> &CheckedMethods {
        &self.checked_methods
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.allowed_origins
    }

    pub fn allowed_fetch_sites(&self) -> &AllowedFetchSites {
        &self.allowed_fetch_sites
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
