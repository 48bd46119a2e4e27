use crate::fetch_site::FetchSite;
use std::fmt;

/// Why a checked request was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// No `Origin` header (or an empty one) and the empty origin is not allowed.
    MissingOrigin,
    OriginNotAllowed { origin: String },
    FetchSiteNotAllowed { site: FetchSite },
    /// `Sec-Fetch-Site` carried a value outside the four known relations.
    UnrecognizedFetchSite { value: String },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::MissingOrigin => write!(f, "origin header missing"),
            RejectionReason::OriginNotAllowed { origin } => {
                write!(f, "origin '{origin}' not allowed")
            }
            RejectionReason::FetchSiteNotAllowed { site } => {
                write!(f, "fetch site '{site}' not allowed")
            }
            RejectionReason::UnrecognizedFetchSite { value } => {
                write!(f, "fetch site '{value}' not recognized")
            }
        }
    }
}

/// Outcome of evaluating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The method is not checked; the request passes untouched.
    Unchecked,
    Allowed,
    Rejected(RejectionReason),
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        !self.is_rejected()
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, GateDecision::Rejected(_))
    }

    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            GateDecision::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
