use crate::context::RequestContext;
use crate::extract::ExtractedRequest;
use crate::fetch_site::FetchSite;
use crate::options::{OriginGateOptions, ResolvedOptions, ValidationError};
use crate::result::{GateDecision, RejectionReason};
use http::Request;

/// Origin / `Sec-Fetch-Site` decision engine.
///
/// Holds only the resolved, read-only configuration, so one instance can be
/// shared across threads and evaluated concurrently.
#[derive(Debug, Clone)]
pub struct OriginGate {
    options: ResolvedOptions,
}

impl OriginGate {
    pub fn new(options: OriginGateOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            options: options.resolve()?,
        })
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> GateDecision {
        self.decide(request, false)
    }

    /// Evaluates an `http` request.
    ///
    /// An `Origin` whose bytes are not UTF-8 is rejected outright; its lossy
    /// rendering only appears in the rejection reason.
    pub fn evaluate_request<B>(&self, request: &Request<B>) -> GateDecision {
        let extracted = ExtractedRequest::new(request);
        self.decide(&extracted.as_context(), extracted.origin_is_lossy())
    }

    fn decide(&self, request: &RequestContext<'_>, origin_is_lossy: bool) -> GateDecision {
        if !self.options.checked_methods().contains(request.method) {
            tracing::trace!(method = request.method, "method not checked by origin gate");
            return GateDecision::Unchecked;
        }

        let decision = match self.check_origin(request.origin, origin_is_lossy) {
            Err(reason) => GateDecision::Rejected(reason),
            Ok(()) => match self.check_fetch_site(request.sec_fetch_site) {
                Err(reason) => GateDecision::Rejected(reason),
                Ok(()) => GateDecision::Allowed,
            },
        };

        if let GateDecision::Rejected(reason) = &decision {
            tracing::debug!(
                method = request.method,
                reason = %reason,
                "origin gate rejected request"
            );
        }

        decision
    }

    fn check_origin(&self, origin: Option<&str>, lossy: bool) -> Result<(), RejectionReason> {
        let origin = origin.unwrap_or_default();
        if !lossy && self.options.allowed_origins().contains(origin) {
            return Ok(());
        }

        if origin.is_empty() {
            Err(RejectionReason::MissingOrigin)
        } else {
            Err(RejectionReason::OriginNotAllowed {
                origin: origin.to_string(),
            })
        }
    }

    fn check_fetch_site(&self, sec_fetch_site: Option<&str>) -> Result<(), RejectionReason> {
        let Some(value) = sec_fetch_site.filter(|value| !value.is_empty()) else {
            return Ok(());
        };

        match value.parse::<FetchSite>() {
            Ok(site) if self.options.allowed_fetch_sites().contains(site) => Ok(()),
            Ok(site) => Err(RejectionReason::FetchSiteNotAllowed { site }),
            Err(_) => Err(RejectionReason::UnrecognizedFetchSite {
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;
