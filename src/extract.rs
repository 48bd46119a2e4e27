use crate::constants::header::SEC_FETCH_SITE;
use crate::context::RequestContext;
use http::header::ORIGIN;
use http::{HeaderMap, HeaderValue, Method, Request};
use std::borrow::Cow;

/// Pulls the method, `Origin` and `Sec-Fetch-Site` out of an `http` request.
///
/// Header bytes that are not UTF-8 are rendered lossily rather than dropped, so
/// a garbled header still counts as present. The rendering is only for display:
/// an origin that needed it is flagged and must never satisfy the allowlist.
pub(crate) struct ExtractedRequest<'a> {
    method: &'a str,
    origin: Option<Cow<'a, str>>,
    origin_is_lossy: bool,
    sec_fetch_site: Option<Cow<'a, str>>,
}

impl<'a> ExtractedRequest<'a> {
    pub(crate) fn new<B>(request: &'a Request<B>) -> Self {
        Self::from_parts(request.method(), request.headers())
    }

    pub(crate) fn from_parts(method: &'a Method, headers: &'a HeaderMap) -> Self {
        let origin = headers.get(ORIGIN);
        Self {
            method: method.as_str(),
            origin_is_lossy: origin
                .is_some_and(|value| std::str::from_utf8(value.as_bytes()).is_err()),
            origin: origin.map(Self::header_text),
            sec_fetch_site: headers.get(SEC_FETCH_SITE).map(Self::header_text),
        }
    }

    fn header_text(value: &'a HeaderValue) -> Cow<'a, str> {
        String::from_utf8_lossy(value.as_bytes())
    }

    /// `true` when the `Origin` bytes were not valid UTF-8 and the context text
    /// carries replacement characters.
    pub(crate) fn origin_is_lossy(&self) -> bool {
        self.origin_is_lossy
    }

    pub(crate) fn as_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: self.method,
            origin: self.origin.as_deref(),
            sec_fetch_site: self.sec_fetch_site.as_deref(),
        }
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
