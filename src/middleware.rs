//! `tower` integration: wraps a downstream service so that rejected requests
//! never reach it.
//!
//! ```ignore
//! let gate = OriginGate::new(OriginGateOptions {
//!     allowed_origins: Some(AllowedOrigins::list(["https://app.example.com"])),
//!     ..OriginGateOptions::default()
//! })?;
//!
//! let app = Router::new()
//!     .route("/transfer", post(transfer))
//!     .layer(OriginGateLayer::new(gate));
//! ```

use crate::gate::OriginGate;
use crate::result::{GateDecision, RejectionReason};
use http::{Request, Response, StatusCode};
use std::future::{Future, ready};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Produces the response for a rejected request.
///
/// Implemented by [`BadRequest`] and by any
/// `Fn(Request<ReqBody>, RejectionReason) -> Response<ResBody>`.
pub trait RejectHandler<ReqBody, ResBody> {
    fn reject(&self, request: Request<ReqBody>, reason: RejectionReason) -> Response<ResBody>;
}

/// Default reject handler: `400 Bad Request` with an empty body.
#[derive(Clone, Copy, Debug, Default)]
pub struct BadRequest;

impl<ReqBody, ResBody> RejectHandler<ReqBody, ResBody> for BadRequest
where
    ResBody: Default,
{
    fn reject(&self, _request: Request<ReqBody>, _reason: RejectionReason) -> Response<ResBody> {
        let mut response = Response::new(ResBody::default());
        *response.status_mut() = StatusCode::BAD_REQUEST;
        response
    }
}

impl<F, ReqBody, ResBody> RejectHandler<ReqBody, ResBody> for F
where
    F: Fn(Request<ReqBody>, RejectionReason) -> Response<ResBody>,
{
    fn reject(&self, request: Request<ReqBody>, reason: RejectionReason) -> Response<ResBody> {
        self(request, reason)
    }
}

/// [`Layer`] applying an [`OriginGate`] to every service it wraps.
#[derive(Clone)]
pub struct OriginGateLayer<R = BadRequest> {
    gate: Arc<OriginGate>,
    reject: R,
}

impl OriginGateLayer {
    pub fn new(gate: OriginGate) -> Self {
        Self::from_shared(Arc::new(gate))
    }

    pub fn from_shared(gate: Arc<OriginGate>) -> Self {
        Self {
            gate,
            reject: BadRequest,
        }
    }
}

impl<R> OriginGateLayer<R> {
    /// Replace the reject handler.
    pub fn on_reject<H>(self, handler: H) -> OriginGateLayer<H> {
        OriginGateLayer {
            gate: self.gate,
            reject: handler,
        }
    }

    pub fn gate(&self) -> &OriginGate {
        &self.gate
    }
}

impl<S, R> Layer<S> for OriginGateLayer<R>
where
    R: Clone,
{
    type Service = OriginGateService<S, R>;

    fn layer(&self, inner: S) -> Self::Service {
        OriginGateService {
            inner,
            gate: Arc::clone(&self.gate),
            reject: self.reject.clone(),
        }
    }
}

/// Service produced by [`OriginGateLayer`]. Allowed and unchecked requests go to
/// `inner` unmodified; rejected ones go to the reject handler.
#[derive(Clone)]
pub struct OriginGateService<S, R = BadRequest> {
    inner: S,
    gate: Arc<OriginGate>,
    reject: R,
}

impl<S> OriginGateService<S> {
    pub fn new(gate: Arc<OriginGate>, inner: S) -> Self {
        Self {
            inner,
            gate,
            reject: BadRequest,
        }
    }
}

impl<S, R> OriginGateService<S, R> {
    pub fn gate(&self) -> &OriginGate {
        &self.gate
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, R, ReqBody, ResBody> Service<Request<ReqBody>> for OriginGateService<S, R>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    R: RejectHandler<ReqBody, ResBody>,
    ResBody: Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        match self.gate.evaluate_request(&request) {
            GateDecision::Rejected(reason) => {
                let response = self.reject.reject(request, reason);
                Box::pin(ready(Ok(response)))
            }
            GateDecision::Unchecked | GateDecision::Allowed => Box::pin(self.inner.call(request)),
        }
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
