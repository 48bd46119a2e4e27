use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    response::IntoResponse,
};
use bunner_origin_gate_rs::{
    AllowedFetchSites, AllowedOrigins, FetchSite, OriginGate, OriginGateLayer, OriginGateOptions,
    RejectionReason, ValidationError,
};

pub type RejectFn = fn(Request<Body>, RejectionReason) -> Response<Body>;

pub fn build_layer() -> Result<OriginGateLayer<RejectFn>, ValidationError> {
    let gate = OriginGate::new(OriginGateOptions {
        allowed_origins: Some(AllowedOrigins::list([
            "http://127.0.0.1:5002",
            "http://localhost:5002",
        ])),
        allowed_fetch_sites: Some(AllowedFetchSites::list([
            FetchSite::SameOrigin,
            FetchSite::SameSite,
        ])),
        ..OriginGateOptions::default()
    })?;

    Ok(OriginGateLayer::new(gate).on_reject(reject as RejectFn))
}

fn reject(request: Request<Body>, reason: RejectionReason) -> Response<Body> {
    tracing::warn!(method = %request.method(), uri = %request.uri(), %reason, "blocked request");
    (StatusCode::FORBIDDEN, format!("Request blocked: {reason}")).into_response()
}
