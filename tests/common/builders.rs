use bunner_origin_gate_rs::constants::method;
use bunner_origin_gate_rs::{
    AllowedFetchSites, AllowedOrigins, CheckedMethods, FetchSite, GateDecision, OriginGate,
    OriginGateOptions, RequestContext,
};
use http::Request;

#[derive(Default)]
pub struct GateBuilder {
    checked_methods: Option<CheckedMethods>,
    allowed_origins: Option<AllowedOrigins>,
    allowed_fetch_sites: Option<AllowedFetchSites>,
}

impl GateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.checked_methods = Some(CheckedMethods::list(methods));
        self
    }

    pub fn allowed_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = Some(AllowedOrigins::list(origins));
        self
    }

    pub fn allowed_fetch_sites<I>(mut self, sites: I) -> Self
    where
        I: IntoIterator<Item = FetchSite>,
    {
        self.allowed_fetch_sites = Some(AllowedFetchSites::list(sites));
        self
    }

    pub fn options(self) -> OriginGateOptions {
        OriginGateOptions {
            checked_methods: self.checked_methods,
            allowed_origins: self.allowed_origins,
            allowed_fetch_sites: self.allowed_fetch_sites,
        }
    }

    pub fn build(self) -> OriginGate {
        OriginGate::new(self.options()).expect("valid origin gate configuration")
    }
}

#[derive(Clone)]
pub struct GateRequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
    sec_fetch_site: Option<String>,
}

impl GateRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::POST.into(),
            path: "/test".into(),
            origin: None,
            sec_fetch_site: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn sec_fetch_site(mut self, value: impl Into<String>) -> Self {
        self.sec_fetch_site = Some(value.into());
        self
    }

    pub fn evaluate(&self, gate: &OriginGate) -> GateDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            sec_fetch_site: self.sec_fetch_site.as_deref(),
        };
        gate.evaluate(&ctx)
    }

    pub fn into_http<B: Default>(self) -> Request<B> {
        let mut builder = Request::builder()
            .method(self.method.as_str())
            .uri(self.path.as_str());
        if let Some(origin) = &self.origin {
            builder = builder.header("Origin", origin.as_str());
        }
        if let Some(site) = &self.sec_fetch_site {
            builder = builder.header("Sec-Fetch-Site", site.as_str());
        }
        builder
            .body(B::default())
            .expect("valid test request")
    }
}

pub fn gate() -> GateBuilder {
    GateBuilder::new()
}

pub fn request() -> GateRequestBuilder {
    GateRequestBuilder::new()
}

pub fn post() -> GateRequestBuilder {
    GateRequestBuilder::new().method(method::POST)
}
