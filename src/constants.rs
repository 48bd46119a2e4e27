pub mod header {
    use http::HeaderName;

    /// `http` ships no constant for the fetch metadata headers.
    pub const SEC_FETCH_SITE: HeaderName = HeaderName::from_static("sec-fetch-site");
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod fetch_site {
    pub const CROSS_SITE: &str = "cross-site";
    pub const SAME_ORIGIN: &str = "same-origin";
    pub const SAME_SITE: &str = "same-site";
    pub const NONE: &str = "none";
}
