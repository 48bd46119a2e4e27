/// Borrowed view of the request data the gate inspects.
///
/// `origin` and `sec_fetch_site` are `None` when the header is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub sec_fetch_site: Option<&'a str>,
}
