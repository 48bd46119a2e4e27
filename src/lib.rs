//! Origin / `Sec-Fetch-Site` request gate for CSRF protection.
//!
//! [`OriginGate`] decides whether a state-changing request carries trusted origin
//! provenance. [`OriginGateLayer`] plugs that decision into any `tower` stack.

mod allowed_origins;
mod checked_methods;
pub mod constants;
mod context;
mod extract;
mod fetch_site;
mod gate;
mod middleware;
mod options;
mod result;
mod util;

pub use allowed_origins::AllowedOrigins;
pub use checked_methods::CheckedMethods;
pub use context::RequestContext;
pub use fetch_site::{AllowedFetchSites, FetchSite, UnknownFetchSite};
pub use gate::OriginGate;
pub use middleware::{BadRequest, OriginGateLayer, OriginGateService, RejectHandler};
pub use options::{OriginGateOptions, ResolvedOptions, ValidationError};
pub use result::{GateDecision, RejectionReason};
