//! Request context carrying the verified caller identity.

use chrono::{DateTime, Utc};

/// Context for an authenticated request.
///
/// Built by the auth extractor and passed to every service method that
/// needs to know who is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The `sub` claim of the caller's identity token.
    pub caller: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(caller: impl Into<String>) -> Self {
        Self {
            caller: caller.into(),
            request_time: Utc::now(),
        }
    }
}
