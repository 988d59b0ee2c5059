/// HTTP middleware
///
/// The order is part of the contract: panic recovery wraps everything, the
/// access log sees every request that reaches the stack, and security
/// headers are applied to every response produced beneath them.
pub mod access_log;
pub mod recover;
pub mod security_headers;

use axum::Router;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer};

pub use access_log::access_log;
pub use recover::panic_response;
pub use security_headers::{security_headers, SECURITY_HEADERS};

/// Wrap a router in the middleware chain, outermost first
pub fn layered(router: Router, request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(axum::middleware::from_fn(access_log))
            .layer(axum::middleware::from_fn(security_headers))
            .layer(TimeoutLayer::new(request_timeout)),
    )
}
