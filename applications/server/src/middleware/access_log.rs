/// Access logging
use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

/// Log remote address, protocol, method and URI before the request is handled
pub async fn access_log(request: Request, next: Next) -> Response {
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "-".to_string(), |ConnectInfo(addr)| addr.to_string());
    let uri = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().to_string(), |pq| pq.as_str().to_string());

    tracing::info!(
        remote_addr = %remote_addr,
        protocol = ?request.version(),
        method = %request.method(),
        uri = %uri,
        "request"
    );

    next.run(request).await
}
