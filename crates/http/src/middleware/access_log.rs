use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Emits one `shelf::access` line per request once the response is ready.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    tracing::info!(
        target: "shelf::access",
        remote = %remote,
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        request_id = %request_id,
        elapsed = ?started.elapsed(),
        "{} {} {}",
        remote,
        method,
        uri
    );

    response
}
