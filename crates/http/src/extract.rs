//! Body extractors that treat every request body as JSON regardless of
//! `Content-Type`.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// JSON body that must parse; anything else is a 400.
#[derive(Debug, Clone)]
pub struct JsonPayload<T>(pub T);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::bad_request(INVALID_PAYLOAD))?;

        serde_json::from_slice(&bytes)
            .map(JsonPayload)
            .map_err(|err| {
                tracing::debug!(error = %err, "rejecting request body");
                AppError::bad_request(INVALID_PAYLOAD)
            })
    }
}

/// JSON body that falls back to `T::default()` when absent or unparseable.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match Bytes::from_request(req, state).await {
            Ok(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "ignoring unparseable request body");
                T::default()
            }),
            _ => T::default(),
        };

        Ok(LenientJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Probe {
        #[serde(default)]
        name: Option<String>,
    }

    fn request(body: &'static str) -> Request {
        axum::http::Request::builder().body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn payload_parses_without_content_type() {
        let JsonPayload(probe) = JsonPayload::<Probe>::from_request(request(r#"{"name":"x"}"#), &())
            .await
            .unwrap();
        assert_eq!(probe.name.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn payload_rejects_malformed_json() {
        let err = JsonPayload::<Probe>::from_request(request("{nope"), &())
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn lenient_falls_back_to_default() {
        for body in ["", "{nope", "[1,2]"] {
            let LenientJson(probe) = LenientJson::<Probe>::from_request(request(body), &())
                .await
                .unwrap();
            assert_eq!(probe, Probe::default());
        }
    }
}
