//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body whose rejection is [`ApiError::InvalidFormat`].
///
/// The body is decoded whatever the Content-Type header says, so clients
/// sending `curl -d` defaults are served. Only an unreadable body or JSON
/// that does not fit `T` is rejected.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "failed to read request body");
            ApiError::InvalidFormat
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "rejected request body");
            ApiError::InvalidFormat
        })?;
        Ok(Self(value))
    }
}
