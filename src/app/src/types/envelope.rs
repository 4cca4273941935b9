use serde::Deserialize;

/// Success envelope of the remote API: `{ "data": ... }`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Failure envelope of the remote API: `{ "success": false, "error": { "message": ... } }`
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: String,
}
