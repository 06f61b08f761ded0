//! Response envelope of the listings API: `{ success, data?, error? }`

use crate::car::CarRecord;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Shown when a failed load carries no message of its own
pub const GENERIC_LOAD_ERROR: &str = "Failed to load car";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server rejected request (status {status}): {}", .message.as_deref().unwrap_or(GENERIC_LOAD_ERROR))]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error("Parse error: {0}")]
    Parse(String),
}

impl LoadError {
    /// Text for the page: the server's own message when it sent one
    pub fn message(&self) -> String {
        match self {
            LoadError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_LOAD_ERROR.to_string(),
        }
    }
}

/// Wire shape, before it is checked
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// A checked envelope: either the payload or the server's failure message
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Failure { message: Option<String> },
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a body. A `success: true` envelope whose payload is missing or
    /// has the wrong shape is a parse error, not a failure response.
    pub fn from_body(body: &str) -> Result<Self, LoadError> {
        let raw: RawEnvelope =
            serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;

        if !raw.success {
            let message = match raw.error {
                Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
                _ => None,
            };
            return Ok(ApiResponse::Failure { message });
        }

        let data = raw
            .data
            .filter(|d| !d.is_null())
            .ok_or_else(|| LoadError::Parse("missing data in response".to_string()))?;
        let payload = serde_json::from_value(data).map_err(|e| LoadError::Parse(e.to_string()))?;
        Ok(ApiResponse::Success(payload))
    }
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn an HTTP status and body into a car record or a `LoadError`.
pub fn decode_car_response(status: u16, body: &str) -> Result<CarRecord, LoadError> {
    match ApiResponse::<CarRecord>::from_body(body) {
        Ok(ApiResponse::Success(record)) if is_success_status(status) => Ok(record),
        Ok(ApiResponse::Success(_)) => Err(LoadError::Rejected {
            status,
            message: None,
        }),
        Ok(ApiResponse::Failure { message }) => Err(LoadError::Rejected { status, message }),
        // An error page with a non-JSON body is still a rejection.
        Err(LoadError::Parse(_)) if !is_success_status(status) => Err(LoadError::Rejected {
            status,
            message: None,
        }),
        Err(e) => Err(e),
    }
}
