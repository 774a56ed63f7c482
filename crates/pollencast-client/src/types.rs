//! Response envelope shared by every endpoint of the backend API.

use serde::Deserialize;

use crate::error::ClientError;

/// Message used when the API reports failure without saying why.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to fetch weather data";

/// `{ "success": bool, "data": T?, "error": string?, "message": string? }`
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the payload of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when `success` is false or `data` is
    /// missing, carrying the API's `error` message when one was sent.
    pub fn into_data(self) -> Result<T, ClientError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ClientError::Api(
                self.error
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            )),
        }
    }
}
