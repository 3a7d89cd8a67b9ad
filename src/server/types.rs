use crate::dispatch::OperationOutput;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub is_success: bool,
    pub official_email: String,
}

/// Envelope for `/bfhl`: `data` on success, `message` on failure.
#[derive(Debug, Serialize)]
pub struct BfhlResponse {
    pub is_success: bool,
    pub official_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<OperationOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BfhlResponse {
    pub fn success(official_email: impl Into<String>, data: OperationOutput) -> Self {
        Self {
            is_success: true,
            official_email: official_email.into(),
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(official_email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            official_email: official_email.into(),
            data: None,
            message: Some(message.into()),
        }
    }
}
