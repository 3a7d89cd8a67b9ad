use axum::http::StatusCode;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub const INVALID_SHAPE_MESSAGE: &str =
    "Request must contain exactly one valid key: fibonacci, prime, lcm, hcf, or AI.";

const UPSTREAM_MESSAGE: &str = "Upstream text generation failed";
const INTERNAL_MESSAGE: &str = "Internal Server Error";

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", INVALID_SHAPE_MESSAGE)]
    InvalidRequestShape,

    #[error("{0}")]
    InvalidInputType(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NumericOverflow(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Upstream timed out after {0:?}")]
    UpstreamTimeout(Duration),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn invalid_type(msg: impl Into<String>) -> Self {
        Self::InvalidInputType(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::NumericOverflow(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Validation and numeric-range failures are the caller's fault; anything
    /// else is reported as a server fault.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestShape
            | Self::InvalidInputType(_)
            | Self::InvalidInput(_)
            | Self::NumericOverflow(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response envelope. Upstream and internal detail
    /// stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidRequestShape
            | Self::InvalidInputType(_)
            | Self::InvalidInput(_)
            | Self::NumericOverflow(_) => self.to_string(),
            Self::Upstream(_) | Self::UpstreamTimeout(_) | Self::OpenAi(_) | Self::Network(_) => {
                UPSTREAM_MESSAGE.to_string()
            }
            _ => INTERNAL_MESSAGE.to_string(),
        }
    }
}
