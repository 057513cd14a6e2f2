use std::string::FromUtf8Error;
use thiserror::Error;

/// Failure while turning a product list into a link payload.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("failed to serialize products: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure while reading a link payload back into a product list.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("base64 payload is not text: {0}")]
    Text(#[source] FromUtf8Error),
    #[error("malformed percent-encoding at byte {0}")]
    MalformedEscape(usize),
    #[error("percent-decoded payload is not valid UTF-8: {0}")]
    PercentUtf8(#[source] FromUtf8Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload is not a JSON array")]
    NotAnArray,
}

/// Failure while talking to the hosted collection service.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid base url: {0}")]
    BaseUrl(String),
}

/// Failure of an operation against the hosted store, as seen by migrations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("collection not found: {0}")]
    CollectionNotFound(String),
    #[error("record {id} not found in {collection}")]
    RecordNotFound { collection: String, id: String },
    #[error("field {field} is required in {collection}")]
    MissingField { collection: String, field: String },
    #[error("field {field} in {collection} holds a value of the wrong kind")]
    InvalidField { collection: String, field: String },
}

/// The current page address could not be understood.
#[derive(Error, Debug)]
pub enum AddressError {
    #[error("invalid address: {0}")]
    Url(#[from] url::ParseError),
}
