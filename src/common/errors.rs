use lambda_http::http::StatusCode;
use lambda_http::{Error as LambdaError, Response};
use tracing::error;

use crate::common::utils::{message_response, NOT_FOUND_ERROR};
use crate::store::StoreError;

/// Outcome of a failed invocation.
///
/// `HttpError` is a finished response (4xx) that `main` hands back to the
/// gateway as a success. `LambdaError` bubbles up to the runtime, which
/// reports the invocation as failed and the gateway answers 5xx.
#[derive(Debug)]
pub enum Error {
    HttpError(Response<String>),
    LambdaError(LambdaError),
}

impl Error {
    pub fn not_found() -> Self {
        Error::HttpError(message_response(StatusCode::NOT_FOUND, NOT_FOUND_ERROR))
    }

    pub fn bad_request(message: &str) -> Self {
        Error::HttpError(message_response(StatusCode::BAD_REQUEST, message))
    }

    /// Folds the error into what `service_fn` expects.
    pub fn into_lambda_result(self) -> Result<Response<String>, LambdaError> {
        match self {
            Error::HttpError(response) => Ok(response),
            Error::LambdaError(err) => Err(err),
        }
    }
}

impl From<StoreError> for Error {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound => Error::not_found(),
            other => {
                error!("Store failure: {}", other);
                Error::LambdaError(Box::new(other))
            }
        }
    }
}

impl From<lambda_http::http::Error> for Error {
    fn from(value: lambda_http::http::Error) -> Self {
        Error::LambdaError(Box::new(value))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::LambdaError(Box::new(value))
    }
}
