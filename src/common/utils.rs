use lambda_http::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use lambda_http::http::{response::Builder, StatusCode};
use lambda_http::{Request, RequestExt, RequestPayloadExt, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::errors::Error;

pub const EMPTY_PAYLOAD_ERROR: &str = "Request payload is empty";
pub const NOT_FOUND_ERROR: &str = "Not found";

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type,Authorization";
pub const CORS_ALLOW_METHODS: &str = "GET,POST,DELETE,OPTIONS";

const APPLICATION_JSON: &str = "application/json";

pub fn cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(CORS_ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(CORS_ALLOW_METHODS),
    );
}

fn with_cors(mut builder: Builder) -> Builder {
    if let Some(headers) = builder.headers_mut() {
        cors_headers(headers);
    }
    builder
}

pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response<String>, Error> {
    let response = with_cors(Response::builder())
        .status(status)
        .header(CONTENT_TYPE, APPLICATION_JSON)
        .body(serde_json::to_string(value)?)?;

    Ok(response)
}

pub fn empty_response(status: StatusCode) -> Result<Response<String>, Error> {
    let response = with_cors(Response::builder())
        .status(status)
        .body(Default::default())?;

    Ok(response)
}

/// `{"message": ...}` body. Infallible so error conversions can use it.
pub fn message_response(status: StatusCode, message: &str) -> Response<String> {
    let body = serde_json::json!({ "message": message }).to_string();
    let mut response = Response::new(body);
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    cors_headers(headers);

    response
}

pub fn extract_request<T: DeserializeOwned>(request: &Request) -> Result<T, Error> {
    match request.payload::<T>() {
        Ok(Some(val)) => Ok(val),
        // no recognised content type: the body is still read as JSON
        Ok(None) if !request.body().is_empty() => serde_json::from_slice(request.body())
            .map_err(|err| Error::bad_request(&err.to_string())),
        Ok(None) => Err(Error::bad_request(EMPTY_PAYLOAD_ERROR)),
        Err(err) => Err(Error::bad_request(&err.to_string())),
    }
}

/// The `{id}` path parameter as set by the gateway.
pub fn path_id(request: &Request) -> Option<String> {
    request
        .path_parameters()
        .first("id")
        .map(ToOwned::to_owned)
}
