//! Form submission against the server's JSON envelope API.
//!
//! The full lifecycle, in order: reject while a submit is pending,
//! validate, flip the submit control to its busy state, serialize and
//! send, decode the envelope, surface application failure, and restore
//! the busy state on every exit path. Callers decide what to do with the
//! returned envelope (close the modal, toast, refresh a panel).

use serde_json::Value;
use thiserror::Error;

use crate::api::{ApiClient, ApiError, Envelope};

use super::descriptor::FormState;
use super::validate::validate;

/// HTTP methods a form may submit with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMethod {
    Post,
    Put,
    Patch,
}

impl SubmitMethod {
    /// Parse a configured method name, case-insensitively. Anything
    /// outside the supported set is a hard error rather than a silent
    /// fallback.
    pub fn parse(raw: &str) -> Result<Self, SubmitError> {
        match raw.to_ascii_uppercase().as_str() {
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            _ => Err(SubmitError::UnsupportedMethod(raw.to_string())),
        }
    }
}

/// Where and how a form submits: an API path plus a method.
#[derive(Debug, Clone)]
pub struct SubmitSpec {
    pub method: SubmitMethod,
    pub path: String,
}

impl SubmitSpec {
    pub fn post(path: &str) -> Self {
        Self {
            method: SubmitMethod::Post,
            path: path.to_string(),
        }
    }

    pub fn put(path: &str) -> Self {
        Self {
            method: SubmitMethod::Put,
            path: path.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// A previous submit on this form has not finished yet.
    #[error("a submit is already in progress")]
    InFlight,
    /// Validation failed; one message per failing field, in field order.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    /// The request never produced a decodable envelope.
    #[error(transparent)]
    Transport(#[from] ApiError),
    /// The server answered with `success: false`.
    #[error("{0}")]
    Server(String),
    #[error("unsupported submit method: {0}")]
    UnsupportedMethod(String),
}

/// Run the submit lifecycle for `form` against `spec`.
///
/// The busy state is restored before this returns, no matter which way
/// it returns. Validation errors never reach the network.
pub async fn submit(
    form: &mut FormState,
    client: &ApiClient,
    spec: &SubmitSpec,
) -> Result<Envelope, SubmitError> {
    if form.in_flight() {
        return Err(SubmitError::InFlight);
    }

    let result = validate(form);
    if !result.valid {
        tracing::debug!(errors = result.errors.len(), "form validation failed");
        return Err(SubmitError::Validation(result.errors));
    }

    form.begin_submit();

    let body = Value::Object(form.serialize());
    tracing::debug!(path = %spec.path, method = ?spec.method, "submitting form");

    let outcome = match spec.method {
        SubmitMethod::Post => client.post(&spec.path, Some(&body)).await,
        SubmitMethod::Put => client.put(&spec.path, Some(&body)).await,
        SubmitMethod::Patch => client.patch(&spec.path, Some(&body)).await,
    };

    form.end_submit();

    let envelope = outcome?;
    if !envelope.success {
        return Err(SubmitError::Server(
            envelope.error_or("request failed").to_string(),
        ));
    }
    Ok(envelope)
}
