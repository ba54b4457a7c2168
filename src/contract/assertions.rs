use super::envelope::{ErrorEnvelope, VALIDATION_STATUS};
use crate::api::ProbeResponse;
use serde_json::Value;
use std::fmt;

/// Which detail entry must carry the expected field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldExpectation {
    /// `error.details[0].field` must match.
    First(String),
    /// Some entry in `error.details` must match.
    Any(String),
}

impl FieldExpectation {
    pub fn first(name: impl Into<String>) -> Self {
        Self::First(name.into())
    }

    pub fn any(name: impl Into<String>) -> Self {
        Self::Any(name.into())
    }

    pub fn check(&self, envelope: &ErrorEnvelope) -> Result<(), String> {
        match self {
            Self::First(name) => match envelope.first_field() {
                Some(field) if field == name => Ok(()),
                Some(field) => Err(format!(
                    "expected error.details[0].field \"{}\", got \"{}\"",
                    name, field
                )),
                None => Err(format!(
                    "expected error.details[0].field \"{}\", but error.details is empty",
                    name
                )),
            },
            Self::Any(name) => {
                if envelope.has_field(name) {
                    Ok(())
                } else {
                    Err(format!(
                        "no entry in error.details has field \"{}\" (fields: {:?})",
                        name,
                        envelope.fields()
                    ))
                }
            }
        }
    }
}

impl fmt::Display for FieldExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First(name) => write!(f, "details[0].field == \"{}\"", name),
            Self::Any(name) => write!(f, "some details[].field == \"{}\"", name),
        }
    }
}

/// Checks a validation response: JSON body, status 422, the field
/// expectation and, when `strict`, the full envelope shape.
pub fn check_validation_response(
    response: &ProbeResponse,
    expectation: &FieldExpectation,
    strict: bool,
) -> Result<ErrorEnvelope, String> {
    let parsed: Option<Value> = serde_json::from_str(&response.body).ok();

    if response.status != VALIDATION_STATUS {
        return Err(format!(
            "expected status {}, got {}",
            VALIDATION_STATUS, response.status
        ));
    }

    let value = parsed.ok_or_else(|| "response body is not JSON".to_string())?;
    let envelope = ErrorEnvelope::from_value(value)
        .map_err(|e| format!("response is not a validation error envelope: {}", e))?;

    expectation.check(&envelope)?;

    if strict {
        envelope.check_strict_shape()?;
    }

    Ok(envelope)
}
