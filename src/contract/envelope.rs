use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

pub const VALIDATION_STATUS: u16 = 422;
pub const VALIDATION_MESSAGE: &str = "Validation Error";
const DETAIL_KEYS: [&str; 3] = ["field", "message", "type"];

/// `{"error": {"code": 422, "message": "...", "details": [...]}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub code: Option<Value>,
    pub message: Option<Value>,
    pub details: Vec<DetailEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailEntry {
    pub field: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DetailEntry {
    pub fn keys(&self) -> BTreeSet<&str> {
        std::iter::once("field")
            .chain(self.extra.keys().map(String::as_str))
            .collect()
    }
}

impl ErrorEnvelope {
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    pub fn first_field(&self) -> Option<&str> {
        self.error.details.first().map(|d| d.field.as_str())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.error.details.iter().any(|d| d.field == name)
    }

    pub fn fields(&self) -> Vec<&str> {
        self.error.details.iter().map(|d| d.field.as_str()).collect()
    }

    /// Checks the full envelope: code, message, a non-empty detail list and
    /// the exact key set of the first detail entry.
    pub fn check_strict_shape(&self) -> Result<(), String> {
        match &self.error.code {
            Some(Value::Number(n)) if n.as_u64() == Some(u64::from(VALIDATION_STATUS)) => {}
            other => {
                return Err(format!(
                    "expected error.code {}, got {}",
                    VALIDATION_STATUS,
                    display_optional(other)
                ));
            }
        }

        match &self.error.message {
            Some(Value::String(s)) if s == VALIDATION_MESSAGE => {}
            other => {
                return Err(format!(
                    "expected error.message \"{}\", got {}",
                    VALIDATION_MESSAGE,
                    display_optional(other)
                ));
            }
        }

        let first = self
            .error
            .details
            .first()
            .ok_or_else(|| "error.details is empty".to_string())?;

        let expected: BTreeSet<&str> = DETAIL_KEYS.into_iter().collect();
        let actual = first.keys();
        if actual != expected {
            return Err(format!(
                "expected error.details[0] keys {:?}, got {:?}",
                expected, actual
            ));
        }

        Ok(())
    }
}

fn display_optional(value: &Option<Value>) -> String {
    value
        .as_ref()
        .map(Value::to_string)
        .unwrap_or_else(|| "nothing".to_string())
}
