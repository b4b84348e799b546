//! Action payloads and the result record carried by responses.

use serde_json::{json, Value};

/// Outcome of an asynchronous operation, as reported by the server.
///
/// A `code` of zero is success and carries the response data. Any other
/// code is a failure; only negative codes are surfaced to the user. A
/// failure may still carry `data` (validation details and the like).
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ok {
        data: Value,
    },
    Err {
        code: i64,
        message: String,
        data: Option<Value>,
    },
}

impl Outcome {
    pub fn ok(data: Value) -> Self {
        Outcome::Ok { data }
    }

    pub fn err(code: i64, message: impl Into<String>) -> Self {
        Outcome::Err {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Outcome::Ok { .. } => 0,
            Outcome::Err { code, .. } => *code,
        }
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            Outcome::Ok { data } => Some(data),
            Outcome::Err { .. } => None,
        }
    }

    /// Message that should reach the user, if any.
    ///
    /// Only application errors (negative code) with a non-empty message
    /// qualify.
    pub fn user_error(&self) -> Option<&str> {
        match self {
            Outcome::Err { code, message, .. } if *code < 0 && !message.is_empty() => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

/// Payload attached to an action.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    Empty,
    /// Arbitrary data that is not result-shaped (request parameters, ...).
    Data(Value),
    /// A result record `{ code, message, data }`.
    Result(Outcome),
}

impl Payload {
    /// Classifies a loosely-typed JSON payload.
    ///
    /// Objects with a numeric `code` become [`Payload::Result`]; `null`
    /// becomes [`Payload::Empty`]; anything else is kept as data.
    pub fn from_wire(value: Value) -> Self {
        let code = match &value {
            Value::Null => return Payload::Empty,
            Value::Object(fields) => fields.get("code").and_then(wire_code),
            _ => None,
        };

        let Some(code) = code else {
            return Payload::Data(value);
        };

        if code == 0 {
            let data = value.get("data").cloned().unwrap_or(Value::Null);
            Payload::Result(Outcome::Ok { data })
        } else {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let data = value.get("data").filter(|data| !data.is_null()).cloned();
            Payload::Result(Outcome::Err {
                code,
                message,
                data,
            })
        }
    }

    pub fn to_wire(&self) -> Value {
        match self {
            Payload::Empty => Value::Null,
            Payload::Data(value) => value.clone(),
            Payload::Result(Outcome::Ok { data }) => json!({ "code": 0, "data": data }),
            Payload::Result(Outcome::Err {
                code,
                message,
                data: None,
            }) => json!({ "code": code, "message": message }),
            Payload::Result(Outcome::Err {
                code,
                message,
                data: Some(data),
            }) => json!({ "code": code, "message": message, "data": data }),
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Payload::Result(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Reads a result code from any JSON number.
///
/// Fractional codes are rounded away from zero so their sign (error,
/// success, other) is kept.
fn wire_code(code: &Value) -> Option<i64> {
    if let Some(code) = code.as_i64() {
        return Some(code);
    }
    let code = code.as_f64().filter(|c| c.is_finite())?;
    let rounded = if code < 0.0 { code.floor() } else { code.ceil() };
    Some(rounded as i64)
}

impl From<Outcome> for Payload {
    fn from(outcome: Outcome) -> Self {
        Payload::Result(outcome)
    }
}
