use serde_json::{Map, Value};

const PREVIEW_CHARS: usize = 200;

/// Pulls a JSON object out of a model reply.
///
/// The whole trimmed reply is tried first. Valid JSON that is not an object
/// is rejected as is. Text that is not JSON falls back to the span from the
/// first `{` to the last `}`, which covers replies wrapped in prose or code
/// fences.
pub fn parse_json_object(raw: &str) -> Result<Map<String, Value>, ResponseParseError> {
    match serde_json::from_str::<Value>(raw.trim()) {
        Ok(Value::Object(object)) => return Ok(object),
        Ok(other) => {
            return Err(ResponseParseError::Malformed {
                reason: format!("expected a JSON object, found {}", json_kind(&other)),
                preview: preview(raw),
            });
        }
        Err(_) => {}
    }

    let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) else {
        return Err(ResponseParseError::NoJsonFound {
            preview: preview(raw),
        });
    };

    if end < start {
        return Err(ResponseParseError::NoJsonFound {
            preview: preview(raw),
        });
    }

    serde_json::from_str::<Map<String, Value>>(&raw[start..=end]).map_err(|e| {
        ResponseParseError::Malformed {
            reason: e.to_string(),
            preview: preview(raw),
        }
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn preview(raw: &str) -> String {
    raw.chars().take(PREVIEW_CHARS).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseParseError {
    #[error("model did not return JSON output as expected")]
    NoJsonFound { preview: String },
    #[error("failed to parse JSON from model output: {reason}")]
    Malformed { reason: String, preview: String },
}

impl ResponseParseError {
    pub fn preview(&self) -> &str {
        match self {
            Self::NoJsonFound { preview } | Self::Malformed { preview, .. } => preview,
        }
    }
}
