use serde::de::DeserializeOwned;
use serde_json::Value;

/// Envelope field holding the operation payload.
pub const RESULT_FIELD: &str = "result";

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("envelope is not ok: {description:?} (error_code {error_code:?})")]
    NotOk {
        error_code: Option<i64>,
        description: Option<String>,
    },

    #[error("envelope has no `{field}` field")]
    MissingField { field: &'static str },

    #[error("invalid `{field}` payload: {source}")]
    Json {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode the payload stored under `field` of a Bot API response envelope.
///
/// Succeeds only when `ok` is exactly `true` and `field` deserializes into `T`.
pub fn decode_envelope<T: DeserializeOwned>(
    mut envelope: Value,
    field: &'static str,
) -> Result<T, EnvelopeError> {
    if envelope.get("ok") != Some(&Value::Bool(true)) {
        return Err(EnvelopeError::NotOk {
            error_code: envelope.get("error_code").and_then(Value::as_i64),
            description: envelope
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_owned),
        });
    }

    let payload = envelope
        .get_mut(field)
        .map(Value::take)
        .ok_or(EnvelopeError::MissingField { field })?;

    serde_json::from_value(payload).map_err(|source| EnvelopeError::Json { field, source })
}
