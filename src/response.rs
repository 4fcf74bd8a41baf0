//! Bridge reply parsing and lighting response types.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Error;
use crate::payload::LightState;

type Result<T> = std::result::Result<T, Error>;

/// The object a state update was addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Light(String),
    Group(String),
}

/// A response from a state-update command.
///
/// Pass this to [`Light::process_reply`](crate::Light::process_reply) or
/// [`Group::process_reply`](crate::Group::process_reply) to update a cached
/// state after sending commands to the bridge.
#[derive(Debug, Clone)]
pub struct LightingResponse {
    pub(crate) target: Target,
    pub(crate) state: LightState,
    pub(crate) success: Vec<Value>,
}

impl LightingResponse {
    /// Create a response for a light state update.
    pub fn light(id: &str, state: LightState) -> Self {
        LightingResponse {
            target: Target::Light(id.to_string()),
            state,
            success: Vec::new(),
        }
    }

    /// Create a response for a group action.
    pub fn group(id: &str, state: LightState) -> Self {
        LightingResponse {
            target: Target::Group(id.to_string()),
            state,
            success: Vec::new(),
        }
    }

    pub(crate) fn with_success(mut self, success: Vec<Value>) -> Self {
        self.success = success;
        self
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn state(&self) -> &LightState {
        &self.state
    }

    /// The `success` entries the bridge returned, one per attribute written.
    pub fn success(&self) -> &[Value] {
        &self.success
    }
}

/// One entry of a bridge write reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ReplyItem {
    Success(Value),
    Error(ApiError),
}

/// An error entry as reported by the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ApiError {
    #[serde(rename = "type")]
    pub kind: u16,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Bridge {
            kind: err.kind,
            address: err.address,
            description: err.description,
        }
    }
}

/// Parses a write reply (`[{"success": ..}, {"error": ..}]`).
///
/// Returns the success payloads, or the first error entry.
pub(crate) fn parse_write_reply(reply: Value) -> Result<Vec<Value>> {
    let items: Vec<ReplyItem> = serde_json::from_value(reply).map_err(Error::JsonLoad)?;

    let mut success = Vec::with_capacity(items.len());
    for item in items {
        match item {
            ReplyItem::Success(value) => success.push(value),
            ReplyItem::Error(err) => {
                warn!(
                    "bridge rejected write at {}: {}",
                    err.address, err.description
                );
                return Err(err.into());
            }
        }
    }
    Ok(success)
}

/// Fails if a read reply is an error array instead of the requested object.
pub(crate) fn check_read_reply(reply: Value) -> Result<Value> {
    let first_error = reply
        .as_array()
        .and_then(|items| items.first())
        .and_then(|item| item.get("error"));

    if let Some(err) = first_error {
        let err: ApiError = serde_json::from_value(err.clone()).map_err(Error::JsonLoad)?;
        warn!("bridge rejected read at {}: {}", err.address, err.description);
        return Err(err.into());
    }
    Ok(reply)
}

/// Extracts the new object id from a create reply (`[{"success":{"id":"3"}}]`).
pub(crate) fn created_id(success: &[Value]) -> Result<String> {
    success
        .iter()
        .find_map(|entry| entry.get("id"))
        .and_then(|id| match id {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .ok_or_else(|| Error::UnexpectedResponse("create reply without id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_reply_success() {
        let success = parse_write_reply(json!([
            {"success": {"/lights/1/state/on": true}},
            {"success": {"/lights/1/state/xy": [0.3, 0.3]}}
        ]))
        .unwrap();
        assert_eq!(success.len(), 2);
    }

    #[test]
    fn test_write_reply_error() {
        let err = parse_write_reply(json!([
            {"success": {"/lights/1/state/on": true}},
            {"error": {"type": 201, "address": "/lights/1/state/bri",
                       "description": "parameter, bri, is not modifiable. Device is set to off."}}
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Bridge { kind: 201, .. }));
    }

    #[test]
    fn test_write_reply_wrong_shape() {
        assert!(matches!(
            parse_write_reply(json!({"on": true})),
            Err(Error::JsonLoad(_))
        ));
    }

    #[test]
    fn test_read_reply_error() {
        let err = check_read_reply(json!([
            {"error": {"type": 1, "address": "/", "description": "unauthorized user"}}
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            Error::Bridge {
                kind: 1,
                address: "/".to_string(),
                description: "unauthorized user".to_string()
            }
        );
    }

    #[test]
    fn test_read_reply_passes_objects() {
        let reply = json!({"1": {"name": "Hall"}});
        assert_eq!(check_read_reply(reply.clone()).unwrap(), reply);
        assert_eq!(check_read_reply(json!([])).unwrap(), json!([]));
    }

    #[test]
    fn test_created_id() {
        assert_eq!(created_id(&[json!({"id": "7"})]).unwrap(), "7");
        assert_eq!(created_id(&[json!({"id": 12})]).unwrap(), "12");
        assert!(created_id(&[json!({"other": 1})]).is_err());
    }
}
