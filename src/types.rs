use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The greeting returned in every response body.
pub const MESSAGE: &str = "Hello from JSON API Lambda!";

pub const CONTENT_TYPE: &str = "application/json";

/// An HTTP API (payload format 2.0) invocation event.
/// Kept as raw JSON because only two fields are read and neither is required,
/// so any payload shape is accepted.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct InvocationEvent(pub Value);

impl InvocationEvent {
    /// `rawPath` as sent by the platform, if present.
    pub fn raw_path(&self) -> Option<&Value> {
        self.0.get("rawPath")
    }

    /// `requestContext.http.method`. Absent if any link of the chain is missing or is not an object.
    pub fn method(&self) -> Option<&Value> {
        self.0.pointer("/requestContext/http/method")
    }
}

impl From<Value> for InvocationEvent {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// What the platform turns into the HTTP response.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    /// JSON-encoded [ResponseBody]
    pub body: String,
}

/// Contents of [InvocationResponse::body] before encoding.
/// Members missing from the event are left out of the output rather than written as `null`.
#[derive(Serialize, Debug)]
pub struct ResponseBody<'a> {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<&'a Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_both_fields_from_http_event() {
        let event = InvocationEvent::from(json!({
            "rawPath": "/foo",
            "requestContext": { "http": { "method": "GET" } }
        }));

        assert_eq!(event.raw_path(), Some(&json!("/foo")));
        assert_eq!(event.method(), Some(&json!("GET")));
    }

    #[test]
    fn method_chain_stops_at_first_missing_link() {
        for payload in [
            json!({}),
            json!({ "requestContext": {} }),
            json!({ "requestContext": { "http": {} } }),
            json!({ "requestContext": null }),
            json!({ "requestContext": { "http": "GET" } }),
            json!({ "requestContext": [1, 2] }),
        ] {
            let event = InvocationEvent::from(payload.clone());
            assert_eq!(event.method(), None, "payload: {payload}");
        }
    }

    #[test]
    fn non_object_payloads_have_no_fields() {
        for payload in [Value::Null, json!("text"), json!(42), json!([])] {
            let event = InvocationEvent::from(payload);
            assert!(event.raw_path().is_none());
            assert!(event.method().is_none());
        }
    }

    #[test]
    fn deserializes_any_json() {
        let event: InvocationEvent = serde_json::from_str("null").unwrap();
        assert_eq!(event, InvocationEvent(Value::Null));

        let event: InvocationEvent = serde_json::from_str(r#"{"rawPath":7}"#).unwrap();
        assert_eq!(event.raw_path(), Some(&json!(7)));
    }

    #[test]
    fn response_uses_wire_names() {
        let resp = InvocationResponse {
            status_code: 200,
            headers: HashMap::from([("Content-Type".to_string(), CONTENT_TYPE.to_string())]),
            body: "{}".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "statusCode": 200,
                "headers": { "Content-Type": "application/json" },
                "body": "{}"
            })
        );
    }
}
