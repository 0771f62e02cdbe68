use serde_json::Value;

/// Strip the platform response envelope
///
/// Returns the `json` member when `response` is an object that has one, and
/// `response` unchanged otherwise.
pub fn unwrap_json_envelope(response: Value) -> Value {
    match response {
        Value::Object(mut map) if map.contains_key("json") => map.remove("json").unwrap_or(Value::Null),
        other => other,
    }
}

/// Wrap a platform body the way the platform SDK reports responses
pub fn envelope(status: u16, body: Value) -> Value {
    serde_json::json!({ "status": status, "json": body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwraps_json_member() {
        let response = json!({"status": 200, "json": {"call_id": 77, "state": "completed"}});
        assert_eq!(unwrap_json_envelope(response), json!({"call_id": 77, "state": "completed"}));
    }

    #[test]
    fn test_null_json_member_is_still_unwrapped() {
        assert_eq!(unwrap_json_envelope(json!({"json": null})), Value::Null);
    }

    #[test]
    fn test_object_without_json_member_is_unchanged() {
        let response = json!({"status": 200, "agents": []});
        assert_eq!(unwrap_json_envelope(response.clone()), response);
    }

    #[test]
    fn test_non_object_is_unchanged() {
        assert_eq!(unwrap_json_envelope(json!([1, 2])), json!([1, 2]));
        assert_eq!(unwrap_json_envelope(json!("ok")), json!("ok"));
    }
}
