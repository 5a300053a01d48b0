use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

pub const SCHEMA_VERSION: &str = "pagewatch.v1";

#[derive(Debug, Clone, Serialize, Default)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub schema_version: &'static str,
    pub time: DateTime<Utc>,
    pub request_id: Uuid,
    pub op: &'static str,
    pub result: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip)]
    pub text: Option<String>,
}

impl Envelope {
    pub fn result<T: Serialize>(op: &'static str, result: &T, meta: Option<Meta>) -> Result<Self, serde_json::Error> {
        let res_val = serde_json::to_value(result)?;
        Ok(Envelope {
            schema_version: SCHEMA_VERSION,
            time: Utc::now(),
            request_id: Uuid::new_v4(),
            op,
            result: res_val,
            meta,
            text: None,
        })
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_result_envelope() {
        let result = json!({"reported": {"disappeared": ["https://h3hota.com/"]}});
        let meta = Meta { duration_ms: Some(4) };
        let env = Envelope::result("check", &result, Some(meta)).expect("to serialize result");
        let s = serde_json::to_string(&env).unwrap();
        assert!(s.contains("\"schema_version\":\"pagewatch.v1\""));
        assert!(s.contains("\"op\":\"check\""));
        assert!(s.contains("https://h3hota.com/"));
        assert!(s.contains("\"duration_ms\":4"));
    }

    #[test]
    fn meta_is_omitted_when_absent() {
        let env = Envelope::result("pages", &json!([]), None).unwrap();
        let s = serde_json::to_string(&env).unwrap();
        assert!(!s.contains("\"meta\""));
        assert!(!s.contains("\"text\""));
    }
}
