//! JSON projection of an [`Outcome`]: `{ "value", "isOk", "isErr" }`.
//!
//! One-way only. Nothing here turns JSON back into an `Outcome`; the concrete
//! error kind generally cannot be recovered from the serialized payload.

use serde::{Serialize, Serializer};

use crate::{
    error_base::{ErrorBase, ErrorRecord},
    outcome::{Outcome, Payload},
    Result,
};

/// Plain record mirroring an outcome. `value` is whichever payload is present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeJson<V> {
    pub value: V,
    pub is_ok: bool,
    pub is_err: bool,
}

impl<T, E: ErrorBase> Outcome<T, E> {
    /// Shallow projection. Payloads serialize by their own rules.
    pub fn to_json(&self) -> OutcomeJson<Payload<&T, &E>> {
        OutcomeJson {
            value: self.value(),
            is_ok: self.is_ok(),
            is_err: self.is_err(),
        }
    }

    /// Same shape, but an Err payload is summarized as `{ tag, message }`.
    /// Works for error types that do not implement `Serialize`.
    pub fn to_json_record(&self) -> OutcomeJson<Payload<&T, ErrorRecord>> {
        let value = match self.value() {
            Payload::Ok(value) => Payload::Ok(value),
            Payload::Err(error) => Payload::Err(error.to_record()),
        };
        OutcomeJson {
            value,
            is_ok: self.is_ok(),
            is_err: self.is_err(),
        }
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value>
    where
        T: Serialize,
        E: Serialize,
    {
        Ok(serde_json::to_value(self.to_json())?)
    }
}

impl<T: Serialize, E: ErrorBase + Serialize> Serialize for Outcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    #[derive(Debug, Serialize, thiserror::Error)]
    #[error("{message}")]
    struct Failed {
        code: u16,
        message: String,
    }

    impl ErrorBase for Failed {
        fn tag(&self) -> &'static str {
            "Failed"
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("opaque failure")]
    struct Opaque;

    impl ErrorBase for Opaque {
        fn tag(&self) -> &'static str {
            "Opaque"
        }
    }

    fn failed() -> Failed {
        Failed {
            code: 500,
            message: "failed".to_string(),
        }
    }

    #[test]
    fn ok_projection() {
        let v = Outcome::ok(42).to_json_value().unwrap();
        assert_eq!(v, json!({ "value": 42, "isOk": true, "isErr": false }));
    }

    #[test]
    fn err_projection_uses_the_error_serialization() {
        let v = Outcome::err(failed()).to_json_value().unwrap();
        assert_eq!(
            v,
            json!({
                "value": { "code": 500, "message": "failed" },
                "isOk": false,
                "isErr": true
            })
        );
    }

    #[test]
    fn outcome_serializes_as_its_projection() {
        let r: Outcome<&str, Failed> = Outcome::ok("hi").with_err();
        let s = serde_json::to_string(&r).unwrap();
        assert_eq!(s, r#"{"value":"hi","isOk":true,"isErr":false}"#);
    }

    #[test]
    fn nested_values_serialize_recursively() {
        let r = Outcome::ok(vec![Outcome::ok(1), Outcome::ok(2)]);
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["value"][1]["value"], json!(2));
        assert_eq!(v["isOk"], json!(true));
    }

    #[test]
    fn record_projection_for_non_serializable_errors() {
        let r: Outcome<i32, Opaque> = Outcome::err(Opaque).with_ok();
        let v = serde_json::to_value(r.to_json_record()).unwrap();
        assert_eq!(
            v,
            json!({
                "value": { "tag": "Opaque", "message": "opaque failure" },
                "isOk": false,
                "isErr": true
            })
        );
    }

    #[test]
    fn unserializable_value_is_reported() {
        let mut m = HashMap::new();
        m.insert((1, 2), "pair keys are not JSON object keys");
        let err = Outcome::ok(m).to_json_value().unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }
}
