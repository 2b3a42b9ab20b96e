//! Text and JSON renderings of an [`Outcome`], driven by [`Config`].

use serde::Serialize;

use crate::{
    config::{Config, ErrorShape},
    error_base::ErrorBase,
    outcome::Outcome,
    Result,
};

/// `Ok(<value>)` / `Err(<message>)`.
pub fn render_text<T, E>(outcome: &Outcome<T, E>) -> String
where
    T: std::fmt::Display,
    E: ErrorBase,
{
    outcome.to_string()
}

/// JSON projection, compact or pretty, with the Err payload shaped per
/// `config.error_shape`.
pub fn render_json<T, E>(outcome: &Outcome<T, E>, config: &Config) -> Result<String>
where
    T: Serialize,
    E: ErrorBase + Serialize,
{
    match config.error_shape {
        ErrorShape::Raw => to_string(&outcome.to_json(), config.json_pretty),
        ErrorShape::Record => to_string(&outcome.to_json_record(), config.json_pretty),
    }
}

fn to_string<V: Serialize>(v: &V, pretty: bool) -> Result<String> {
    let s = if pretty {
        serde_json::to_string_pretty(v)?
    } else {
        serde_json::to_string(v)?
    };
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, thiserror::Error)]
    #[error("{message}")]
    struct Failed {
        message: String,
    }

    impl ErrorBase for Failed {
        fn tag(&self) -> &'static str {
            "Failed"
        }
    }

    fn err() -> Outcome<i32, Failed> {
        Outcome::err(Failed {
            message: "failed".to_string(),
        })
        .with_ok()
    }

    #[test]
    fn text_rendering() {
        assert_eq!(render_text(&Outcome::ok(42)), "Ok(42)");
        assert_eq!(render_text(&err()), "Err(failed)");
    }

    #[test]
    fn json_record_shape_is_the_default() {
        let s = render_json(&err(), &Config::default()).unwrap();
        assert_eq!(
            s,
            r#"{"value":{"tag":"Failed","message":"failed"},"isOk":false,"isErr":true}"#
        );
    }

    #[test]
    fn json_raw_shape() {
        let cfg = Config {
            error_shape: ErrorShape::Raw,
            ..Config::default()
        };
        let s = render_json(&err(), &cfg).unwrap();
        assert_eq!(s, r#"{"value":{"message":"failed"},"isOk":false,"isErr":true}"#);
    }

    #[test]
    fn json_pretty() {
        let cfg = Config {
            json_pretty: true,
            ..Config::default()
        };
        let s = render_json(&Outcome::ok(1), &cfg).unwrap();
        assert!(s.contains('\n'));
        assert!(s.contains("\"isOk\": true"));
    }
}
