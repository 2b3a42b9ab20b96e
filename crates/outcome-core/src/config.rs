use std::{env, fs, path::Path};

use crate::{errors::Error, Result};

/// How an Err payload is written by [`render_json`](crate::render::render_json).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorShape {
    /// The error's own `Serialize` output.
    Raw,
    /// `{ "tag", "message" }`.
    Record,
}

impl ErrorShape {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(ErrorShape::Raw),
            "record" => Ok(ErrorShape::Record),
            other => Err(Error::Config(format!(
                "OUTCOME_ERROR_SHAPE must be `raw` or `record`, got `{other}`"
            ))),
        }
    }
}

/// Rendering and logging settings, read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub log_filter: String,
    pub json_pretty: bool,
    pub error_shape: ErrorShape,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            json_pretty: false,
            error_shape: ErrorShape::Record,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_filter = lookup("OUTCOME_LOG")
            .and_then(non_empty)
            .unwrap_or(defaults.log_filter);
        let json_pretty = lookup("OUTCOME_JSON_PRETTY")
            .map(|s| parse_bool(&s))
            .unwrap_or(defaults.json_pretty);
        let error_shape = match lookup("OUTCOME_ERROR_SHAPE").and_then(non_empty) {
            Some(s) => ErrorShape::parse(&s)?,
            None => defaults.error_shape,
        };

        Ok(Self {
            log_filter,
            json_pretty,
            error_shape,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        env::set_var(key, strip_quotes(v.trim()));
    }
}

fn strip_quotes(v: &str) -> &str {
    if v.len() >= 2
        && ((v.starts_with('"') && v.ends_with('"')) || (v.starts_with('\'') && v.ends_with('\'')))
    {
        &v[1..v.len() - 1]
    } else {
        v
    }
}

fn parse_bool(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
