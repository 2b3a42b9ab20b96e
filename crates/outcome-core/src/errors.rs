use crate::error_base::ErrorBase;

/// Errors raised by the crate's own fallible operations (config, rendering,
/// writing reports).
///
/// Failures inside an `Outcome` are the caller's own error types; this one is
/// only for the plumbing around them. It is an `ErrorBase` too, so it can be
/// carried in an `Outcome` like any other failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ErrorBase for Error {
    fn tag(&self) -> &'static str {
        match self {
            Error::Config(_) => "ConfigError",
            Error::Io(_) => "IoError",
            Error::Json(_) => "JsonError",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    #[test]
    fn tags_follow_the_variant() {
        assert_eq!(Error::Config("x".into()).tag(), "ConfigError");
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(Error::from(io).tag(), "IoError");
    }

    #[test]
    fn crate_errors_ride_in_an_outcome() {
        let r: Outcome<u8, Error> = Outcome::err(Error::Config("bad shape".into())).with_ok();
        assert_eq!(r.to_string(), "Err(config error: bad shape)");
    }
}
