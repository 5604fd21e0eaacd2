//! Error types for Krynica.

use std::io;

/// Errors produced by the Krynica engine.
#[derive(Debug, thiserror::Error)]
pub enum KrynicaError {
    #[error("store error: {0}")]
    Store(String),

    #[error("navigation error: {0}")]
    Nav(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, KrynicaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let e = KrynicaError::Store("duplicate slug".into());
        assert_eq!(format!("{e}"), "store error: duplicate slug");
    }

    #[test]
    fn nav_error_display() {
        let e = KrynicaError::Nav("bad path".into());
        assert_eq!(format!("{e}"), "navigation error: bad path");
    }

    #[test]
    fn platform_error_display() {
        let e = KrynicaError::Platform("clipboard unavailable".into());
        assert_eq!(format!("{e}"), "platform error: clipboard unavailable");
    }

    #[test]
    fn render_error_display() {
        let e = KrynicaError::Render("missing template".into());
        assert_eq!(format!("{e}"), "render error: missing template");
    }

    #[test]
    fn config_error_display() {
        let e = KrynicaError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: KrynicaError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: KrynicaError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: KrynicaError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn error_is_debug() {
        let e = KrynicaError::Store("test".into());
        assert!(format!("{e:?}").contains("Store"));
    }

    #[test]
    fn result_alias_round_trip() {
        let ok: Result<i32> = Ok(7);
        assert_eq!(ok.unwrap(), 7);
        let err: Result<i32> = Err(KrynicaError::Nav("oops".into()));
        assert!(err.is_err());
    }
}
