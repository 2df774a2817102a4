// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy shared by loaders, the REST client and persistence code.
//!
//! Variants carry rendered messages instead of source errors so that results
//! can travel inside `Message` values, which must be `Clone`.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("JSON Error: {0}")]
    Json(String),

    #[error("GeoJSON Error: {0}")]
    GeoJson(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Network Error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("HTTP Error: status {status}")]
    Http { status: u16 },

    #[error("Country not found: {0}")]
    CountryNotFound(String),

    /// Well-formed input that violates a data invariant.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    /// Returns the i18n message key used when surfacing this error as a
    /// notification.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Json(_) => "error-json",
            Error::GeoJson(_) => "error-geojson",
            Error::Config(_) => "error-config",
            Error::Network(_) => "error-network",
            Error::Http { .. } => "error-http",
            Error::CountryNotFound(_) => "error-country-not-found",
            Error::InvalidData(_) => "error-invalid-data",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl From<geojson::Error> for Error {
    fn from(err: geojson::Error) -> Self {
        Error::GeoJson(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Error::Http {
                status: status.as_u16(),
            };
        }
        if err.is_decode() {
            return Error::Json(err.to_string());
        }
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_json_error_produces_json_variant() {
        let json_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn http_error_formats_status() {
        let err = Error::Http { status: 503 };
        assert_eq!(format!("{}", err), "HTTP Error: status 503");
    }

    #[test]
    fn every_variant_has_an_i18n_key() {
        let errors = [
            Error::Io(String::new()),
            Error::Json(String::new()),
            Error::GeoJson(String::new()),
            Error::Config(String::new()),
            Error::Network(String::new()),
            Error::Http { status: 500 },
            Error::CountryNotFound("Atlantis".into()),
            Error::InvalidData(String::new()),
        ];
        for err in errors {
            assert!(err.i18n_key().starts_with("error-"));
        }
    }
}
