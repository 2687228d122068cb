use thiserror::Error;

/// Why the browser could not report a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeolocationFailure {
    pub code: Option<u32>,
    pub message: String,
}

impl std::fmt::Display for GeolocationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Geolocation error: {0}")]
    Geolocation(GeolocationFailure),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Leaflet error: {0}")]
    Leaflet(String),
}

impl From<serde_json::Error> for MapError {
    fn from(e: serde_json::Error) -> Self {
        MapError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
