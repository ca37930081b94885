use std::fmt;

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Config(toml::de::Error),
    InvalidData(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "I/O error: {e}"),
            CatalogError::Json(e) => write!(f, "JSON error: {e}"),
            CatalogError::Config(e) => write!(f, "config error: {e}"),
            CatalogError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            CatalogError::Json(e) => Some(e),
            CatalogError::Config(e) => Some(e),
            CatalogError::InvalidData(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Json(e)
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Config(e)
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
