use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EtlError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Extraction error: {0}")]
    ExtractionError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Load error: {0}")]
    LoadError(String),
}

impl From<std::io::Error> for EtlError {
    fn from(err: std::io::Error) -> Self {
        EtlError::IoError(err.to_string())
    }
}

impl From<csv::Error> for EtlError {
    fn from(err: csv::Error) -> Self {
        EtlError::SerializationError(err.to_string())
    }
}

impl From<object_store::Error> for EtlError {
    fn from(err: object_store::Error) -> Self {
        EtlError::LoadError(err.to_string())
    }
}
