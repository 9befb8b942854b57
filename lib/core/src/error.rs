use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("JSON nests deeper than {0} levels")]
    TooDeep(usize),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidJson(e.to_string())
    }
}
