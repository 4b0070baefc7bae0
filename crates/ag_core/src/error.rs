use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Non-2xx answer from the backend, carrying the raw response text.
    #[error("Error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// True for errors synthesized from a non-2xx response.
    pub fn is_http(&self) -> bool {
        matches!(self, Error::Http { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = Error::Http {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Error 500: boom");
        assert!(err.is_http());
        assert!(!Error::Storage("x".to_string()).is_http());
    }
}
