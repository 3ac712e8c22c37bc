use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Message carries the flattened text of whatever failed underneath.
    #[error("{0}")]
    LoadFailure(String),
}

impl LoaderError {
    pub fn is_load_failure(&self) -> bool {
        matches!(self, LoaderError::LoadFailure(_))
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            LoaderError::FileNotFound("/tmp/missing.pdf".to_string()).to_string(),
            "File not found: /tmp/missing.pdf"
        );
        assert_eq!(
            LoaderError::UnsupportedFormat(".csv".to_string()).to_string(),
            "Unsupported file type: .csv"
        );
        assert_eq!(
            LoaderError::InvalidConfiguration("chunk_size must be positive".to_string())
                .to_string(),
            "Invalid configuration: chunk_size must be positive"
        );
        assert_eq!(
            LoaderError::LoadFailure("Error loading PDF file: boom".to_string()).to_string(),
            "Error loading PDF file: boom"
        );
    }

    #[test]
    fn test_is_load_failure() {
        assert!(LoaderError::LoadFailure("x".into()).is_load_failure());
        assert!(!LoaderError::FileNotFound("x".into()).is_load_failure());
    }
}
