//! Error types for the Phoenix Events site

use thiserror::Error;

/// Main error type for site operations that touch the outside world.
///
/// The interaction controllers themselves never fail; only persistence and
/// the contact hand-off can produce one of these.
#[derive(Error, Debug)]
pub enum SiteError {
    /// General I/O error while reading or writing preferences
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required contact form field was left empty
    #[error("Missing contact field: {0}")]
    InvalidContact(&'static str),

    /// Phone number has no digits to dial
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::InvalidContact("name");
        assert_eq!(format!("{}", err), "Missing contact field: name");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }
}
