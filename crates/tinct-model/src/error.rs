//! Error types shared across the tinct crates.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while deriving a palette.
///
/// All of these are terminal for a run: the derivation is deterministic, so
/// there is no retry logic anywhere; a failed input fails the same way every
/// time. Unknown variant names are deliberately *not* an error (they fall
/// back to `vibrant`).
#[derive(Debug, Error)]
pub enum TinctError {
    /// Seed image path does not exist.
    #[error("Image not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Mode string is neither `light` nor `dark`.
    #[error("Invalid mode: {value}. Use 'light' or 'dark'")]
    InvalidMode { value: String },

    /// Failure inside a consumed primitive (image decode, colour scoring).
    #[error("{0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, TinctError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_not_found_message() {
        let error = TinctError::InputNotFound {
            path: PathBuf::from("/tmp/missing.png"),
        };
        assert_eq!(error.to_string(), "Image not found: /tmp/missing.png");
    }

    #[test]
    fn invalid_mode_message() {
        let error = TinctError::InvalidMode {
            value: "sepia".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid mode: sepia. Use 'light' or 'dark'"
        );
    }
}
