//! Error types for loading message bundles.

/// Errors that can occur when building a [`MessageBundle`](crate::MessageBundle)
/// from TOML text.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// The text is not valid TOML.
    #[error("failed to parse message bundle: {0}")]
    ParseError(String),

    /// A message key maps to something other than a string or table.
    #[error("message '{0}' is not a string")]
    NotAString(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_a_string() {
        let err = BundleError::NotAString("compiler.err.x".to_string());
        assert_eq!(format!("{err}"), "message 'compiler.err.x' is not a string");
    }
}
