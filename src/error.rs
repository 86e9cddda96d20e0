use thiserror::Error;

/// Errors from a [`KeyValueStore`](crate::store::KeyValueStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access store file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Store file {path} is not a valid JSON object: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize store value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from the remote translate endpoint.
///
/// These never escape [`Translator::translate_array`]; they are logged and
/// the call degrades to the fallback dictionary.
///
/// [`Translator::translate_array`]: crate::translation::Translator::translate_array
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Transport failure, timeout, or an undecodable response body
    #[error("Translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Translate API error ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Translate API returned {got} translations for {expected} texts")]
    LengthMismatch { expected: usize, got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mentions_code() {
        let error = TranslateError::Status {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            body: "down".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("down"));
    }

    #[test]
    fn test_length_mismatch_message() {
        let error = TranslateError::LengthMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(
            error.to_string(),
            "Translate API returned 2 translations for 3 texts"
        );
    }
}
