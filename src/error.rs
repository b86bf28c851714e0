//! Failure taxonomy for the credential preflight checks.
//!
//! Every way the pipeline can fail maps to exactly one variant here, and
//! every variant carries a remedy hint shown to the user alongside the
//! diagnostic.

use std::path::PathBuf;
use thiserror::Error;

/// The config key holding the credential.
pub const CREDENTIAL_KEY: &str = "GEMINI_API_KEY";

/// The sentinel value shipped in template configs. A key equal to this was
/// never replaced with a real credential.
pub const PLACEHOLDER_KEY: &str = "your-gemini-api-key-here";

/// A failed preflight check.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("config.yaml not found at {}", path.display())]
    ConfigNotFound { path: PathBuf, cwd: PathBuf },

    #[error("invalid YAML in config file: {0}")]
    ConfigParseError(#[from] serde_yaml::Error),

    #[error("{CREDENTIAL_KEY} not found in config file")]
    CredentialMissing,

    #[error("{CREDENTIAL_KEY} is still set to the placeholder value")]
    CredentialPlaceholder,

    #[error("failed to initialize the HTTP client: {0}")]
    DependencyMissing(#[source] reqwest::Error),

    #[error("API call failed: {message}")]
    ApiCallFailed {
        kind: ApiFailureKind,
        message: String,
    },

    #[error("API returned an empty response")]
    EmptyResponse,
}

impl CheckError {
    /// Stable taxonomy name, printed with the diagnostic so failures are
    /// easy to grep for in bug reports.
    pub fn label(&self) -> &'static str {
        match self {
            CheckError::ConfigNotFound { .. } => "ConfigNotFound",
            CheckError::ConfigParseError(_) => "ConfigParseError",
            CheckError::CredentialMissing => "CredentialMissing",
            CheckError::CredentialPlaceholder => "CredentialPlaceholder",
            CheckError::DependencyMissing(_) => "DependencyMissing",
            CheckError::ApiCallFailed { .. } => "ApiCallFailed",
            CheckError::EmptyResponse => "EmptyResponse",
        }
    }

    /// Hint telling the user how to fix this specific failure.
    pub fn remedy(&self) -> &'static str {
        match self {
            CheckError::ConfigNotFound { .. } => {
                "Make sure config.yaml is in the SAME folder as the executable \
                 (or pass --config with its path)."
            }
            CheckError::ConfigParseError(_) => {
                "Fix the YAML syntax. The file should contain a line like:\n\
                 GEMINI_API_KEY: 'AIzaSy...'"
            }
            CheckError::CredentialMissing => {
                "Add your key to config.yaml:\n\
                 GEMINI_API_KEY: 'AIzaSy...'"
            }
            CheckError::CredentialPlaceholder => {
                "Replace the placeholder with your actual API key from:\n\
                 https://aistudio.google.com/app/apikey"
            }
            CheckError::DependencyMissing(_) => {
                "The TLS backend could not be initialized. Reinstall the \
                 binary or check your system certificate store."
            }
            CheckError::ApiCallFailed { kind, .. } => kind.remedy(),
            CheckError::EmptyResponse => {
                "The model returned no text. Try again in a moment; if it \
                 persists, check the model name in the request."
            }
        }
    }
}

/// Sub-classification of a failed API call, derived from the error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFailureKind {
    InvalidKey,
    QuotaExceeded,
    PermissionDenied,
    Unknown,
}

impl ApiFailureKind {
    /// Classify an API error by substring matching on its message.
    ///
    /// Invalid-key wording is checked first: the API phrases it as
    /// "API key not valid" but older responses just say "invalid".
    pub fn classify(error_text: &str) -> Self {
        let text = error_text.to_lowercase();

        if text.contains("api key not valid") || text.contains("invalid") {
            ApiFailureKind::InvalidKey
        } else if text.contains("quota") || text.contains("limit") {
            ApiFailureKind::QuotaExceeded
        } else if text.contains("permission denied") {
            ApiFailureKind::PermissionDenied
        } else {
            ApiFailureKind::Unknown
        }
    }

    pub fn remedy(&self) -> &'static str {
        match self {
            ApiFailureKind::InvalidKey => {
                "Your API key is invalid.\n\
                 1. Go to: https://aistudio.google.com/app/apikey\n\
                 2. Create a new API key\n\
                 3. Copy the ENTIRE key (starts with AIzaSy)\n\
                 4. Update config.yaml"
            }
            ApiFailureKind::QuotaExceeded => {
                "You've hit the rate limit.\n\
                 Free tier limits: 15 requests per minute.\n\
                 Wait 60 seconds and try again."
            }
            ApiFailureKind::PermissionDenied => {
                "The API is not enabled for this project.\n\
                 1. Go to the Google Cloud Console\n\
                 2. Enable the Generative Language API"
            }
            ApiFailureKind::Unknown => "Check the error message above for details.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_invalid_key() {
        assert_eq!(
            ApiFailureKind::classify("API key not valid. Please pass a valid API key."),
            ApiFailureKind::InvalidKey
        );
        assert_eq!(
            ApiFailureKind::classify("HTTP 400: INVALID_ARGUMENT"),
            ApiFailureKind::InvalidKey
        );
    }

    #[test]
    fn test_classify_quota() {
        assert_eq!(
            ApiFailureKind::classify("Quota exceeded for quota metric 'Generate requests'"),
            ApiFailureKind::QuotaExceeded
        );
        assert_eq!(
            ApiFailureKind::classify("Resource has been exhausted (rate limit)"),
            ApiFailureKind::QuotaExceeded
        );
    }

    #[test]
    fn test_classify_permission_denied() {
        assert_eq!(
            ApiFailureKind::classify("Permission denied on resource project"),
            ApiFailureKind::PermissionDenied
        );
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(
            ApiFailureKind::classify("connection reset by peer"),
            ApiFailureKind::Unknown
        );
    }

    #[test]
    fn test_labels_match_taxonomy() {
        let err = CheckError::CredentialMissing;
        assert_eq!(err.label(), "CredentialMissing");

        let err = CheckError::ApiCallFailed {
            kind: ApiFailureKind::InvalidKey,
            message: "HTTP 400: API key not valid".to_string(),
        };
        assert_eq!(err.label(), "ApiCallFailed");
        assert!(err.remedy().contains("aistudio.google.com"));
    }

    #[test]
    fn test_empty_response_remedy() {
        assert!(CheckError::EmptyResponse.remedy().contains("no text"));
    }
}
