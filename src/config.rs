//! Config file loading and credential extraction.
//!
//! The diagnostic reads a single `config.yaml` co-located with the
//! executable, the same file the dependent application reads at startup.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CheckError, CREDENTIAL_KEY, PLACEHOLDER_KEY};

/// Parsed config file contents. Only the credential key is consumed; the
/// rest is carried so the application's other settings never break parsing.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    values: BTreeMap<String, serde_yaml::Value>,
}

impl ConfigDocument {
    /// Extract the credential, rejecting missing, empty and placeholder
    /// values.
    pub fn credential(&self) -> Result<String, CheckError> {
        let key = match self.values.get(CREDENTIAL_KEY) {
            Some(serde_yaml::Value::String(s)) => s.trim().to_string(),
            _ => return Err(CheckError::CredentialMissing),
        };

        if key.is_empty() {
            return Err(CheckError::CredentialMissing);
        }
        if key == PLACEHOLDER_KEY {
            return Err(CheckError::CredentialPlaceholder);
        }

        Ok(key)
    }
}

/// Compute the default config path: `config.yaml` next to the executable.
pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow::anyhow!("executable has no parent directory"))?;
    Ok(dir.join("config.yaml"))
}

/// Read the config file to a string.
///
/// A missing or unreadable file reports the resolved path and the current
/// working directory so the user can see where the lookup happened.
pub fn read_config(path: &Path) -> Result<String, CheckError> {
    std::fs::read_to_string(path).map_err(|_| CheckError::ConfigNotFound {
        path: path.to_path_buf(),
        cwd: std::env::current_dir().unwrap_or_default(),
    })
}

/// Parse config file contents as a YAML mapping.
pub fn parse_config(raw: &str) -> Result<ConfigDocument, CheckError> {
    Ok(serde_yaml::from_str(raw)?)
}

/// Masked preview of the key for display: first 10 and last 5 characters.
/// Short keys are fully hidden.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 15 {
        return "***".to_string();
    }

    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 5..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_config_missing_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yaml");

        let err = read_config(&path).unwrap_err();
        assert_eq!(err.label(), "ConfigNotFound");
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn test_read_and_parse_config() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "GEMINI_API_KEY: 'AIzaSyExampleExampleExample123'\n").unwrap();

        let raw = read_config(&path).unwrap();
        let document = parse_config(&raw).unwrap();
        assert_eq!(
            document.credential().unwrap(),
            "AIzaSyExampleExampleExample123"
        );
    }

    #[test]
    fn test_parse_config_invalid_yaml() {
        let err = parse_config("GEMINI_API_KEY: [unclosed").unwrap_err();
        assert_eq!(err.label(), "ConfigParseError");
    }

    #[test]
    fn test_credential_missing() {
        let document = parse_config("OTHER_SETTING: true\n").unwrap();
        let err = document.credential().unwrap_err();
        assert_eq!(err.label(), "CredentialMissing");
    }

    #[test]
    fn test_credential_empty() {
        let document = parse_config("GEMINI_API_KEY: ''\n").unwrap();
        let err = document.credential().unwrap_err();
        assert_eq!(err.label(), "CredentialMissing");
    }

    #[test]
    fn test_credential_null() {
        let document = parse_config("GEMINI_API_KEY: null\n").unwrap();
        let err = document.credential().unwrap_err();
        assert_eq!(err.label(), "CredentialMissing");
    }

    #[test]
    fn test_credential_placeholder() {
        let document = parse_config("GEMINI_API_KEY: 'your-gemini-api-key-here'\n").unwrap();
        let err = document.credential().unwrap_err();
        assert_eq!(err.label(), "CredentialPlaceholder");
    }

    #[test]
    fn test_credential_ignores_other_keys() {
        let document =
            parse_config("DEBUG: false\nGEMINI_API_KEY: 'AIzaSyExampleExampleExample123'\n")
                .unwrap();
        assert!(document.credential().is_ok());
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(
            mask_key("AIzaSyExampleExampleExample123"),
            "AIzaSyExam...le123"
        );
        assert_eq!(mask_key("short"), "***");
    }
}
