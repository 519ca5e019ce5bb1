//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// How the tokens in front of the date become first and last name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePolicy {
    /// First token is the first name, second is the last name, the rest are dropped
    FirstTwo,
    /// First token is the first name, every later token joins the last name
    FirstAndRest,
}

impl Default for NamePolicy {
    fn default() -> Self {
        NamePolicy::FirstTwo
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Substrings that mark a line as a table header
    pub header_markers: Vec<String>,

    /// Status tokens read as `true` (case-insensitive)
    pub truthy_tokens: Vec<String>,

    /// Rule for splitting the name segment
    pub name_policy: NamePolicy,

    /// Team used when a line has no team tokens
    pub default_team: String,

    /// Maximum accepted document size (bytes)
    pub max_document_bytes: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.header_markers.iter().any(|m| m.trim().is_empty()) {
            return Err("header_markers must not contain blank entries".to_string());
        }
        if self.truthy_tokens.iter().any(|t| t.trim().is_empty()) {
            return Err("truthy_tokens must not contain blank entries".to_string());
        }
        if self
            .truthy_tokens
            .iter()
            .any(|t| t.split_whitespace().count() > 1)
        {
            return Err("truthy_tokens must be single words".to_string());
        }
        if self.default_team.trim().is_empty() {
            return Err("default_team must not be blank".to_string());
        }
        if self.max_document_bytes == 0 {
            return Err("max_document_bytes must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Defaults matching the roster layout the pipeline was built for
    fn default() -> Self {
        Self {
            header_markers: vec![
                "First Name".to_string(),
                "Last Name".to_string(),
                "Date of Birth".to_string(),
            ],
            truthy_tokens: ["true", "yes", "1", "retired", "injured"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            name_policy: NamePolicy::FirstTwo,
            default_team: roster_domain::UNKNOWN_TEAM.to_string(),
            max_document_bytes: 50 * 1024 * 1024,
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
