//! Embedding/summarization provider identifiers and their defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported model providers.
///
/// The wire form is the lowercase identifier the daemon stores in its
/// configuration (`"ollama"`, `"lmstudio"`, `"openai-compatible"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Provider {
    #[serde(rename = "ollama")]
    Ollama,
    #[serde(rename = "lmstudio")]
    LmStudio,
    #[serde(rename = "openai-compatible")]
    OpenAiCompatible,
}

impl Provider {
    /// All providers, in the order they are offered to the user.
    pub const ALL: [Provider; 3] = [
        Provider::Ollama,
        Provider::LmStudio,
        Provider::OpenAiCompatible,
    ];

    /// Documented default base URL for this provider.
    ///
    /// Selecting a provider in the form resets the base URL to this value.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::Ollama => "http://localhost:11434",
            Provider::LmStudio => "http://localhost:1234",
            Provider::OpenAiCompatible => "http://localhost:1234",
        }
    }

    /// Wire identifier as stored by the daemon.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            Provider::Ollama => "ollama",
            Provider::LmStudio => "lmstudio",
            Provider::OpenAiCompatible => "openai-compatible",
        }
    }

    /// Human-readable name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::Ollama => "Ollama",
            Provider::LmStudio => "LM Studio",
            Provider::OpenAiCompatible => "OpenAI-compatible",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

/// Error returned when parsing an unknown provider identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown provider '{0}'")]
pub struct ProviderParseError(pub String);

impl FromStr for Provider {
    type Err = ProviderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(Provider::Ollama),
            "lmstudio" => Ok(Provider::LmStudio),
            "openai-compatible" => Ok(Provider::OpenAiCompatible),
            _ => Err(ProviderParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_urls() {
        assert_eq!(Provider::Ollama.default_base_url(), "http://localhost:11434");
        assert_eq!(Provider::LmStudio.default_base_url(), "http://localhost:1234");
        assert_eq!(
            Provider::OpenAiCompatible.default_base_url(),
            "http://localhost:1234"
        );
    }

    #[test]
    fn wire_round_trip() -> Result<(), serde_json::Error> {
        for provider in Provider::ALL {
            let json = serde_json::to_string(&provider)?;
            let back: Provider = serde_json::from_str(&json)?;
            assert_eq!(back, provider);
            assert_eq!(json.trim_matches('"'), provider.as_wire_str());
        }
        Ok(())
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Ollama".parse::<Provider>(), Ok(Provider::Ollama));
        assert_eq!("LMSTUDIO".parse::<Provider>(), Ok(Provider::LmStudio));
        assert!("vllm".parse::<Provider>().is_err());
    }
}
