//! Configuration for the Sentinela analysis service.

use serde::{Deserialize, Serialize};

/// Main configuration for the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// Text processing configuration.
    pub text: TextConfig,

    /// Sentiment classification configuration.
    pub sentiment: SentimentConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            text: TextConfig::default(),
            sentiment: SentimentConfig::default(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    /// Default: "0.0.0.0".
    pub host: String,

    /// Port to listen on.
    /// Default: 3000.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Text processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    /// Minimum token length (in characters) to keep after normalization.
    /// Default: 3.
    pub min_token_chars: usize,

    /// Maximum accepted input length (in characters) for one analysis.
    /// Default: 5000.
    pub max_text_chars: usize,

    /// Number of entries in the top-words ranking.
    /// Default: 5.
    pub top_limit: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            min_token_chars: 3,
            max_text_chars: 5000,
            top_limit: 5,
        }
    }
}

/// Sentiment classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// URL of the remote sentiment inference endpoint.
    /// Default: the Hugging Face multilingual sentiment model.
    pub endpoint: String,

    /// Bearer credential for the remote endpoint.
    /// Default: None (the remote call still runs, unauthenticated).
    pub api_key: Option<String>,

    /// Timeout for the remote call, in seconds. A single attempt is made;
    /// there are no retries.
    /// Default: 30.
    pub timeout_secs: u64,

    /// Maximum number of characters sent to the remote model. Longer input
    /// is truncated, never rejected.
    /// Default: 512.
    pub max_input_chars: usize,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            endpoint:
                "https://router.huggingface.co/hf-inference/models/tabularisai/multilingual-sentiment-analysis"
                    .to_string(),
            api_key: None,
            timeout_secs: 30,
            max_input_chars: 512,
        }
    }
}
