use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Upstream HTTP status classification
    #[error("API rate limit exceeded (429) for endpoint {endpoint}")]
    ApiRateLimit { endpoint: String },

    #[error("API authentication failed ({status}) - check your API key")]
    ApiAuthFailed { status: u16 },

    #[error("API error {status}: {snippet} (URL: {url})")]
    ApiUpstream {
        status: u16,
        snippet: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message}")]
    ApiUnexpectedStructure { message: String },

    // Local programmer error: an endpoint name with no registry entry
    #[error("Unknown endpoint: {name}")]
    UnknownEndpoint { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a rate limit error for an endpoint
    pub fn api_rate_limit(endpoint: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            endpoint: endpoint.into(),
        }
    }

    /// Create an authentication failure error (401/403)
    pub fn api_auth_failed(status: u16) -> Self {
        Self::ApiAuthFailed { status }
    }

    /// Create a generic upstream error carrying the status and a body snippet
    pub fn api_upstream(status: u16, snippet: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUpstream {
            status,
            snippet: snippet.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
        }
    }

    /// Create an unknown endpoint error
    pub fn unknown_endpoint(name: impl Into<String>) -> Self {
        Self::UnknownEndpoint { name: name.into() }
    }

    /// Check if the error came from a single upstream call rather than local
    /// misuse. Upstream failures are skipped per endpoint; local errors are
    /// programmer bugs worth surfacing loudly in logs.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::ApiRateLimit { .. }
                | AppError::ApiAuthFailed { .. }
                | AppError::ApiUpstream { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::ApiMalformedJson { .. }
        )
    }
}
