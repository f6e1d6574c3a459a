//! Upstream HTTP client: templated paths, cache-first reads, and HTTP
//! status classification.

use reqwest::Client;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::Config;
use crate::constants::{
    ERROR_BODY_SNIPPET_CHARS, HTTP_CONNECT_TIMEOUT_SECONDS, HTTP_POOL_MAX_IDLE_PER_HOST,
};
use crate::data_source::cache;
use crate::data_source::registry::{self, ApiBase, EndpointName};
use crate::error::AppError;

/// Header carrying the upstream subscription key
pub const AUTH_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Path parameters for one endpoint call. A BTreeMap keeps keys sorted so
/// cache keys serialize deterministically.
pub type Params = BTreeMap<&'static str, String>;

/// Client for the upstream data API. Cheap to clone; the inner reqwest
/// client shares its connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: Config,
}

impl ApiClient {
    /// Creates a client with pooling and the per-call timeouts the upstream
    /// expects (10s connect, configurable total, default 30s).
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECONDS))
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches one endpoint, consulting the cache first.
    ///
    /// An endpoint name missing from the registry is a local programmer
    /// error, not a network condition. Upstream statuses map to the error
    /// taxonomy: 429 rate limit, 401/403 auth, anything else upstream error
    /// with a body snippet. A 200 with an unparsable body is also an error,
    /// never silently returned.
    #[instrument(skip(self, params), fields(endpoint = %name))]
    pub async fn fetch(&self, name: EndpointName, params: &Params) -> Result<Value, AppError> {
        let def = registry::find(name).ok_or_else(|| AppError::unknown_endpoint(name.as_str()))?;

        let url = format!(
            "{}{}",
            self.base_url(def.base),
            resolve_path(def.path, params)
        );
        let key = cache_key(name, params);

        if let Some(value) = cache::get(&key).await {
            debug!("Returning cached response for {name}");
            return Ok(value);
        }

        info!("Fetching {name} from {url}");
        let response = self
            .http
            .get(&url)
            .header(AUTH_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::network_timeout(&url)
                } else {
                    AppError::ApiFetch(e)
                }
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                AppError::network_timeout(&url)
            } else {
                AppError::ApiFetch(e)
            }
        })?;

        match status {
            200 => {
                let value: Value = serde_json::from_str(&body)
                    .map_err(|e| AppError::api_malformed_json(e.to_string(), &url))?;
                cache::set(key, value.clone(), def.ttl).await;
                Ok(value)
            }
            429 => {
                error!("Rate limited on {name}");
                Err(AppError::api_rate_limit(name.as_str()))
            }
            401 | 403 => {
                error!("Authentication failed ({status}) on {name}");
                Err(AppError::api_auth_failed(status))
            }
            _ => {
                let snippet: String = body.chars().take(ERROR_BODY_SNIPPET_CHARS).collect();
                error!("Upstream error {status} on {name}: {snippet}");
                Err(AppError::api_upstream(status, snippet, &url))
            }
        }
    }

    /// Full URL prefix for a namespace
    fn base_url(&self, base: ApiBase) -> String {
        format!(
            "{}/{}",
            self.config.api_base_url.trim_end_matches('/'),
            base.path_segment()
        )
    }
}

/// Substitutes every `{param}` occurrence in a path template. A param with
/// no value leaves the literal placeholder in place; that is a caller bug
/// and surfaces as an upstream 404, not a special case here.
pub fn resolve_path(template: &str, params: &Params) -> String {
    let mut path = template.to_string();
    for (key, value) in params {
        path = path.replace(&format!("{{{key}}}"), value);
    }
    path
}

/// Deterministic cache key from endpoint name plus sorted params.
/// BTreeMap serialization is already key-ordered.
pub fn cache_key(name: EndpointName, params: &Params) -> String {
    let params_json = serde_json::to_string(params).unwrap_or_else(|_| "{}".to_string());
    format!("sportsdata:{name}:{params_json}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_of(pairs: &[(&'static str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_path_substitutes_all_placeholders() {
        let params = params_of(&[("season", "2025REG"), ("week", "12")]);
        let path = resolve_path("/json/ScoresByWeek/{season}/{week}", &params);
        assert_eq!(path, "/json/ScoresByWeek/2025REG/12");
        assert!(!path.contains('{'));
        assert!(!path.contains('}'));
    }

    #[test]
    fn test_resolve_path_repeated_placeholder() {
        let params = params_of(&[("team", "KC")]);
        let path = resolve_path("/json/{team}/vs/{team}", &params);
        assert_eq!(path, "/json/KC/vs/KC");
    }

    #[test]
    fn test_resolve_path_missing_param_leaves_placeholder() {
        let params = params_of(&[("season", "2025REG")]);
        let path = resolve_path("/json/ScoresByWeek/{season}/{week}", &params);
        assert_eq!(path, "/json/ScoresByWeek/2025REG/{week}");
    }

    #[test]
    fn test_cache_key_is_order_independent() {
        let mut a = Params::new();
        a.insert("week", "12".to_string());
        a.insert("season", "2025REG".to_string());

        let mut b = Params::new();
        b.insert("season", "2025REG".to_string());
        b.insert("week", "12".to_string());

        assert_eq!(
            cache_key(EndpointName::ScoresByWeek, &a),
            cache_key(EndpointName::ScoresByWeek, &b)
        );
    }

    #[test]
    fn test_cache_key_distinguishes_endpoints_and_params() {
        let params = params_of(&[("season", "2025REG")]);
        let a = cache_key(EndpointName::Standings, &params);
        let b = cache_key(EndpointName::Schedules, &params);
        assert_ne!(a, b);

        let other = params_of(&[("season", "2024REG")]);
        assert_ne!(a, cache_key(EndpointName::Standings, &other));
    }

    #[tokio::test]
    async fn test_fetch_all_registry_endpoints_resolve() {
        // Every catalog entry must be resolvable through the client's path
        // builder without panicking, even with empty params.
        let empty = Params::new();
        for def in crate::data_source::registry::all() {
            let _ = resolve_path(def.path, &empty);
        }
    }
}
