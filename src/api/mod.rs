//! HTTP access to the API-Football v3 service.

pub mod rate_limit;

use std::{sync::Arc, time::Duration};

use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde_json::Value;

use crate::{FetchError, Result};
use rate_limit::RateLimit;

/// Base URL for API-Football v3.
pub const BASE_URL: &str = "https://v3.football.api-sports.io";

/// Host identifier sent alongside the key.
pub const API_HOST: &str = "v3.football.api-sports.io";

pub const API_KEY_HEADER: &str = "x-rapidapi-key";
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the static authentication headers for every request.
pub fn auth_header_map(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut key = HeaderValue::from_str(api_key)?;
    key.set_sensitive(true);
    h.insert(API_KEY_HEADER, key);
    h.insert(API_HOST_HEADER, HeaderValue::from_static(API_HOST));
    Ok(h)
}

/// True when an otherwise successful payload carries API-level errors.
///
/// API-Football reports problems as `"errors": []` when there are none and
/// as a non-empty array or object (e.g. `{"token": "..."}`) otherwise.
pub fn has_api_errors(body: &Value) -> bool {
    match body.get("errors") {
        None | Some(Value::Null) => false,
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(_)) => true,
    }
}

/// Thin GET client: auth headers, timeout, error detection and pacing.
pub struct ApiClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
    rate_limit: Arc<dyn RateLimit>,
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: &str, rate_limit: Arc<dyn RateLimit>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("football-data-fetcher/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: auth_header_map(api_key)?,
            rate_limit,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{endpoint}` and return the parsed JSON body.
    ///
    /// Non-2xx statuses, transport faults, undecodable bodies and non-empty
    /// `errors` fields all come back as `Err`. The rate-limit pause is only
    /// taken after a successful call.
    pub async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        debug!("GET {} {:?}", url, params);

        let body = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        if has_api_errors(&body) {
            return Err(FetchError::Api {
                endpoint: endpoint.to_string(),
                errors: body["errors"].to_string(),
            });
        }

        let pause = self.rate_limit.pause();
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }

        Ok(body)
    }
}
