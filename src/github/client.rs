use crate::error::{GhStatsError, Result};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("ghstats/", env!("CARGO_PKG_VERSION"));

/// Outcome of a statistics request. GitHub computes these endpoints
/// asynchronously: a 202 means "accepted, come back later" and is data,
/// not an error.
#[derive(Debug)]
pub enum StatsResponse<T> {
    Ready(T),
    Pending,
}

pub struct GithubClient {
    agent: ureq::Agent,
    api_base: String,
    token: Option<String>,
}

impl GithubClient {
    /// A missing token means unauthenticated access under the lower
    /// anonymous rate limit, not a failure.
    pub fn new(api_base: &str, token: Option<String>) -> Self {
        // 202 and 403 are meaningful answers here, not transport errors
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        Self {
            agent,
            api_base: api_base.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn get(&self, path: &str) -> Result<(u16, Option<String>, String)> {
        let url = format!("{}{}", self.api_base, path);
        let mut request = self
            .agent
            .get(url.as_str())
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.call().map_err(Box::new)?;
        let status = response.status().as_u16();
        let link = response
            .headers()
            .get("link")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.into_body().read_to_string().map_err(Box::new)?;

        Ok((status, link, body))
    }

    /// Fetch one page of a list endpoint. Returns the items plus the raw
    /// `Link` header for pagination. A non-array body where a list belongs
    /// is how exhausting the call budget manifests.
    pub fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<(Vec<T>, Option<String>)> {
        let (status, link, body) = self.get(path)?;
        if status == 403 || status == 429 {
            return Err(GhStatsError::RateLimited);
        }

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| GhStatsError::MalformedResponse(format!("{path}: {e}")))?;
        if !value.is_array() {
            return Err(GhStatsError::RateLimited);
        }

        let items = serde_json::from_value(value)
            .map_err(|e| GhStatsError::MalformedResponse(format!("{path}: {e}")))?;
        Ok((items, link))
    }

    /// Fetch a statistics endpoint, classifying the three-way outcome.
    pub fn get_stats<T: DeserializeOwned>(&self, path: &str) -> Result<StatsResponse<T>> {
        let (status, _, body) = self.get(path)?;
        match status {
            200 => {
                let data = serde_json::from_str(&body)
                    .map_err(|e| GhStatsError::MalformedResponse(format!("{path}: {e}")))?;
                Ok(StatsResponse::Ready(data))
            }
            202 => Ok(StatsResponse::Pending),
            403 | 429 => Err(GhStatsError::RateLimited),
            other => Err(GhStatsError::MalformedResponse(format!(
                "{path}: HTTP {other}"
            ))),
        }
    }
}
