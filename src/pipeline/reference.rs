//! MedlinePlus reference-data client.
//!
//! Looks up health topics for the raw query to give the answer generator
//! factual context. The collaborator is strictly optional: a missing
//! credential disables the lookup, and any failure is reported as an error
//! for the orchestrator to degrade — never to abort the request.

use std::future::Future;

use serde_json::Value;

use super::PipelineError;

/// Fixed timeout for the reference lookup.
const REFERENCE_TIMEOUT_SECS: u64 = 10;

/// Trait for reference-data lookup within the query pipeline.
///
/// `Ok(None)` means the collaborator answered but had nothing useful
/// (or the lookup is disabled); `Err` means it failed outright.
pub trait ReferenceLookup: Send + Sync {
    fn lookup(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<Value>, PipelineError>> + Send;
}

/// HTTP client for the MedlinePlus health topics API.
pub struct MedlinePlusClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl MedlinePlusClient {
    /// Create a client for the given base URL.
    ///
    /// Without an API key the lookup is disabled and always resolves to
    /// `Ok(None)` without issuing a request.
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REFERENCE_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        }
    }
}

impl ReferenceLookup for MedlinePlusClient {
    async fn lookup(&self, query: &str) -> Result<Option<Value>, PipelineError> {
        if self.api_key.is_none() {
            tracing::debug!("Health API key absent, reference lookup disabled");
            return Ok(None);
        }

        let url = format!("{}/healthTopics", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("format", "json"), ("lang", "en")])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PipelineError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    PipelineError::Timeout(REFERENCE_TIMEOUT_SECS)
                } else {
                    PipelineError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| PipelineError::ResponseParsing(e.to_string()))?;

        Ok(meaningful_payload(payload))
    }
}

/// Treat null and empty containers as "no reference data".
fn meaningful_payload(value: Value) -> Option<Value> {
    match &value {
        Value::Null => None,
        Value::Object(map) if map.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        _ => Some(value),
    }
}

/// Mock reference lookup for testing — configurable result, counts calls.
pub struct MockReferenceLookup {
    result: Option<Value>,
    fail: bool,
    calls: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

impl MockReferenceLookup {
    /// Lookup that finds the given reference payload.
    pub fn found(value: Value) -> Self {
        Self {
            result: Some(value),
            fail: false,
            calls: Default::default(),
        }
    }

    /// Lookup that answers but finds nothing.
    pub fn empty() -> Self {
        Self {
            result: None,
            fail: false,
            calls: Default::default(),
        }
    }

    /// Lookup that fails outright.
    pub fn failing() -> Self {
        Self {
            result: None,
            fail: true,
            calls: Default::default(),
        }
    }

    /// Share a counter incremented on every `lookup` call.
    pub fn with_call_counter(
        mut self,
        counter: std::sync::Arc<std::sync::atomic::AtomicUsize>,
    ) -> Self {
        self.calls = counter;
        self
    }
}

impl ReferenceLookup for MockReferenceLookup {
    async fn lookup(&self, _query: &str) -> Result<Option<Value>, PipelineError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if self.fail {
            return Err(PipelineError::Connection("mock".to_string()));
        }
        Ok(self.result.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_trims_trailing_slash() {
        let client = MedlinePlusClient::new("https://api.nlm.nih.gov/medlineplus/v2/", None);
        assert_eq!(client.base_url, "https://api.nlm.nih.gov/medlineplus/v2");
    }

    #[tokio::test]
    async fn lookup_disabled_without_credential() {
        // Unroutable base URL proves no request is attempted.
        let client = MedlinePlusClient::new("http://192.0.2.1", None);
        let result = client.lookup("fever").await.unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn meaningful_payload_rejects_empty_shapes() {
        assert!(meaningful_payload(json!(null)).is_none());
        assert!(meaningful_payload(json!({})).is_none());
        assert!(meaningful_payload(json!([])).is_none());
    }

    #[test]
    fn meaningful_payload_keeps_topic_data() {
        let payload = json!({"nlmSearchResult": {"count": 2}});
        assert_eq!(meaningful_payload(payload.clone()), Some(payload));
    }

    #[tokio::test]
    async fn mock_found_returns_payload_and_counts() {
        let counter = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let mock = MockReferenceLookup::found(json!({"topics": 1}))
            .with_call_counter(counter.clone());

        let result = mock.lookup("fever").await.unwrap();
        assert!(result.is_some());
        assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn mock_failing_errors() {
        let mock = MockReferenceLookup::failing();
        assert!(mock.lookup("fever").await.is_err());
    }
}
