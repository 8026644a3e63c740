use std::time::Duration;

use feed_core::{CategoryFilter, Fact, NewFact, MAX_ITEMS};
use feed_logging::{feed_debug, feed_warn};
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::{FactGateway, FailureKind, GatewayError};

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// Project root, e.g. `https://abc.supabase.co`.
    pub base_url: String,
    pub api_key: Option<String>,
    pub table: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_records: usize,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:54321".to_string(),
            api_key: None,
            table: "facts".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_records: MAX_ITEMS,
        }
    }
}

/// Gateway speaking the PostgREST dialect over HTTP.
#[derive(Debug, Clone)]
pub struct RestGateway {
    settings: GatewaySettings,
    table_url: Url,
    client: reqwest::Client,
}

impl RestGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let table_url = table_url(&settings.base_url, &settings.table)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| GatewayError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            table_url,
            client,
        })
    }

    fn fetch_url(&self, filter: CategoryFilter) -> Url {
        let mut url = self.table_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", "*");
            if let Some(category) = filter.category() {
                query.append_pair("category", &format!("eq.{category}"));
            }
            query
                .append_pair("order", "votesInteresting.desc")
                .append_pair("limit", &self.settings.max_records.to_string());
        }
        url
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.settings.api_key.as_deref() {
            Some(key) => request
                .header("apikey", key)
                .header(AUTHORIZATION, format!("Bearer {key}")),
            None => request,
        }
    }

    async fn read_rows(&self, response: reqwest::Response) -> Result<Vec<Fact>, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&body)
            .map_err(|err| GatewayError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl FactGateway for RestGateway {
    async fn fetch_facts(&self, filter: CategoryFilter) -> Result<Vec<Fact>, GatewayError> {
        let url = self.fetch_url(filter);
        feed_debug!("GET {}", url);

        let response = self
            .authorize(self.client.get(url))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let mut rows = self.read_rows(response).await?;
        if rows.len() > self.settings.max_records {
            feed_warn!(
                "store returned {} rows for filter={}, keeping {}",
                rows.len(),
                filter,
                self.settings.max_records
            );
            rows.truncate(self.settings.max_records);
        }
        Ok(rows)
    }

    async fn create_fact(&self, draft: &NewFact) -> Result<Fact, GatewayError> {
        let mut url = self.table_url.clone();
        url.query_pairs_mut().append_pair("select", "*");
        let body = encode_insert(draft)?;
        feed_debug!("POST {} category={}", url, draft.category);

        let response = self
            .authorize(self.client.post(url))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header("Prefer", "return=representation")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        self.read_rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::new(FailureKind::EmptyResponse, "insert returned no rows"))
    }
}

/// Insert body: a one-row JSON array.
fn encode_insert(draft: &NewFact) -> Result<Vec<u8>, GatewayError> {
    serde_json::to_vec(std::slice::from_ref(draft))
        .map_err(|err| GatewayError::new(FailureKind::Encode, err.to_string()))
}

fn table_url(base_url: &str, table: &str) -> Result<Url, GatewayError> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let base = Url::parse(&base)
        .map_err(|err| GatewayError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(GatewayError::new(
            FailureKind::InvalidUrl,
            format!("unsupported scheme {}", base.scheme()),
        ));
    }
    base.join(&format!("rest/v1/{table}"))
        .map_err(|err| GatewayError::new(FailureKind::InvalidUrl, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return GatewayError::new(FailureKind::Decode, err.to_string());
    }
    GatewayError::new(FailureKind::Network, err.to_string())
}
