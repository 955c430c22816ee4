use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    domain::letter::Letter,
    infrastructure::source::{FetchError, LetterSource, Query},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// PostgREST endpoint of the hosted backend
///
/// `GET {base_url}/rest/v1/{table}?select=a,b&column=eq.value`, authenticated
/// with the project's anon key as both `apikey` and bearer token.
pub struct RestLetterSource {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl RestLetterSource {
    pub fn new(base_url: impl Into<String>, api_key: SecretString) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: SecretString,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url.trim_end_matches('/'))
    }

    pub fn query_params(query: &Query) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), query.select_param())];
        params.extend(
            query
                .filters
                .iter()
                .map(|filter| (filter.column.clone(), format!("eq.{}", filter.value))),
        );
        params
    }
}

impl LetterSource for RestLetterSource {
    async fn select(&self, query: &Query) -> Result<Vec<Letter>, FetchError> {
        let url = self.table_url(&query.table);
        log::debug!("GET {url} select={}", query.select_param());

        let key = self.api_key.expose_secret();
        let response = self
            .client
            .get(&url)
            .query(&Self::query_params(query))
            .header("apikey", key)
            .bearer_auth(key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status { status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for RestLetterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestLetterSource")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
