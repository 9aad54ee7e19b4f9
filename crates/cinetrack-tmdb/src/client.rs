use reqwest::Client;

use crate::error::CatalogError;

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// Thin TMDB v3 client. Endpoint methods live in `browse` and `details`;
/// this type only carries the connection, the key, and URL assembly.
pub struct TmdbClient {
    client: Client,
    pub(crate) api_key: String,
    pub(crate) language: String,
    pub(crate) include_adult: bool,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key)
    }

    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            language: "en-US".to_string(),
            include_adult: false,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = include_adult;
        self
    }

    /// Point the client at a different server. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}?api_key={}&language={}", self.base_url, path, self.api_key, self.language)
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
