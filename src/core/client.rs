use crate::core::responses::PokemonResponse;
use crate::domain::model::{PokemonDetail, PokemonList};
use crate::domain::ports::PokemonApi;
use crate::utils::error::{PokedexError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

const RESOURCE: &str = "pokemon";

/// reqwest-backed client for the PokeAPI catalog.
///
/// Transport defaults apply as-is: no retries, no timeout override, no cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
    client: Client,
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeApiClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| PokedexError::ConfigError {
            message: format!("invalid base URL '{}': {}", self.base_url, e),
        })?;

        {
            let mut path = url.path_segments_mut().map_err(|_| PokedexError::ConfigError {
                message: format!("base URL '{}' cannot carry a path", self.base_url),
            })?;
            path.pop_if_empty().extend(segments);
        }

        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        tracing::debug!("API response status: {} ({})", status, response.url());

        if !status.is_success() {
            return Err(PokedexError::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PokemonApi for PokeApiClient {
    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<PokemonList> {
        let url = self.endpoint(&[RESOURCE])?;
        tracing::debug!("Fetching list page: {} limit={} offset={}", url, limit, offset);

        let request = self
            .client
            .get(url)
            .query(&[("limit", limit), ("offset", offset)]);
        self.fetch_json(request).await
    }

    async fn fetch_detail(&self, name: &str) -> Result<PokemonDetail> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(PokedexError::InvalidArgument {
                field: "name".to_string(),
                reason: "name cannot be empty".to_string(),
            });
        }

        let url = self.endpoint(&[RESOURCE, name.as_str()])?;
        tracing::debug!("Fetching detail: {}", url);

        let response: PokemonResponse = self.fetch_json(self.client.get(url)).await?;
        Ok(response.into())
    }
}
