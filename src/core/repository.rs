use crate::domain::fetch_result::FetchResult;
use crate::domain::model::{PokemonDetail, PokemonList};
use crate::domain::ports::{PokemonApi, PokemonRepository};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The only message a consumer ever sees for a failed fetch.
pub const UNKNOWN_ERROR: &str = "Unknown Error";

pub struct PokemonRepositoryImpl<A: PokemonApi> {
    api: A,
}

impl<A: PokemonApi> PokemonRepositoryImpl<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

/// 所有錯誤在此收斂成同一個訊息，原因只留在日誌裡
fn settle<T>(operation: &str, result: Result<T>) -> FetchResult<T> {
    match result {
        Ok(data) => FetchResult::success(data),
        Err(e) => {
            tracing::warn!("{} failed: {}", operation, e);
            FetchResult::error(UNKNOWN_ERROR)
        }
    }
}

#[async_trait]
impl<A: PokemonApi> PokemonRepository for PokemonRepositoryImpl<A> {
    async fn get_list(&self, limit: u32, offset: u32) -> FetchResult<PokemonList> {
        settle("get_list", self.api.fetch_list(limit, offset).await)
    }

    async fn get_detail(&self, name: &str) -> FetchResult<PokemonDetail> {
        settle("get_detail", self.api.fetch_detail(name).await)
    }
}
