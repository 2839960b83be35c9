use crate::domain::fetch_result::FetchResult;
use crate::domain::model::{PokemonDetail, PokemonList};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Typed access to the remote catalog. Errors are returned, never recovered.
#[async_trait]
pub trait PokemonApi: Send + Sync {
    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<PokemonList>;
    async fn fetch_detail(&self, name: &str) -> Result<PokemonDetail>;
}

/// Boundary consumed by the rendering layer. Implementations must not let
/// any error escape; failures become `FetchResult::Error`.
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    async fn get_list(&self, limit: u32, offset: u32) -> FetchResult<PokemonList>;
    async fn get_detail(&self, name: &str) -> FetchResult<PokemonDetail>;
}
