pub mod client;
pub mod repository;
pub mod responses;

pub use crate::domain::fetch_result::FetchResult;
pub use crate::domain::model::{ListEntry, PokemonDetail, PokemonList};
pub use crate::domain::ports::{PokemonApi, PokemonRepository};
pub use crate::utils::error::Result;
