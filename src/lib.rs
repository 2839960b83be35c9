pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use config::{toml_config::TomlConfig, Settings};
pub use self::core::{
    client::{PokeApiClient, BASE_URL},
    repository::{PokemonRepositoryImpl, UNKNOWN_ERROR},
};
pub use domain::{
    fetch_result::FetchResult,
    model::{ListEntry, NamedResource, PokemonDetail, PokemonList, StatEntry, TypeSlot},
    ports::{PokemonApi, PokemonRepository},
};
pub use utils::error::{PokedexError, Result};
