//! Wire shapes of the detail endpoint. Only the fields the domain needs are
//! read; everything else in the payload is ignored by serde.

use crate::domain::model::{NamedResource, PokemonDetail, StatEntry, TypeSlot};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlotResponse>,
    #[serde(default)]
    pub stats: Vec<StatResponse>,
    #[serde(default)]
    pub sprites: SpritesResponse,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlotResponse {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatResponse {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpritesResponse {
    pub front_default: Option<String>,
}

impl From<PokemonResponse> for PokemonDetail {
    fn from(response: PokemonResponse) -> Self {
        PokemonDetail {
            id: response.id,
            name: response.name,
            height: response.height,
            weight: response.weight,
            types: response
                .types
                .into_iter()
                .map(|t| TypeSlot {
                    type_name: t.kind.name,
                })
                .collect(),
            stats: response
                .stats
                .into_iter()
                .map(|s| StatEntry {
                    stat_name: s.stat.name,
                    base_value: s.base_stat,
                })
                .collect(),
            sprite_url: response.sprites.front_default,
        }
    }
}
