use crate::utils::error::{PokedexError, Result};
use serde::{Deserialize, Serialize};

/// 官方插圖的基礎路徑，列表項目用編號拼出圖片網址
pub const ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// `{name, url}` pair used by the catalog to reference another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the catalog listing. `next`/`previous` are passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonList {
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl PokemonList {
    /// 把原始結果轉成列表畫面使用的項目
    pub fn entries(&self) -> Result<Vec<ListEntry>> {
        self.results.iter().map(ListEntry::from_resource).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub name: String,
    pub image_url: String,
    pub number: u32,
}

impl ListEntry {
    /// Derives the display entry from a list result.
    ///
    /// The dex number is the last path segment of the resource URL
    /// (`.../pokemon/25/` -> 25); a trailing slash is ignored.
    pub fn from_resource(resource: &NamedResource) -> Result<Self> {
        let number = resource
            .url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse::<u32>().ok())
            .ok_or_else(|| PokedexError::InvalidResourceUrl {
                url: resource.url.clone(),
            })?;

        Ok(Self {
            name: capitalize(&resource.name),
            image_url: format!("{}/{}.png", ARTWORK_BASE_URL, number),
            number,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSlot {
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub stat_name: String,
    pub base_value: u32,
}

impl StatEntry {
    /// Short label shown next to a stat bar.
    pub fn abbreviation(&self) -> &str {
        match self.stat_name.as_str() {
            "hp" => "HP",
            "attack" => "Atk",
            "defense" => "Def",
            "special-attack" => "SpAtk",
            "special-defense" => "SpDef",
            "speed" => "Spd",
            other => other,
        }
    }
}

/// Detail record for a single creature, one instance per fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    pub sprite_url: Option<String>,
}

impl PokemonDetail {
    pub fn weight_kg(&self) -> f32 {
        (self.weight as f32 * 100.0).round() / 1000.0
    }

    pub fn height_m(&self) -> f32 {
        (self.height as f32 * 100.0).round() / 1000.0
    }

    /// 能力條的滿格值
    pub fn max_base_stat(&self) -> Option<u32> {
        self.stats.iter().map(|s| s.base_value).max()
    }

    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }
}

pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
