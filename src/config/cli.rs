use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse the PokeAPI catalog from the terminal")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Override the catalog base URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Load settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List one page of the catalog
    List {
        #[arg(long)]
        limit: Option<u32>,

        #[arg(long, default_value = "0")]
        offset: u32,
    },
    /// Show the detail record of one creature
    Detail { name: String },
}

impl CliConfig {
    /// 合併預設值、設定檔與命令列參數，命令列優先
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            settings = settings.with_toml(&file);
        }

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if self.verbose {
            settings.verbose = true;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::List { limit, .. } => {
                if let Some(limit) = limit {
                    validate_range("limit", *limit, 1, crate::config::MAX_LIMIT)?;
                }
            }
            Command::Detail { name } => validate_non_empty_string("name", name)?,
        }
        Ok(())
    }
}
