use anyhow::Context;
use clap::Parser;
use pokedex_client::utils::{logger, validation::Validate};
use pokedex_client::{
    CliConfig, Command, FetchResult, PokeApiClient, PokemonDetail, PokemonList, PokemonRepository,
    PokemonRepositoryImpl,
};
use serde::Serialize;

const BAR_WIDTH: u32 = 30;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    let settings = config.settings().context("failed to load settings")?;

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Invalid arguments: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let repository = PokemonRepositoryImpl::new(PokeApiClient::with_base_url(&settings.base_url));
    tracing::info!("Using catalog at {}", repository.api().base_url());

    let succeeded = match config.command {
        Command::List { limit, offset } => {
            let limit = limit.unwrap_or(settings.default_limit);
            show(config.json, &FetchResult::<PokemonList>::Loading, render_list)?;
            let result = repository.get_list(limit, offset).await;
            show(config.json, &result, render_list)?
        }
        Command::Detail { name } => {
            show(config.json, &FetchResult::<PokemonDetail>::Loading, render_detail)?;
            let result = repository.get_detail(&name).await;
            show(config.json, &result, render_detail)?
        }
    };

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Output {
    Stdout(String),
    Stderr(String),
}

/// Formats one state of a fetch; `None` means nothing is printed.
fn format_state<T: Serialize>(
    json: bool,
    result: &FetchResult<T>,
    render: fn(&T) -> String,
) -> anyhow::Result<Option<Output>> {
    let output = match result {
        FetchResult::Loading if json => None,
        FetchResult::Loading => Some(Output::Stderr("⏳ Loading...".to_string())),
        _ if json => Some(Output::Stdout(serde_json::to_string_pretty(result)?)),
        FetchResult::Success { data } => Some(Output::Stdout(render(data))),
        FetchResult::Error { message } => Some(Output::Stderr(format!("❌ {}", message))),
    };
    Ok(output)
}

/// Prints one state of a fetch. Returns whether it was a success.
fn show<T: Serialize>(
    json: bool,
    result: &FetchResult<T>,
    render: fn(&T) -> String,
) -> anyhow::Result<bool> {
    match format_state(json, result, render)? {
        Some(Output::Stdout(text)) => println!("{}", text),
        Some(Output::Stderr(text)) => eprintln!("{}", text),
        None => {}
    }
    Ok(result.is_success())
}

fn render_list(page: &PokemonList) -> String {
    let mut lines = vec![format!("{} entries in catalog", page.count)];
    match page.entries() {
        Ok(entries) => {
            for entry in entries {
                lines.push(format!("#{:04}  {:<16} {}", entry.number, entry.name, entry.image_url));
            }
        }
        Err(e) => {
            tracing::warn!("Could not derive list entries: {}", e);
            lines.extend(page.results.iter().map(|r| r.name.clone()));
        }
    }
    lines.join("\n")
}

fn render_detail(detail: &PokemonDetail) -> String {
    let types: Vec<&str> = detail.types.iter().map(|t| t.type_name.as_str()).collect();
    let mut lines = vec![
        format!("#{:04} {}", detail.id, detail.display_name()),
        format!("Types:  {}", types.join(" / ")),
        format!("Weight: {} Kg", detail.weight_kg()),
        format!("Height: {} M", detail.height_m()),
    ];
    if let Some(sprite) = &detail.sprite_url {
        lines.push(format!("Sprite: {}", sprite));
    }

    let max = u64::from(detail.max_base_stat().unwrap_or(0).max(1));
    lines.push("Base stats:".to_string());
    for stat in &detail.stats {
        let filled = (u64::from(stat.base_value) * u64::from(BAR_WIDTH) / max) as usize;
        lines.push(format!(
            "  {:<6}{:>4} {}",
            stat.abbreviation(),
            stat.base_value,
            "█".repeat(filled)
        ));
    }
    lines.join("\n")
}
