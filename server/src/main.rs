mod game_handler;
mod index_page;
mod server_config;
mod shared_game;
mod web_server;

use std::path::PathBuf;

use clap::Parser;
use gomoku_common::config::{ConfigSource, Validate};
use gomoku_common::{log, log_warn, logger};

use server_config::ServerConfig;
use shared_game::SharedGame;

#[derive(Parser)]
#[command(name = "gomoku_server")]
struct Args {
    /// Path to the YAML config file. Defaults to a file next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the port from the config file.
    #[arg(long)]
    port: Option<u16>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Writes the default config to the config path and exits.
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(server_config::default_config_path);
    let config_manager = server_config::get_config_manager(&config_path);

    if args.write_default_config {
        config_manager.set_config(&ServerConfig::default())?;
        println!("Default config written to {}", config_path.display());
        return Ok(());
    }

    let (mut config, source) = config_manager.load()?;
    if let Some(port) = args.port {
        config.port = port;
        config.validate()?;
    }

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        config.log_prefix.clone()
    };
    logger::init_logger(prefix);

    let base_dir = match source {
        ConfigSource::Stored(location) => {
            log!("Loaded config from {}", location);
            config_path.parent()
        }
        ConfigSource::Defaults => {
            log!("No config at {}, using defaults", config_path.display());
            None
        }
    };
    let static_dir = config.resolve_static_dir(base_dir);
    if !static_dir.is_dir() {
        log_warn!("Static directory {} does not exist", static_dir.display());
    }

    let game = SharedGame::new();
    web_server::run_web_server(game, config.socket_addr()?, &static_dir).await?;

    log!("Server shut down gracefully");

    Ok(())
}
