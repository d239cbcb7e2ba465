use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::info;

use perth_containers::chat::{self, ChatOptions};
use perth_containers::constants;
use perth_containers::map::MapRenderer;
use perth_containers::report;
use perth_containers::{Catalog, ChatGateway, GatewayConfig};

// Define the command-line interface structure using clap
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Chat with the Perth container finder assistant.
    Chat {
        #[command(flatten)]
        api: ApiArgs,
        #[arg(long, default_value_t = constants::DEFAULT_TYPING_DELAY_MS, help = "Delay between printed reply characters, 0 to disable.")]
        typing_delay_ms: u64,
        #[arg(long, default_value = ".", help = "Directory the 'map' command writes into.")]
        map_dir: PathBuf,
    },
    /// Write the interactive collection map to an HTML file.
    Map {
        #[arg(short, long, help = "Output file. Defaults to a timestamped name in the current directory.")]
        output: Option<PathBuf>,
    },
    /// Print collection point and hotspot statistics.
    Stats,
    /// List the densest litter hotspots and the main collection points.
    Hotspots {
        #[arg(long, default_value_t = report::RECOMMENDED_HOTSPOTS, help = "Number of hotspots to list.")]
        limit: usize,
    },
}

#[derive(clap::Args, Debug)]
struct ApiArgs {
    #[arg(long, env = "CONTAINER_API_URL", default_value = constants::DEFAULT_API_URL, help = "Chat-completion endpoint URL.")]
    api_url: String,
    #[arg(long, env = "CONTAINER_API_KEY", default_value = "", hide_env_values = true, hide_default_value = true, help = "Bearer token for the endpoint.")]
    api_key: String,
    #[arg(long, env = "CONTAINER_MODEL", default_value = constants::DEFAULT_MODEL, help = "Model name sent with each request.")]
    model: String,
    #[arg(long, default_value_t = constants::DEFAULT_TIMEOUT_SECS, help = "Request timeout in seconds, 0 to wait forever.")]
    timeout_secs: u64,
}

impl ApiArgs {
    fn into_config(self) -> GatewayConfig {
        GatewayConfig {
            api_url: self.api_url,
            api_key: self.api_key,
            model: self.model,
            timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
            ..GatewayConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (for CONTAINER_API_KEY and friends)
    dotenvy::dotenv().ok();
    perth_containers::init_tracing();

    let cli = Cli::parse();
    info!("Starting with command: {:?}", cli.command);

    let catalog = Catalog::perth();

    match cli.command {
        Commands::Chat {
            api,
            typing_delay_ms,
            map_dir,
        } => {
            let gateway = ChatGateway::new(api.into_config(), catalog)
                .context("Failed to initialize chat gateway")?;
            let options = ChatOptions {
                typing_delay: Duration::from_millis(typing_delay_ms),
                map_dir,
            };
            chat::run_chat(gateway, options)
                .await
                .context("Chat session failed")?;
        }
        Commands::Map { output } => {
            let renderer = MapRenderer::new().context("Failed to load map templates")?;
            let path = match output {
                Some(path) => {
                    renderer.save(&catalog, &path)?;
                    path
                }
                None => renderer.save_timestamped(&catalog, &PathBuf::from("."), Local::now().naive_local())?,
            };
            println!("✅ Map saved as: {}", path.display());
        }
        Commands::Stats => {
            print!("{}", report::chat_stats(&catalog));
        }
        Commands::Hotspots { limit } => {
            print!("{}", report::top_recommendations(&catalog, limit));
        }
    }

    Ok(())
}
