// Standalone map program: prints a summary, writes the litter and cash
// collection map, then prints the top collection recommendations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use perth_containers::map::{MapRenderer, DEFAULT_MAP_FILENAME};
use perth_containers::report;
use perth_containers::Catalog;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the Perth container litter and cash collection map", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = DEFAULT_MAP_FILENAME, help = "Where to write the map page.")]
    output: PathBuf,
    #[arg(long, default_value_t = report::RECOMMENDED_HOTSPOTS, help = "Number of hotspots to recommend.")]
    top: usize,
}

fn main() -> Result<()> {
    perth_containers::init_tracing();
    let cli = Cli::parse();

    let catalog = Catalog::perth();
    let renderer = MapRenderer::new().context("Failed to load map templates")?;

    println!("{}", report::map_summary(&catalog));

    renderer
        .save(&catalog, &cli.output)
        .with_context(|| format!("Failed to save map to {:?}", cli.output))?;
    println!("Container litter and cash collection map saved as {}", cli.output.display());

    print!("{}", report::top_recommendations(&catalog, cli.top));
    Ok(())
}
