use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use wonderfluff::catalog::{CatalogStore, PuppyRepository};
use wonderfluff::config::Config;
use wonderfluff::logging::init_tracing;
use wonderfluff::ui::app::{App, AppSettings};
use wonderfluff::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "wonderfluff", version, about = "Browse and adopt puppies in your terminal")]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Shuffle the puppy list reproducibly with this seed
    #[arg(long)]
    seed: Option<u64>,

    /// Open a destination on start, e.g. `puppyDetail/7`
    #[arg(long, value_name = "PATH")]
    open: Option<String>,

    /// Print the catalog as `id<TAB>name` lines and exit
    #[arg(long)]
    print_catalog: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = init_tracing() {
        tracing::info!(path = %path.display(), "Logging to file");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::info!(?config, "Config loaded");

    let store = CatalogStore::new();
    if cli.print_catalog {
        for puppy in store.list_all() {
            println!("{}\t{}", puppy.id, puppy.name);
        }
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let _guard = runtime.enter();

    let settings = AppSettings::from_config(&config, cli.seed);
    let mut app = App::new(Arc::new(store), settings);
    if let Some(path) = &cli.open {
        app.navigate_to_path(path)
            .with_context(|| format!("Cannot open '{}'", path))?;
    }

    runtime::run(&mut app).context("Terminal UI failed")?;
    tracing::info!("Exiting");
    Ok(())
}
