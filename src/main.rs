use anyhow::Context;
use clap::Parser;
use counter_tui::config::Config;
use counter_tui::logging::init_tracing;
use counter_tui::shutdown::ShutdownHandle;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "counter-tui", version, about = "Increment and decrement a counter in the terminal")]
struct Cli {
    /// Path to the config file (default: <config dir>/counter-tui/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable logging with this filter directive (e.g. "debug")
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Enable logging to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = apply_cli_overrides(config, &cli);

    init_tracing(&config.logging)?;
    tracing::info!(config = %config_path.display(), "starting counter-tui");

    let shutdown = ShutdownHandle::new();
    shutdown
        .register_signals()
        .context("Failed to register signal handlers")?;

    counter_tui::ui::run(&config, shutdown).context("Terminal UI failed")?;
    Ok(())
}

fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(level) = &cli.log_level {
        config.logging.enabled = true;
        config.logging.level = level.clone();
    }
    if let Some(file) = &cli.log_file {
        config.logging.enabled = true;
        config.logging.file = Some(file.clone());
    }
    config
}
