//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, Overrides, Settings};

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load(&config_path)?;

    // Flag > environment > config section > default
    let overrides = Overrides {
        host: cli.host,
        account_switch_key: cli.account_switch_key,
        output_format: cli.output,
    };
    let settings = Settings::resolve(
        overrides,
        &config.section(&cli.section),
        |name| std::env::var(name).ok(),
    );

    let ctx = commands::Context {
        output_format: settings.output_format,
        settings,
        config_path,
        section: cli.section,
    };
    tracing::debug!(section = %ctx.section, host = ?ctx.settings.host, "resolved settings");

    // Dispatch to appropriate command
    match cli.command {
        Commands::Get(args) => commands::get::execute(ctx, args).await,
        Commands::Search(args) => commands::search::execute(ctx, args).await,
        Commands::Sync(args) => commands::sync::execute(ctx, args).await,
        Commands::Items(args) => commands::items::execute(ctx, args).await,
        Commands::Create(args) => commands::create::execute(ctx, args).await,
        Commands::Activate(args) => commands::activate::execute(ctx, args).await,
        Commands::Delete(args) => commands::delete::execute(ctx, args).await,
        Commands::Notification(args) => commands::notification::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Log to stderr, `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
