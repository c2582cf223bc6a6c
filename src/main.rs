use anyhow::Result;
use clap::{ColorChoice, Parser};
use popchip::cli::{self, Cli, Commands};
use popchip::config::SiteConfig;
use std::sync::Arc;

fn main() -> Result<()> {
    // Before anything that can block
    popchip::core::install_ctrlc()?;

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    let config = Arc::new(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config, false).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve_site(config),
        Commands::Menu { args } => cli::menu::run(args),
        Commands::Validate { args } => cli::validate::validate_site(&config, args),
    }
}
