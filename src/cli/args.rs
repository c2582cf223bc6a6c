//! `popchip` command line.

use clap::{ColorChoice, Parser, Subcommand, ValueHint};
use std::net::IpAddr;
use std::path::PathBuf;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "popchip.toml";

/// Build and preview The Pop and Chip Shop landing page
#[derive(Parser, Debug, Clone)]
#[command(version, about, arg_required_else_help = true)]
pub struct Cli {
    /// When to color log prefixes
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Where the site is written, relative to the project root [default: public]
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Project config, searched for upward from the current directory
    #[arg(short = 'C', long, default_value = DEFAULT_CONFIG, value_hint = ValueHint::FilePath)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render index.html, the stylesheet and nav script, and copy assets
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Build, then preview the site over HTTP until Ctrl+C
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        #[command(flatten)]
        serve_args: ServeArgs,
    },

    /// Print the product catalog as JSON
    #[command(visible_alias = "m")]
    Menu {
        #[command(flatten)]
        args: MenuArgs,
    },

    /// Check section anchors, in-page links and asset references of the built page
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

/// Flags shared by `build` and `serve`.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Delete the output directory first
    #[arg(short, long)]
    pub clean: bool,

    /// Minify site.css, nav.js and copied .css/.js assets [default: true]
    #[arg(
        short,
        long,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub minify: Option<bool>,

    /// Also print debug messages
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Where the preview server listens; overrides `[serve]`.
#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind; 0.0.0.0 lets phones on the LAN open the preview
    #[arg(short, long)]
    pub interface: Option<IpAddr>,

    /// First port to try [default: 5277]
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct MenuArgs {
    /// Indent the JSON
    #[arg(short, long)]
    pub pretty: bool,

    /// Write the JSON to this file instead of stdout
    #[arg(short = 'f', long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Print problems but exit successfully
    #[arg(short = 'w', long)]
    pub warn_only: bool,
}
