//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;
use urlmount::config::CONFIG_FILE;

/// Inspect URL decomposition and base-path mounting
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: urlmount.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Decompose URLs into origin, pathname, query and hash
    #[command(visible_alias = "p")]
    Parse {
        #[command(flatten)]
        args: ParseArgs,
    },

    /// Mount root-relative paths under the base path or asset origin
    #[command(visible_alias = "m")]
    Prepend {
        #[command(flatten)]
        args: PrependArgs,
    },

    /// Validate the configuration and show the effective bases
    #[command(visible_alias = "c")]
    Check,
}

/// Parse command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ParseArgs {
    /// URLs to decompose (`/path`, `https://host/path`, `./rel`, `?query`, `#hash`)
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Override the server base path (`base.server`)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Override the document base used for relative URLs (`resolve.document_base`)
    #[arg(short, long = "document-base", value_hint = clap::ValueHint::Url)]
    pub document_base: Option<String>,

    /// Print JSON instead of a readable summary
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,
}

/// Prepend command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PrependArgs {
    /// Root-relative paths to mount (`/about`, `/img/logo.png`)
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Override the base: a path (`/app/`) or an asset origin (`https://cdn.example.com/`)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Mount under `base.assets` instead of `base.server`
    #[arg(short, long)]
    pub assets: bool,
}
