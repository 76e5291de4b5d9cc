//! Command-line interface module.

mod args;
pub mod check;
pub mod parse;
pub mod prepend;

pub use args::{Cli, Commands, ParseArgs, PrependArgs};

use anyhow::{Context, Result};
use urlmount::{config::MountConfig, debug, is_base_assets};

/// Load the configuration, apply command-line overrides, and validate once.
pub fn load_config(cli: &Cli) -> Result<MountConfig> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let mut config = MountConfig::discover(&cli.config, &cwd)?;

    apply_command_options(&mut config, &cli.command);
    debug!("config"; "base.server = {:?}, base.assets = {:?}, resolve.document_base = {:?}",
        config.base.server, config.base.assets, config.resolve.document_base);

    config.validate()?;
    Ok(config)
}

/// Apply command-specific configuration overrides.
fn apply_command_options(config: &mut MountConfig, command: &Commands) {
    match command {
        Commands::Parse { args } => {
            update_option(&mut config.base.server, args.base.as_ref());
            if args.document_base.is_some() {
                config.resolve.document_base = args.document_base.clone();
            }
        }
        Commands::Prepend { args } => match &args.base {
            Some(base) if is_base_assets(base) => config.base.assets = Some(base.clone()),
            base => update_option(&mut config.base.server, base.as_ref()),
        },
        Commands::Check => {}
    }
}

/// Update config option if CLI value is provided.
fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
    if let Some(option) = cli_option {
        *config_option = option.clone();
    }
}

/// `s` suffix for counts other than one.
pub(crate) fn plural_s(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn command(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("urlmount").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_parse_overrides() {
        let mut config = MountConfig::default();
        apply_command_options(
            &mut config,
            &command(&["parse", "/", "-b", "/app/", "-d", "https://example.com/app/"]),
        );
        assert_eq!(config.base.server, "/app/");
        assert_eq!(
            config.resolve.document_base.as_deref(),
            Some("https://example.com/app/")
        );
    }

    #[test]
    fn test_parse_without_overrides_keeps_config() {
        let mut config = MountConfig::default();
        config.base.server = "/docs/".to_string();
        apply_command_options(&mut config, &command(&["parse", "/"]));
        assert_eq!(config.base.server, "/docs/");
        assert!(config.resolve.document_base.is_none());
    }

    #[test]
    fn test_prepend_asset_override() {
        let mut config = MountConfig::default();
        apply_command_options(
            &mut config,
            &command(&["prepend", "/img.png", "-b", "https://cdn.example.com/"]),
        );
        assert_eq!(config.base.server, "/");
        assert_eq!(config.base.assets.as_deref(), Some("https://cdn.example.com/"));
    }

    #[test]
    fn test_prepend_server_override() {
        let mut config = MountConfig::default();
        apply_command_options(&mut config, &command(&["prepend", "/about", "-b", "/app"]));
        assert_eq!(config.base.server, "/app");
        assert!(config.base.assets.is_none());
    }

    #[test]
    fn test_plural_s() {
        assert_eq!(plural_s(0), "s");
        assert_eq!(plural_s(1), "");
        assert_eq!(plural_s(2), "s");
    }
}
