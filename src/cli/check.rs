//! `check` command: show the effective (validated) configuration.

use anyhow::Result;
use urlmount::{config::MountConfig, log, normalize_base_assets, normalize_base_server};

/// Report the effective bases. Validation already ran in `load_config`.
pub fn run_check(config: &MountConfig) -> Result<()> {
    let source = if config.has_file() {
        config.config_path.display().to_string()
    } else {
        "defaults (no config file)".to_string()
    };
    log!("check"; "config: {}", source);

    for line in summary_lines(config) {
        log!("check"; "{}", line);
    }
    log!("check"; "ok");
    Ok(())
}

fn summary_lines(config: &MountConfig) -> Vec<String> {
    let server = config.base_server();
    let assets = config
        .base_assets()
        .map_or_else(|| "-".to_string(), |assets| format!("{assets} (normalized {})", normalize_base_assets(assets)));
    let document_base = config
        .document_base()
        .map_or_else(|| "-".to_string(), |url| url.to_string());

    vec![
        format!("base.server            {server} (normalized {})", normalize_base_server(server)),
        format!("base.assets            {assets}"),
        format!("resolve.document_base  {document_base}"),
    ]
}
