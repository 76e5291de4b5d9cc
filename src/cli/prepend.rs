//! `prepend` command: mount root-relative paths under a base.

use anyhow::{Context, Result, bail};
use urlmount::{config::MountConfig, debug, is_base_assets, log, prepend_base};

use super::{PrependArgs, plural_s};

/// Print every path in `args` mounted under the selected base.
pub fn run_prepend(args: &PrependArgs, config: &MountConfig) -> Result<()> {
    let base = select_base(args, config)?;
    debug!("prepend"; "base: {}", base);

    let mut skipped = 0;
    for path in &args.paths {
        if !path.starts_with('/') {
            log!("error"; "cannot mount `{}`: path must start with `/`", path);
            skipped += 1;
            continue;
        }
        println!("{}", prepend_base(path, base));
    }

    if skipped > 0 {
        bail!("{} path{} could not be mounted", skipped, plural_s(skipped));
    }
    Ok(())
}

/// The asset origin when requested (or given on the command line), else the server base.
fn select_base<'a>(args: &PrependArgs, config: &'a MountConfig) -> Result<&'a str> {
    let use_assets = args.assets || args.base.as_deref().is_some_and(is_base_assets);
    if use_assets {
        config
            .base_assets()
            .context("no asset base configured; set `base.assets` or pass `--base https://...`")
    } else {
        Ok(config.base_server())
    }
}
