//! `parse` command: decompose URLs and print the result.

use std::fmt::Write as _;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use urlmount::{ParsedUrl, UrlKind, UrlParser, config::MountConfig, debug, log};

use super::{ParseArgs, plural_s};

/// Decompose every URL in `args`, skipping (and reporting) unparsable ones.
pub fn run_parse(args: &ParseArgs, config: &MountConfig) -> Result<()> {
    let document_base = config.document_base();
    let mut parser = UrlParser::new(config.base_server());
    if let Some(base) = &document_base {
        parser = parser.with_document_base(base);
    }

    let mut results = Vec::with_capacity(args.urls.len());
    let mut skipped = 0;
    for url in &args.urls {
        let kind = UrlKind::parse(url);
        if !kind.is_parsable() {
            log!("error"; "cannot parse `{}`: expected `/`, `http`, `.`, `?`, `#` or an empty string", url);
            skipped += 1;
            continue;
        }
        debug!("parse"; "{:?}", kind);
        results.push(parser.parse(url));
    }

    if args.json {
        let formatted = if args.pretty {
            serde_json::to_string_pretty(&results)?
        } else {
            serde_json::to_string(&results)?
        };
        println!("{}", formatted);
    } else {
        for parsed in &results {
            print!("{}", format_parsed(parsed, config.base_server()));
        }
    }

    if skipped > 0 {
        bail!("{} url{} could not be parsed", skipped, plural_s(skipped));
    }
    Ok(())
}

/// Readable multi-line summary of a decomposition.
fn format_parsed(parsed: &ParsedUrl, base_server: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", parsed.to_original().bold());

    let base = if parsed.has_base_server {
        format!("{} ({base_server})", "matched".green())
    } else {
        format!("{} ({base_server})", "not matched".yellow())
    };
    let rows = [
        ("origin", parsed.origin.clone().unwrap_or_else(|| "-".into())),
        ("pathname", parsed.pathname.clone()),
        ("base", base),
        ("search", format_search(parsed)),
        ("hash", dash_if_empty(&parsed.hash)),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<10}{}", label.dimmed(), value);
    }
    out
}

/// `key=value` pairs sorted by key, every value of repeated keys included.
fn format_search(parsed: &ParsedUrl) -> String {
    let mut keys: Vec<_> = parsed.search_all.keys().collect();
    keys.sort();
    let pairs: Vec<String> = keys
        .into_iter()
        .flat_map(|key| {
            parsed
                .search_values(key)
                .iter()
                .map(move |value| format!("{key}={value}"))
        })
        .collect();
    dash_if_empty(&pairs.join(" "))
}

fn dash_if_empty(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
