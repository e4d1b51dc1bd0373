//! Logging setup for the folio CLI.
//!
//! Logs go to stderr so that commands printing generated source (`synth`,
//! `build --dry-run`) keep stdout clean.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "folio=debug,folio_loader=debug,folio_manifest=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "folio=info,folio_loader=info";

/// Initialize the global tracing subscriber.
///
/// `verbose` wins over `quiet`. Without either flag `RUST_LOG` is honored,
/// falling back to info level for folio's own crates.
pub fn init_logger(verbose: bool, quiet: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .compact();

    // A second initialization (e.g. from tests) is not an error worth failing on.
    let _ = tracing_subscriber::registry()
        .with(filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

fn filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
