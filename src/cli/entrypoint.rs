//! Startup sequence shared by the binary.
//!
//! Order matters: pre-scan first (it may veto the global config file),
//! then the config-file loader, then the primary parse so command-line
//! values override file values. The finished `Config` is returned by
//! value; from that point on nothing mutates it.

use crate::cli::catalog::default_catalog;
use crate::cli::help;
use crate::cli::parser::{parse_args, ParseOutcome};
use crate::cli::prescan::{prescan, PrescanOutcome};
use crate::cli::scanner::OptScanner;
use crate::config::Config;
use crate::debug_log;
use crate::global_config::GlobalConfig;

/// Run the full startup sequence and hand back the frozen configuration.
/// Short-circuit paths (help, version, storage, any grammar error) exit
/// the process directly.
pub fn run() -> std::io::Result<Config> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let catalog = default_catalog();
    let mut scanner = OptScanner::new(catalog, &args);

    let pre = match prescan(&mut scanner) {
        PrescanOutcome::Ready(pre) => pre,
        PrescanOutcome::Exit(code) => std::process::exit(code),
    };

    let mut config = Config {
        load_global_config: pre.load_global_config,
        ..Config::default()
    };
    if pre.load_global_config {
        GlobalConfig::load(pre.config_file.as_deref()).apply(&mut config);
    }
    config.config_file = pre.config_file;

    let config = match parse_args(&mut scanner, config) {
        ParseOutcome::Ready(config) => config,
        ParseOutcome::Exit(code) => std::process::exit(code),
    };

    // No log file and nothing piped in: there is nothing to analyze.
    if config.log_file.is_none() && atty::is(atty::Stream::Stdin) {
        println!("{}", help::usage(catalog.features()));
        std::process::exit(1);
    }

    if debug_log::is_open() {
        debug_log::write_line("startup configuration loaded");
    }

    Ok(config)
}
