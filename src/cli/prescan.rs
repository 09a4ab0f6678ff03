//! Pre-scan phase: the restricted first pass over the argument list.
//!
//! Runs before any heavier initialization and decides exactly one thing:
//! whether the global configuration file is loaded, and from which path.
//! Every other match is ignored; grammar errors are fatal here and are
//! never deferred to the primary parse.

use std::path::PathBuf;

use crate::cli::catalog::OptId;
use crate::cli::help;
use crate::cli::scanner::{OptScanner, ScanEvent};

/// What the pre-scan decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prescan {
    /// Load the global configuration file. Defaults to true; cleared by
    /// `--no-global-config` regardless of flag order.
    pub load_global_config: bool,
    /// Explicit configuration file path from `-p`/`--config-file`.
    pub config_file: Option<PathBuf>,
}

impl Default for Prescan {
    fn default() -> Self {
        Self {
            load_global_config: true,
            config_file: None,
        }
    }
}

/// Outcome of the pre-scan phase.
#[derive(Debug, PartialEq, Eq)]
pub enum PrescanOutcome {
    /// Pre-scan finished; the scanner cursor is back at the start for
    /// the primary parse.
    Ready(Prescan),
    /// The process must terminate with this status.
    Exit(i32),
}

/// Drive the scanner to exhaustion, recording only the config-file
/// decision.
pub fn prescan(scanner: &mut OptScanner) -> PrescanOutcome {
    let mut pre = Prescan::default();

    loop {
        match scanner.next() {
            ScanEvent::Opt(OptId::ConfigFile, Some(path)) => {
                pre.config_file = Some(PathBuf::from(path));
            }
            ScanEvent::Opt(OptId::NoGlobalConfig, _) => {
                pre.load_global_config = false;
            }
            ScanEvent::Opt(..) => {}
            ScanEvent::Bad(bad) => {
                eprintln!("[weblens] {}", bad.describe(scanner.catalog()));
                return PrescanOutcome::Exit(1);
            }
            ScanEvent::End => break,
        }
    }

    if !scanner.positionals().is_empty() {
        println!("{}", help::usage(scanner.catalog().features()));
        return PrescanOutcome::Exit(1);
    }

    // Same scanner, same argument list: the primary parse re-scans from
    // the start.
    scanner.rewind();
    PrescanOutcome::Ready(pre)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::catalog::{Catalog, Features};

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn run(tokens: &[&str]) -> PrescanOutcome {
        let catalog = Catalog::assemble(&Features::default());
        let argv = args(tokens);
        let mut scanner = OptScanner::new(&catalog, &argv);
        prescan(&mut scanner)
    }

    #[test]
    fn defaults_to_loading_global_config() {
        match run(&["-f", "access.log"]) {
            PrescanOutcome::Ready(pre) => {
                assert!(pre.load_global_config);
                assert!(pre.config_file.is_none());
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn captures_explicit_config_path() {
        match run(&["-p", "custom.toml", "-f", "access.log"]) {
            PrescanOutcome::Ready(pre) => {
                assert_eq!(pre.config_file, Some(PathBuf::from("custom.toml")));
                assert!(pre.load_global_config);
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn disable_wins_regardless_of_order() {
        for tokens in [
            &["--no-global-config", "-p", "custom.toml"][..],
            &["-p", "custom.toml", "--no-global-config"][..],
        ] {
            match run(tokens) {
                PrescanOutcome::Ready(pre) => {
                    assert!(!pre.load_global_config);
                    assert_eq!(pre.config_file, Some(PathBuf::from("custom.toml")));
                }
                other => panic!("expected Ready, got {other:?}"),
            }
        }
    }

    #[test]
    fn bad_token_exits_immediately() {
        assert_eq!(run(&["--not-a-real-option"]), PrescanOutcome::Exit(1));
        assert_eq!(run(&["-z"]), PrescanOutcome::Exit(1));
        assert_eq!(run(&["--log-file"]), PrescanOutcome::Exit(1));
    }

    #[test]
    fn leftover_positional_exits() {
        assert_eq!(
            run(&["-f", "access.log", "extra_token"]),
            PrescanOutcome::Exit(1)
        );
    }

    #[test]
    fn cursor_is_rewound_on_success() {
        let catalog = Catalog::assemble(&Features::default());
        let argv = args(&["-f", "access.log"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert!(matches!(prescan(&mut scanner), PrescanOutcome::Ready(_)));
        // The primary parse must see the full list again.
        assert!(matches!(scanner.next(), ScanEvent::Opt(OptId::LogFile, _)));
    }
}
