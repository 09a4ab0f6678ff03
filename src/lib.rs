//! # weblens
//!
//! Startup and configuration core of the weblens terminal web-access-log
//! analyzer. It turns the raw command-line token list plus an optional
//! global configuration file into one frozen [`config::Config`] value that
//! the rest of the application (log parser, storage engine, dashboard)
//! consumes read-only.
//!
//! ## How startup works
//!
//! ```rust
//! use weblens::cli::{Catalog, Features, OptScanner, parse_args, prescan};
//! use weblens::cli::{ParseOutcome, PrescanOutcome};
//! use weblens::config::Config;
//!
//! let catalog = Catalog::assemble(&Features::default());
//! let args: Vec<String> = vec!["-f".into(), "access.log".into()];
//! let mut scanner = OptScanner::new(&catalog, &args);
//!
//! // Pass 1: config-file decision only. Rewinds the cursor on success.
//! let pre = match prescan(&mut scanner) {
//!     PrescanOutcome::Ready(pre) => pre,
//!     PrescanOutcome::Exit(code) => std::process::exit(code),
//! };
//!
//! // (The global config file would be loaded here, gated by `pre`.)
//!
//! // Pass 2: populate the store.
//! let config = match parse_args(&mut scanner, Config::default()) {
//!     ParseOutcome::Ready(config) => config,
//!     ParseOutcome::Exit(code) => std::process::exit(code),
//! };
//! assert_eq!(config.log_file.as_deref(), Some(std::path::Path::new("access.log")));
//! ```

pub mod cli;
pub mod config;
pub mod debug_log;
pub mod global_config;
pub mod storage;
pub mod types;
pub mod unescape;

pub use config::Config;
pub use types::{Compression, GeoIpMode};
