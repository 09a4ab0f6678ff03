//! Command-line startup core.
//!
//! Argument handling runs in two passes over the same token list:
//!
//! 1. [`prescan`] decides whether the global configuration file is loaded
//!    and captures an explicit config path, nothing else.
//! 2. [`parser`] re-scans from the start and populates the configuration
//!    store, handling the help/version/storage short-circuits.
//!
//! Both passes share one [`scanner::OptScanner`] driven over the
//! [`catalog::Catalog`] of recognized descriptors.

pub mod catalog;
pub mod entrypoint;
pub mod help;
pub mod parser;
pub mod prescan;
pub mod scanner;

pub use catalog::{ArgMode, Catalog, Features, OptId, OptSpec};
pub use parser::{parse_args, ParseOutcome};
pub use prescan::{prescan, Prescan, PrescanOutcome};
pub use scanner::{BadToken, OptScanner, ScanEvent};
