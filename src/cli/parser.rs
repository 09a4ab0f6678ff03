//! Primary parse phase: the full pass that populates the configuration
//! store.
//!
//! Dispatches every decoded occurrence on its descriptor tag. Help,
//! version, and storage display short-circuit the startup sequence; help
//! exits with a failure status, matching the no-arguments and bad-token
//! termination paths.

use std::path::PathBuf;

use crate::cli::catalog::OptId;
use crate::cli::help;
use crate::cli::scanner::{OptScanner, ScanEvent};
use crate::config::Config;
use crate::debug_log;
use crate::storage;
use crate::types::Compression;
use crate::unescape::unescape_str;

/// Outcome of the primary parse phase.
#[derive(Debug, PartialEq)]
pub enum ParseOutcome {
    /// Parsing finished; the frozen configuration is handed to the caller.
    Ready(Config),
    /// The process must terminate with this status.
    Exit(i32),
}

/// C-style permissive integer conversion: optional sign, leading digits,
/// zero on anything else. Numeric tuning knobs keep this behavior on
/// purpose; deeper validation belongs to the consuming subsystems.
fn atoi(raw: &str) -> i32 {
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let mut value: i64 = 0;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        value = value.saturating_mul(10).saturating_add(i64::from(d));
        if value > i64::from(i32::MAX) {
            value = i64::from(i32::MAX);
            break;
        }
    }
    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Drive the scanner to exhaustion, mutating `config` per match. Takes the
/// store by value and returns it frozen inside `ParseOutcome::Ready`.
pub fn parse_args(scanner: &mut OptScanner, mut config: Config) -> ParseOutcome {
    loop {
        match scanner.next() {
            ScanEvent::Opt(id, value) => {
                // Value-taking descriptors always arrive with Some(_);
                // the scanner rejects them otherwise.
                let value = value.unwrap_or_default();
                match id {
                    OptId::Help => {
                        println!("{}", help::usage(scanner.catalog().features()));
                        return ParseOutcome::Exit(1);
                    }
                    OptId::Version => {
                        println!("{}", help::version());
                        return ParseOutcome::Exit(0);
                    }
                    OptId::Storage => {
                        println!(
                            "storage: {}",
                            storage::active_storage(scanner.catalog().features())
                        );
                        return ParseOutcome::Exit(0);
                    }

                    // Consumed by the pre-scan; nothing to do here.
                    OptId::ConfigFile | OptId::NoGlobalConfig => {}

                    OptId::LogFile => config.log_file = Some(PathBuf::from(value)),
                    OptId::OutputFormat => config.output_format = Some(value),
                    OptId::ColorScheme => config.color_scheme = atoi(&value),
                    OptId::DateFormat => config.date_format = Some(unescape_str(&value)),
                    OptId::LogFormat => config.log_format = Some(unescape_str(&value)),

                    OptId::AgentList => config.list_agents = true,
                    OptId::ConfigDialog => config.config_dialog = true,
                    OptId::NoQueryString => config.ignore_query_string = true,
                    OptId::NoTermResolver => config.skip_term_resolver = true,
                    OptId::WithOutputResolver => config.enable_html_resolver = true,
                    OptId::WithMouse => config.mouse_support = true,
                    OptId::HttpMethod => config.append_method = true,
                    OptId::HttpProtocol => config.append_protocol = true,
                    OptId::RealOs => config.real_os = true,
                    OptId::IgnoreCrawlers => config.ignore_crawlers = true,
                    OptId::Code444As404 => config.code444_as_404 = true,
                    OptId::ClientErr4xxToUnique => config.client_err_to_unique_count = true,
                    OptId::NoColor => config.no_color = true,
                    OptId::NoProgress => config.no_progress = true,

                    OptId::ExcludeIp => config.exclude_ips.push(value),
                    OptId::IgnoreReferer => config.ignore_referers.push(value),
                    OptId::SortView => config.sort_views.push(value),
                    OptId::StaticFile => config.push_static_file(value),

                    OptId::DebugFile => {
                        let path = PathBuf::from(value);
                        if let Err(err) = debug_log::open(&path) {
                            eprintln!("[weblens] {err:#}");
                            return ParseOutcome::Exit(1);
                        }
                        config.debug_log_file = Some(path);
                    }

                    OptId::StdGeoip => config.geoip_mode = crate::types::GeoIpMode::Standard,
                    OptId::GeoipCityData => config.geoip_city_data = Some(PathBuf::from(value)),

                    OptId::DbPath => config.db_path = PathBuf::from(value),
                    OptId::Xmmap => config.xmmap = atoi(&value),
                    OptId::CacheLcnum => config.cache_lcnum = atoi(&value),
                    OptId::CacheNcnum => config.cache_ncnum = atoi(&value),
                    OptId::TuneLmemb => config.tune_lmemb = atoi(&value),
                    OptId::TuneNmemb => config.tune_nmemb = atoi(&value),
                    OptId::TuneBnum => config.tune_bnum = atoi(&value),
                    OptId::KeepDbFiles => config.keep_db_files = true,
                    OptId::LoadFromDisk => config.load_from_disk = true,
                    OptId::Compression => match value.as_str() {
                        "zlib" => config.compression = Some(Compression::Zlib),
                        "bz2" => config.compression = Some(Compression::Bz2),
                        // Unknown codec: leave the field at its default.
                        _ => {}
                    },
                }
            }
            ScanEvent::Bad(bad) => {
                eprintln!("[weblens] {}", bad.describe(scanner.catalog()));
                return ParseOutcome::Exit(1);
            }
            ScanEvent::End => break,
        }
    }

    if !scanner.positionals().is_empty() {
        println!("{}", help::usage(scanner.catalog().features()));
        return ParseOutcome::Exit(1);
    }

    ParseOutcome::Ready(config)
}
