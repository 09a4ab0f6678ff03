//! Option catalog: the registry of every flag the scanner can decode.
//!
//! The catalog is assembled once per process from a base set of descriptors
//! plus capability-gated groups (GeoIP, on-disk storage, debug logging).
//! Gating happens at assembly time rather than with `#[cfg]` blocks so the
//! same binary can vary its option surface by configuration.

use once_cell::sync::Lazy;

/// Identity tag carried by every descriptor. The parser dispatches on this
/// instead of re-comparing option names as strings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OptId {
    AgentList,
    ConfigDialog,
    ConfigFile,
    ExcludeIp,
    Help,
    HttpMethod,
    HttpProtocol,
    LogFile,
    Version,
    DebugFile,
    Code444As404,
    ClientErr4xxToUnique,
    ColorScheme,
    DateFormat,
    IgnoreCrawlers,
    IgnoreReferer,
    LogFormat,
    SortView,
    NoColor,
    NoGlobalConfig,
    NoProgress,
    NoQueryString,
    NoTermResolver,
    OutputFormat,
    RealOs,
    StaticFile,
    Storage,
    WithMouse,
    WithOutputResolver,
    StdGeoip,
    GeoipCityData,
    CacheLcnum,
    CacheNcnum,
    Compression,
    DbPath,
    KeepDbFiles,
    LoadFromDisk,
    TuneBnum,
    TuneLmemb,
    TuneNmemb,
    Xmmap,
}

/// Whether a descriptor takes a value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArgMode {
    None,
    Required,
}

/// One recognized flag: long name, optional short code, arity.
#[derive(Clone, Copy, Debug)]
pub struct OptSpec {
    pub id: OptId,
    pub long: &'static str,
    pub short: Option<char>,
    pub arg: ArgMode,
}

const fn spec(id: OptId, long: &'static str, short: Option<char>, arg: ArgMode) -> OptSpec {
    OptSpec {
        id,
        long,
        short,
        arg,
    }
}

/// Descriptors present in every build.
const BASE_SPECS: &[OptSpec] = &[
    spec(OptId::AgentList, "agent-list", Some('a'), ArgMode::None),
    spec(OptId::ConfigDialog, "config-dialog", Some('c'), ArgMode::None),
    spec(OptId::ConfigFile, "config-file", Some('p'), ArgMode::Required),
    spec(OptId::ExcludeIp, "exclude-ip", Some('e'), ArgMode::Required),
    spec(OptId::Help, "help", Some('h'), ArgMode::None),
    spec(OptId::HttpMethod, "http-method", Some('M'), ArgMode::None),
    spec(OptId::HttpProtocol, "http-protocol", Some('H'), ArgMode::None),
    spec(OptId::LogFile, "log-file", Some('f'), ArgMode::Required),
    spec(OptId::Version, "version", Some('V'), ArgMode::None),
    spec(OptId::Code444As404, "444-as-404", None, ArgMode::None),
    spec(
        OptId::ClientErr4xxToUnique,
        "4xx-to-unique-count",
        None,
        ArgMode::None,
    ),
    spec(OptId::ColorScheme, "color-scheme", None, ArgMode::Required),
    spec(OptId::DateFormat, "date-format", None, ArgMode::Required),
    spec(OptId::IgnoreCrawlers, "ignore-crawlers", None, ArgMode::None),
    spec(
        OptId::IgnoreReferer,
        "ignore-referer",
        None,
        ArgMode::Required,
    ),
    spec(OptId::LogFormat, "log-format", None, ArgMode::Required),
    spec(OptId::SortView, "sort-view", None, ArgMode::Required),
    spec(OptId::NoColor, "no-color", None, ArgMode::None),
    spec(
        OptId::NoGlobalConfig,
        "no-global-config",
        None,
        ArgMode::None,
    ),
    spec(OptId::NoProgress, "no-progress", None, ArgMode::None),
    spec(
        OptId::NoQueryString,
        "no-query-string",
        Some('q'),
        ArgMode::None,
    ),
    spec(
        OptId::NoTermResolver,
        "no-term-resolver",
        Some('r'),
        ArgMode::None,
    ),
    spec(
        OptId::OutputFormat,
        "output-format",
        Some('o'),
        ArgMode::Required,
    ),
    spec(OptId::RealOs, "real-os", None, ArgMode::None),
    spec(OptId::StaticFile, "static-file", None, ArgMode::Required),
    spec(OptId::Storage, "storage", Some('s'), ArgMode::None),
    spec(OptId::WithMouse, "with-mouse", Some('m'), ArgMode::None),
    spec(
        OptId::WithOutputResolver,
        "with-output-resolver",
        Some('d'),
        ArgMode::None,
    ),
];

const GEOIP_SPECS: &[OptSpec] = &[
    spec(OptId::StdGeoip, "std-geoip", Some('g'), ArgMode::None),
    spec(
        OptId::GeoipCityData,
        "geoip-city-data",
        None,
        ArgMode::Required,
    ),
];

const DISK_STORAGE_SPECS: &[OptSpec] = &[
    spec(OptId::CacheLcnum, "cache-lcnum", None, ArgMode::Required),
    spec(OptId::CacheNcnum, "cache-ncnum", None, ArgMode::Required),
    spec(OptId::Compression, "compression", None, ArgMode::Required),
    spec(OptId::DbPath, "db-path", None, ArgMode::Required),
    spec(OptId::KeepDbFiles, "keep-db-files", None, ArgMode::None),
    spec(OptId::LoadFromDisk, "load-from-disk", None, ArgMode::None),
    spec(OptId::TuneBnum, "tune-bnum", None, ArgMode::Required),
    spec(OptId::TuneLmemb, "tune-lmemb", None, ArgMode::Required),
    spec(OptId::TuneNmemb, "tune-nmemb", None, ArgMode::Required),
    spec(OptId::Xmmap, "xmmap", None, ArgMode::Required),
];

const DEBUG_SPECS: &[OptSpec] = &[spec(OptId::DebugFile, "debug-file", Some('l'), ArgMode::Required)];

/// Capability record deciding which optional descriptor groups exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Features {
    pub geoip: bool,
    pub disk_storage: bool,
    pub debug_file: bool,
}

impl Default for Features {
    /// The stock binary ships with every capability enabled.
    fn default() -> Self {
        Self {
            geoip: true,
            disk_storage: true,
            debug_file: true,
        }
    }
}

impl Features {
    /// The smallest option surface: base descriptors only.
    pub fn minimal() -> Self {
        Self {
            geoip: false,
            disk_storage: false,
            debug_file: false,
        }
    }
}

/// The assembled, immutable descriptor set for one process.
#[derive(Debug)]
pub struct Catalog {
    specs: Vec<OptSpec>,
    features: Features,
}

impl Catalog {
    /// Assemble the catalog for the given capability set.
    pub fn assemble(features: &Features) -> Self {
        let mut specs: Vec<OptSpec> = BASE_SPECS.to_vec();
        if features.debug_file {
            specs.extend_from_slice(DEBUG_SPECS);
        }
        if features.geoip {
            specs.extend_from_slice(GEOIP_SPECS);
        }
        if features.disk_storage {
            specs.extend_from_slice(DISK_STORAGE_SPECS);
        }
        Self {
            specs,
            features: *features,
        }
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn specs(&self) -> &[OptSpec] {
        &self.specs
    }

    /// Match a long descriptor by exact name.
    pub fn find_long(&self, name: &str) -> Option<&OptSpec> {
        self.specs.iter().find(|s| s.long == name)
    }

    /// Match a short descriptor by code.
    pub fn find_short(&self, code: char) -> Option<&OptSpec> {
        self.specs.iter().find(|s| s.short == Some(code))
    }

    /// Suggest a similar long option using Levenshtein distance.
    /// Returns Some(name) if a close match is found (distance <= 2).
    pub fn suggest_long(&self, input: &str) -> Option<&'static str> {
        let mut best: Option<(&'static str, usize)> = None;
        for s in &self.specs {
            let distance = strsim::levenshtein(input, s.long);
            if distance <= 2 && best.is_none_or(|(_, d)| distance < d) {
                best = Some((s.long, distance));
            }
        }
        best.map(|(name, _)| name)
    }
}

/// Catalog for the stock binary, assembled on first use.
pub fn default_catalog() -> &'static Catalog {
    static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::assemble(&Features::default()));
    &CATALOG
}
