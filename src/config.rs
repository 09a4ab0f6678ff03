//! The startup configuration store.
//!
//! A `Config` is built exactly once during process startup: created with the
//! defaults below, optionally pre-populated by the global configuration file,
//! then fully populated by the command-line parser. After parsing it is handed
//! to the rest of the application by value, so no other component ever holds a
//! mutable reference to it.

use std::path::PathBuf;

use crate::types::{
    Compression, GeoIpMode, DEFAULT_CACHE_LCNUM, DEFAULT_CACHE_NCNUM, DEFAULT_DB_PATH,
    DEFAULT_TUNE_BNUM, DEFAULT_TUNE_LMEMB, DEFAULT_TUNE_NMEMB, DEFAULT_XMMAP,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to the input access log (`-f`).
    pub log_file: Option<PathBuf>,

    /// Explicit configuration file path (`-p`), captured by the pre-scan.
    pub config_file: Option<PathBuf>,

    /// Whether the global configuration file is loaded before parsing.
    pub load_global_config: bool,

    /// Output format for report generation (`-o`, csv|json). Stored raw;
    /// the renderer decides what to do with unknown values.
    pub output_format: Option<String>,

    /// Dashboard color scheme number (`--color-scheme`).
    pub color_scheme: i32,

    /// Disable colored output entirely.
    pub no_color: bool,

    /// Disable progress metrics while parsing the log.
    pub no_progress: bool,

    /// Prompt the log/date format configuration dialog (`-c`).
    pub config_dialog: bool,

    /// Keep a list of user-agents per host (`-a`).
    pub list_agents: bool,

    /// Ignore the request's query string (`-q`).
    pub ignore_query_string: bool,

    /// Disable the IP resolver on terminal output (`-r`).
    pub skip_term_resolver: bool,

    /// Enable the IP resolver on HTML/JSON output (`-d`).
    pub enable_html_resolver: bool,

    /// Enable mouse support on the main dashboard (`-m`).
    pub mouse_support: bool,

    /// Append the HTTP request method to request lines (`-M`).
    pub append_method: bool,

    /// Append the HTTP protocol to request lines (`-H`).
    pub append_protocol: bool,

    /// Display real OS names instead of short codes.
    pub real_os: bool,

    /// Skip crawler hits when counting.
    pub ignore_crawlers: bool,

    /// Treat the non-standard status code 444 as 404.
    pub code444_as_404: bool,

    /// Add 4xx client errors to the unique visitors count.
    pub client_err_to_unique_count: bool,

    /// Log date format, unescaped (`--date-format`).
    pub date_format: Option<String>,

    /// Log line format, unescaped (`--log-format`).
    pub log_format: Option<String>,

    /// Debug messages are appended to this file when set (`-l`).
    pub debug_log_file: Option<PathBuf>,

    /// Excluded IPs and IP ranges, in the order given (`-e`, repeatable).
    pub exclude_ips: Vec<String>,

    /// Referer patterns excluded from counting (`--ignore-referer`).
    pub ignore_referers: Vec<String>,

    /// Initial panel sort specs, `PANEL,FIELD,ORDER` (`--sort-view`).
    pub sort_views: Vec<String>,

    /// Extra static-file extensions (`--static-file`). Case sensitive.
    pub static_files: Vec<String>,

    /// Length of the longest entry in `static_files`, tracked as entries
    /// are appended so the log parser can size its match window.
    pub static_file_max_len: usize,

    /// How the GeoIP database is held (GeoIP capability).
    pub geoip_mode: GeoIpMode,

    /// Path to the GeoIP city database file.
    pub geoip_city_data: Option<PathBuf>,

    /// Path of the on-disk database file (disk-storage capability).
    pub db_path: PathBuf,

    /// Size in bytes of the extra mapped memory.
    pub xmmap: i32,

    /// Maximum number of leaf nodes to cache.
    pub cache_lcnum: i32,

    /// Maximum number of non-leaf nodes to cache.
    pub cache_ncnum: i32,

    /// Number of members in each leaf page.
    pub tune_lmemb: i32,

    /// Number of members in each non-leaf page.
    pub tune_nmemb: i32,

    /// Number of elements in the bucket array.
    pub tune_bnum: i32,

    /// Page compression codec. `None` means uncompressed.
    pub compression: Option<Compression>,

    /// Persist parsed data on disk after the run.
    pub keep_db_files: bool,

    /// Load previously stored data from disk before parsing.
    pub load_from_disk: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: None,
            config_file: None,
            load_global_config: true,
            output_format: None,
            color_scheme: 0,
            no_color: false,
            no_progress: false,
            config_dialog: false,
            list_agents: false,
            ignore_query_string: false,
            skip_term_resolver: false,
            enable_html_resolver: false,
            mouse_support: false,
            append_method: false,
            append_protocol: false,
            real_os: false,
            ignore_crawlers: false,
            code444_as_404: false,
            client_err_to_unique_count: false,
            date_format: None,
            log_format: None,
            debug_log_file: None,
            exclude_ips: Vec::new(),
            ignore_referers: Vec::new(),
            sort_views: Vec::new(),
            static_files: Vec::new(),
            static_file_max_len: 0,
            geoip_mode: GeoIpMode::Memory,
            geoip_city_data: None,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            xmmap: DEFAULT_XMMAP,
            cache_lcnum: DEFAULT_CACHE_LCNUM,
            cache_ncnum: DEFAULT_CACHE_NCNUM,
            tune_lmemb: DEFAULT_TUNE_LMEMB,
            tune_nmemb: DEFAULT_TUNE_NMEMB,
            tune_bnum: DEFAULT_TUNE_BNUM,
            compression: None,
            keep_db_files: false,
            load_from_disk: false,
        }
    }
}

impl Config {
    /// Append a static-file extension, keeping the running maximum length
    /// in sync.
    pub fn push_static_file(&mut self, ext: String) {
        if self.static_file_max_len < ext.len() {
            self.static_file_max_len = ext.len();
        }
        self.static_files.push(ext);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_global_config() {
        let config = Config::default();
        assert!(config.load_global_config);
        assert!(config.log_file.is_none());
        assert_eq!(config.geoip_mode, GeoIpMode::Memory);
        assert_eq!(config.compression, None);
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn static_file_tracks_max_len() {
        let mut config = Config::default();
        config.push_static_file(".mp3".into());
        config.push_static_file(".tar.gz".into());
        config.push_static_file(".js".into());
        assert_eq!(config.static_files.len(), 3);
        assert_eq!(config.static_file_max_len, ".tar.gz".len());
    }
}
