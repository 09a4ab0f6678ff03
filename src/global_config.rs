//! Global configuration file support.
//!
//! Loaded between the pre-scan and the primary parse when the pre-scan
//! left global-config loading enabled. An explicit `-p` path wins over the
//! lookup; otherwise the user config directory is tried, then `/etc`.
//! Command-line flags always override file values because the primary
//! parse runs after this loader.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::Config;

const CONFIG_FILE_NAME: &str = "weblens.toml";
const ETC_CONFIG_PATH: &str = "/etc/weblens.toml";

/// Settings accepted from the configuration file. Every field is optional;
/// a missing key leaves the built-in default in place.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub date_format: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    pub output_format: Option<String>,
    pub color_scheme: Option<i32>,
    pub no_color: Option<bool>,
    pub no_progress: Option<bool>,
    pub ignore_crawlers: Option<bool>,
    pub real_os: Option<bool>,
    pub exclude_ips: Vec<String>,
    pub ignore_referers: Vec<String>,
    pub sort_views: Vec<String>,
    pub static_files: Vec<String>,
    pub db_path: Option<PathBuf>,
}

impl GlobalConfig {
    /// Load from the explicit path when given, otherwise from the first
    /// existing lookup location. Missing files yield the defaults.
    pub fn load(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => match lookup_path() {
                Some(path) => Self::load_from_path(&path),
                None => Self::default(),
            },
        }
    }

    /// Load from a specific path. Unreadable or unparsable files degrade
    /// to defaults with a warning.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[weblens] failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[weblens] failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Fold the file values into the store. Runs before the primary parse,
    /// so anything set here can still be overridden on the command line.
    pub fn apply(self, config: &mut Config) {
        if self.date_format.is_some() {
            config.date_format = self.date_format;
        }
        if self.log_format.is_some() {
            config.log_format = self.log_format;
        }
        if self.log_file.is_some() {
            config.log_file = self.log_file;
        }
        if self.output_format.is_some() {
            config.output_format = self.output_format;
        }
        if let Some(scheme) = self.color_scheme {
            config.color_scheme = scheme;
        }
        if let Some(v) = self.no_color {
            config.no_color = v;
        }
        if let Some(v) = self.no_progress {
            config.no_progress = v;
        }
        if let Some(v) = self.ignore_crawlers {
            config.ignore_crawlers = v;
        }
        if let Some(v) = self.real_os {
            config.real_os = v;
        }
        if let Some(path) = self.db_path {
            config.db_path = path;
        }
        config.exclude_ips.extend(self.exclude_ips);
        config.ignore_referers.extend(self.ignore_referers);
        config.sort_views.extend(self.sort_views);
        for ext in self.static_files {
            config.push_static_file(ext);
        }
    }
}

/// First existing config file: user config dir, then /etc.
fn lookup_path() -> Option<PathBuf> {
    if let Some(dir) = dirs::config_dir() {
        let candidate = dir.join("weblens").join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    let etc = PathBuf::from(ETC_CONFIG_PATH);
    if etc.exists() {
        return Some(etc);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config = GlobalConfig::load_from_path(&temp.path().join("nope.toml"));
        assert!(config.date_format.is_none());
        assert!(config.exclude_ips.is_empty());
    }

    #[test]
    fn invalid_file_degrades_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "date_format = [not toml").expect("write");
        let config = GlobalConfig::load_from_path(&path);
        assert!(config.date_format.is_none());
    }

    #[test]
    fn loads_and_applies_values() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(
            file,
            r#"
date_format = "%d/%b/%Y"
color_scheme = 2
no_color = true
exclude_ips = ["192.168.0.1"]
static_files = [".mp3", ".woff2"]
"#
        )
        .expect("write");

        let mut config = Config::default();
        GlobalConfig::load_from_path(&path).apply(&mut config);

        assert_eq!(config.date_format.as_deref(), Some("%d/%b/%Y"));
        assert_eq!(config.color_scheme, 2);
        assert!(config.no_color);
        assert_eq!(config.exclude_ips, vec!["192.168.0.1".to_string()]);
        assert_eq!(config.static_file_max_len, ".woff2".len());
    }

    #[test]
    fn command_line_overrides_file_values() {
        use crate::cli::catalog::{Catalog, Features};
        use crate::cli::parser::{parse_args, ParseOutcome};
        use crate::cli::scanner::OptScanner;

        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "date_format = \"%Y-%m-%d\"\n").expect("write");

        let mut config = Config::default();
        GlobalConfig::load_from_path(&path).apply(&mut config);

        let catalog = Catalog::assemble(&Features::default());
        let argv: Vec<String> = vec!["--date-format=%d/%b/%Y".into()];
        let mut scanner = OptScanner::new(&catalog, &argv);
        match parse_args(&mut scanner, config) {
            ParseOutcome::Ready(config) => {
                assert_eq!(config.date_format.as_deref(), Some("%d/%b/%Y"));
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }
}
