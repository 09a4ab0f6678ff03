//! Usage, help, and version text. Static data; only the capability-gated
//! sections are assembled at runtime.

use crate::cli::catalog::Features;
use crate::types::{
    DEFAULT_CACHE_LCNUM, DEFAULT_CACHE_NCNUM, DEFAULT_DB_PATH, DEFAULT_TUNE_BNUM,
    DEFAULT_TUNE_LMEMB, DEFAULT_TUNE_NMEMB, DEFAULT_XMMAP,
};

const USAGE_HEADER: &str = "\
Usage: weblens [ options ... ] -f log_file [-c][-M][-H][-q][-d][...]
The following options can also be supplied to the command:

Log & Date Format Options

  --date-format=<dateformat>  - Specify log date format.
  --log-format=<logformat>    - Specify log format. Inner quotes need to
                                be escaped.

User Interface Options

  -c --config-dialog          - Prompt log/date configuration window.
  --color-scheme=<1|2>        - Color schemes: 1 => Grey, 2 => Green.
  --no-color                  - Disable colored output.

File Options

  -f --log-file=<filename>    - Path to input log file.
  -p --config-file=<filename> - Custom configuration file.
  --no-global-config          - Don't load the global configuration file.
";

const USAGE_DEBUG: &str = "\
  -l --debug-file=<filename>  - Send all debug messages to the
                                specified file.
";

const USAGE_PARSE: &str = "
Parse Options

  -a --agent-list             - Enable a list of user-agents by host.
  -d --with-output-resolver   - Enable IP resolver on HTML|JSON output.
  -e --exclude-ip=<IP>        - Exclude one or multiple IPv4/6, includes
                                IP ranges. e.g., 192.168.0.1-192.168.0.10
  -H --http-protocol          - Include HTTP request protocol if found.
  -M --http-method            - Include HTTP request method if found.
  -m --with-mouse             - Enable mouse support on main dashboard.
  -o --output-format=csv|json - Output either a JSON or a CSV file.
  -q --no-query-string        - Ignore request's query string.
  -r --no-term-resolver       - Disable IP resolver on terminal output.
  --444-as-404                - Treat non-standard status code 444 as 404.
  --4xx-to-unique-count       - Add 4xx client errors to the unique
                                visitors count.
  --ignore-crawlers           - Ignore crawlers.
  --ignore-referer=<needle>   - Ignore a referer from being counted.
                                Wild cards are allowed. i.e., *.bing.com
  --no-progress               - Disable progress metrics.
  --real-os                   - Display real OS names. e.g., Windows XP,
                                Snow Leopard.
  --sort-view=MOD,FIELD,ORDER - Sort panel on initial load. For example:
                                --sort-view=VISITORS,BY_HITS,ASC
  --static-file=<extension>   - Add static file extension. e.g.: .mp3
                                Extensions are case sensitive.
";

const USAGE_GEOIP: &str = "
GeoIP Options

  -g --std-geoip              - Standard GeoIP database for less memory
                                usage.
  --geoip-city-data=<path>    - Specify path to GeoIP City database file.
";

const USAGE_FOOTER: &str = "
Other Options

  -h --help                   - This help.
  -V --version                - Display version information and exit.
  -s --storage                - Display current storage method.

For more details visit: https://github.com/weblens-tools/weblens
";

/// Render the usage text for the active capability set.
pub fn usage(features: &Features) -> String {
    let mut out = String::from(USAGE_HEADER);
    if features.debug_file {
        out.push_str(USAGE_DEBUG);
    }
    out.push_str(USAGE_PARSE);
    if features.geoip {
        out.push_str(USAGE_GEOIP);
    }
    if features.disk_storage {
        out.push_str(&format!(
            "
On-Disk Database Options

  --keep-db-files             - Persist parsed data into disk.
  --load-from-disk            - Load previously stored data from disk.
  --db-path=<path>            - Path of the database file. Default [{DEFAULT_DB_PATH}]
  --xmmap=<number>            - Set the size in bytes of the extra
                                mapped memory. Default [{DEFAULT_XMMAP}]
  --cache-lcnum=<number>      - Max number of leaf nodes to be cached.
                                Default [{DEFAULT_CACHE_LCNUM}]
  --cache-ncnum=<number>      - Max number of non-leaf nodes to be cached.
                                Default [{DEFAULT_CACHE_NCNUM}]
  --tune-lmemb=<number>       - Number of members in each leaf page.
                                Default [{DEFAULT_TUNE_LMEMB}]
  --tune-nmemb=<number>       - Number of members in each non-leaf page.
                                Default [{DEFAULT_TUNE_NMEMB}]
  --tune-bnum=<number>        - Number of elements of the bucket array.
                                Default [{DEFAULT_TUNE_BNUM}]
  --compression=<zlib|bz2>    - Specifies that each page is compressed
                                with ZLIB|BZ2 encoding.
"
        ));
    }
    out.push_str(USAGE_FOOTER);
    out
}

/// Render the `-V` output.
pub fn version() -> String {
    format!("weblens {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_usage_has_capability_sections() {
        let text = usage(&Features::default());
        assert!(text.contains("--std-geoip"));
        assert!(text.contains("--tune-bnum"));
        assert!(text.contains("--debug-file"));
        assert!(text.contains("Usage: weblens"));
    }

    #[test]
    fn minimal_usage_omits_capability_sections() {
        let text = usage(&Features::minimal());
        assert!(!text.contains("--std-geoip"));
        assert!(!text.contains("--db-path"));
        assert!(!text.contains("--debug-file"));
        assert!(text.contains("--no-global-config"));
    }

    #[test]
    fn version_carries_crate_version() {
        assert!(version().contains(env!("CARGO_PKG_VERSION")));
    }
}
