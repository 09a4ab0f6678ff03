//! Shared enums and default constants for the startup core.

/// Default path for the on-disk database backend.
pub const DEFAULT_DB_PATH: &str = "/tmp/weblens";
/// Default size in bytes of the extra mapped memory.
pub const DEFAULT_XMMAP: i32 = 0;
/// Default maximum number of leaf nodes cached by the B+ tree.
pub const DEFAULT_CACHE_LCNUM: i32 = 1024;
/// Default maximum number of non-leaf nodes cached by the B+ tree.
pub const DEFAULT_CACHE_NCNUM: i32 = 512;
/// Default number of members in each leaf page.
pub const DEFAULT_TUNE_LMEMB: i32 = 128;
/// Default number of members in each non-leaf page.
pub const DEFAULT_TUNE_NMEMB: i32 = 256;
/// Default number of elements in the bucket array.
pub const DEFAULT_TUNE_BNUM: i32 = 32749;

/// Page compression codec for the on-disk database backend.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Compression {
    Zlib,
    Bz2,
}

/// How the GeoIP database is held while resolving hosts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GeoIpMode {
    /// Whole database loaded into memory (faster, bigger footprint).
    Memory,
    /// Standard on-disk lookups (slower, less memory).
    Standard,
}
