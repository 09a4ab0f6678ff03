//! Storage backend selection and display.

use std::fmt;

use crate::cli::catalog::Features;

/// Where parsed log data is held.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StorageMode {
    /// Default backend: everything lives in an in-process hash table.
    MemoryHash,
    /// On-disk B+ tree backend (disk-storage capability).
    DiskBTree,
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageMode::MemoryHash => write!(f, "In-memory hash"),
            StorageMode::DiskBTree => write!(f, "On-disk B+ tree"),
        }
    }
}

/// The backend the current capability set selects.
pub fn active_storage(features: &Features) -> StorageMode {
    if features.disk_storage {
        StorageMode::DiskBTree
    } else {
        StorageMode::MemoryHash
    }
}
