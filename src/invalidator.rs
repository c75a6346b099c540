use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::paths;

/// Name patterns identifying an embedded database's on-disk cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheTarget {
    /// File extension (without the dot) of database files
    pub extension: String,
    /// Exact name of the engine's data directory
    pub dir_name: String,
}

impl CacheTarget {
    /// Isar: `*.isar` files and `isar/` directories
    pub fn isar() -> Self {
        Self {
            extension: "isar".to_string(),
            dir_name: "isar".to_string(),
        }
    }

    fn matches_file(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == self.extension.as_str())
    }

    fn matches_dir(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| name == self.dir_name.as_str())
    }
}

/// Configuration for cache invalidation
#[derive(Debug, Clone)]
pub struct InvalidatorConfig {
    /// Roots to scan recursively; missing roots are skipped
    pub roots: Vec<PathBuf>,
    pub target: CacheTarget,
}

impl Default for InvalidatorConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            target: CacheTarget::isar(),
        }
    }
}

/// Kind of filesystem entry matched during the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    File,
    Directory,
}

/// A cache entry scheduled for deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheMatch {
    pub path: PathBuf,
    pub kind: MatchKind,
}

/// A match that could not be deleted
#[derive(Debug, Clone)]
pub struct DeletionFailure {
    pub path: PathBuf,
    pub kind: io::ErrorKind,
    pub message: String,
}

/// Result of an invalidation run
#[derive(Debug, Clone, Default)]
pub struct InvalidationReport {
    pub deleted: Vec<PathBuf>,
    pub failures: Vec<DeletionFailure>,
}

impl InvalidationReport {
    /// True when nothing matched in any root
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.failures.is_empty()
    }
}

/// Locations where the app's Isar database may live on a developer machine
pub fn default_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Some(home) = dirs::home_dir() {
        // iOS simulator devices
        roots.push(home.join("Library/Developer/CoreSimulator/Devices"));
        // macOS app data
        roots.push(home.join("Library/Application Support").join(paths::APP_DATA_NAME));
    }

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.join("build"));
        roots.push(cwd.join(".dart_tool"));
    }

    roots
}

/// Find every cache file and directory under `root`.
///
/// Matched directories are not descended into. Symlinks are not followed;
/// a symlink matching either rule is removed as a link, leaving its target.
/// Unreadable subtrees are logged and skipped.
pub fn find_matches(root: &Path, target: &CacheTarget) -> Vec<CacheMatch> {
    let mut matches = Vec::new();
    let mut walker = WalkDir::new(root).follow_links(false).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        let file_type = entry.file_type();
        let path = entry.path();
        let kind = if file_type.is_dir() && target.matches_dir(path) {
            MatchKind::Directory
        } else if file_type.is_file() && target.matches_file(path) {
            MatchKind::File
        } else if file_type.is_symlink() && (target.matches_file(path) || target.matches_dir(path)) {
            MatchKind::File
        } else {
            continue;
        };

        debug!(?kind, "Found cache entry: {}", path.display());
        if kind == MatchKind::Directory {
            walker.skip_current_dir();
        }
        matches.push(CacheMatch {
            path: entry.into_path(),
            kind,
        });
    }

    matches
}

/// Delete a single match
pub fn delete_match(m: &CacheMatch) -> io::Result<()> {
    match m.kind {
        MatchKind::File => fs::remove_file(&m.path),
        MatchKind::Directory => fs::remove_dir_all(&m.path),
    }
}

/// Delete each match, recording successes and failures in `report`
pub fn delete_matches(matches: Vec<CacheMatch>, report: &mut InvalidationReport) {
    for m in matches {
        match delete_match(&m) {
            Ok(()) => {
                info!(kind = ?m.kind, "Deleted {}", m.path.display());
                report.deleted.push(m.path);
            }
            Err(e) => {
                warn!("Failed to delete {}: {}", m.path.display(), e);
                report.failures.push(DeletionFailure {
                    path: m.path,
                    kind: e.kind(),
                    message: e.to_string(),
                });
            }
        }
    }
}

/// Scan every configured root and delete each cache entry found.
///
/// A failed deletion is recorded and the scan carries on with the rest.
pub fn invalidate(config: &InvalidatorConfig) -> InvalidationReport {
    let mut report = InvalidationReport::default();

    for root in &config.roots {
        if !root.exists() {
            debug!("Root does not exist, skipping: {}", root.display());
            continue;
        }

        info!("Scanning {} for cache entries", root.display());
        delete_matches(find_matches(root, &config.target), &mut report);
    }

    info!(
        "Cache invalidation complete: {} deleted, {} failed",
        report.deleted.len(),
        report.failures.len()
    );
    report
}
