//! Fixed locations used by the maintenance binaries.
//!
//! Corpus paths are relative to the project root the tools are run from.

use std::path::{Path, PathBuf};

/// Corpus shipped with the app
pub const CORPUS_PATH: &str = "assets/corpus/quran_full.json";

/// Where `basmalah-fix` writes its output for review
pub const FIXED_CORPUS_PATH: &str = "assets/corpus/quran_full_fixed.json";

/// Suffix appended to the input stem when deriving an output path
pub const FIXED_SUFFIX: &str = "_fixed";

/// App data folder name used by the consuming app on macOS
pub const APP_DATA_NAME: &str = "spiritual_routines";

/// Derive the sibling output path `<stem>_fixed.json` for an input corpus
pub fn fixed_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("corpus");
    let extension = input
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("json");
    input.with_file_name(format!("{stem}{FIXED_SUFFIX}.{extension}"))
}
