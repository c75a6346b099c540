// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

use corpus_fix::BASMALAH;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// First verse of surah 2 without the Basmalah
pub const ALIF_LAM_MIM: &str = "الٓمٓ";

/// Test fixture helper for temporary corpus files and cache trees
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a file with given content, creating parent directories
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write `verses` as a pretty JSON corpus
    pub fn create_corpus<P: AsRef<Path>>(&self, relative_path: P, verses: &Value) -> PathBuf {
        let content = serde_json::to_string_pretty(verses).expect("Failed to serialize corpus");
        self.create_file(relative_path, &content)
    }

    /// Read a corpus file back as raw JSON
    pub fn read_corpus<P: AsRef<Path>>(&self, path: P) -> Value {
        let content = fs::read_to_string(path).expect("Failed to read corpus file");
        serde_json::from_str(&content).expect("Corpus file should be valid JSON")
    }
}

/// Small corpus covering the cases the normalizer must distinguish
pub fn sample_verses() -> Value {
    json!([
        {"surah": 1, "ayah": 1, "textAr": BASMALAH, "textFr": "Au nom d'Allah"},
        {"surah": 1, "ayah": 2, "textAr": "ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ"},
        {"surah": 2, "ayah": 1, "textAr": format!("{BASMALAH} {ALIF_LAM_MIM}"), "juz": 1},
        {"surah": 2, "ayah": 2, "textAr": format!("{BASMALAH} ذَٰلِكَ ٱلْكِتَٰبُ")},
        {"surah": 3, "ayah": 1, "textAr": format!("{BASMALAH}  الٓمٓ  "), "page": 50},
        {"surah": 9, "ayah": 1, "textAr": "بَرَآءَةٌ مِّنَ ٱللَّهِ وَرَسُولِهِۦٓ"}
    ])
}

/// Find a verse by its (surah, ayah) key
pub fn verse_by_key(corpus: &Value, surah: u64, ayah: u64) -> Option<&Value> {
    corpus.as_array()?.iter().find(|v| {
        v["surah"].as_u64() == Some(surah) && v["ayah"].as_u64() == Some(ayah)
    })
}
