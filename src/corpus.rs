use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Field holding the Arabic verse text
pub const TEXT_AR_FIELD: &str = "textAr";

/// One verse record of the corpus.
///
/// Stored as the raw JSON object so fields this tool does not know about, and
/// the order of all fields, survive a load/save cycle untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Verse(Map<String, Value>);

impl Verse {
    /// 1-based chapter index
    pub fn surah(&self) -> Option<u64> {
        self.0.get("surah").and_then(Value::as_u64)
    }

    /// 1-based verse index within the chapter
    pub fn ayah(&self) -> Option<u64> {
        self.0.get("ayah").and_then(Value::as_u64)
    }

    pub fn text_ar(&self) -> Option<&str> {
        self.0.get(TEXT_AR_FIELD).and_then(Value::as_str)
    }

    /// Replace the Arabic text, keeping the field's position in the record
    pub fn set_text_ar(&mut self, text: String) {
        match self.0.get_mut(TEXT_AR_FIELD) {
            Some(slot) => *slot = Value::String(text),
            None => {
                self.0.insert(TEXT_AR_FIELD.to_string(), Value::String(text));
            }
        }
    }

    /// Record identity `(surah, ayah)`; uniqueness is assumed, not checked
    pub fn key(&self) -> Option<(u64, u64)> {
        Some((self.surah()?, self.ayah()?))
    }

    /// Raw access to every field of the record
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Ordered sequence of verse records, loaded and saved as a whole
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Corpus {
    verses: Vec<Verse>,
}

impl Corpus {
    /// Load a corpus from a JSON file whose top level is an array of objects
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading corpus from {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
        let corpus = Self::from_json(&content)
            .with_context(|| format!("Invalid corpus JSON in {}", path.display()))?;

        info!("Loaded {} verses from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Pretty JSON with two-space indentation and literal non-ASCII text
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the whole corpus to `path`, replacing any existing file.
    ///
    /// Serialization completes before the file is touched, so a failure
    /// leaves nothing behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_pretty_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write corpus file {}", path.display()))?;
        info!("Saved {} verses to {}", self.len(), path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn verses_mut(&mut self) -> &mut [Verse] {
        &mut self.verses
    }
}
