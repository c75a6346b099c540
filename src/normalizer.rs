use anyhow::{bail, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::basmalah::BasmalahMatcher;
use crate::corpus::Corpus;
use crate::paths;

/// Configuration for a normalizer run
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Corpus to read; never written
    pub input: PathBuf,
    /// Destination for the fixed corpus
    pub output: PathBuf,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(paths::CORPUS_PATH),
            output: PathBuf::from(paths::FIXED_CORPUS_PATH),
        }
    }
}

impl NormalizerConfig {
    /// Config for `input` with the derived `<stem>_fixed.json` output
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = paths::fixed_output_path(&input);
        Self { input, output }
    }
}

/// One rewritten verse
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Modification {
    pub surah: u64,
    pub ayah: u64,
    pub old_text: String,
    pub new_text: String,
}

/// Outcome of a normalizer pass, in corpus order
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub verses_scanned: usize,
    pub modifications: Vec<Modification>,
}

impl NormalizeReport {
    /// Chapter indices of every modified verse
    pub fn modified_surahs(&self) -> Vec<u64> {
        self.modifications.iter().map(|m| m.surah).collect()
    }

    pub fn modified_count(&self) -> usize {
        self.modifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifications.is_empty()
    }
}

/// Split the Basmalah from the rest of every first verse, in place
pub fn normalize_corpus(corpus: &mut Corpus, matcher: &BasmalahMatcher) -> NormalizeReport {
    let mut report = NormalizeReport {
        verses_scanned: corpus.len(),
        modifications: Vec::new(),
    };

    for verse in corpus.verses_mut() {
        if verse.ayah() != Some(1) {
            continue;
        }

        let Some(old_text) = verse.text_ar() else {
            debug!(surah = ?verse.surah(), "First verse has no textAr, skipping");
            continue;
        };

        let Some(new_text) = matcher.rewrite(old_text) else {
            continue;
        };

        let old_text = old_text.to_string();
        // WHY: surah 0 only appears for records lacking a chapter index
        let surah = verse.surah().unwrap_or_default();
        info!(surah, old = %old_text, new = %new_text, "Split Basmalah from first verse");

        verse.set_text_ar(new_text.clone());
        report.modifications.push(Modification {
            surah,
            ayah: 1,
            old_text,
            new_text,
        });
    }

    info!(
        "Normalization complete: {} of {} verses modified",
        report.modified_count(),
        report.verses_scanned
    );
    report
}

/// Load, normalize and save a corpus file.
///
/// Nothing is written unless the input loads completely. The output is
/// always a separate file; promoting it over the input is left to the caller.
pub fn normalize_file(config: &NormalizerConfig) -> Result<NormalizeReport> {
    if same_file(&config.input, &config.output) {
        bail!(
            "Output path {} would overwrite the input corpus",
            config.output.display()
        );
    }

    let matcher = BasmalahMatcher::new()?;
    let mut corpus = Corpus::load(&config.input)?;
    let report = normalize_corpus(&mut corpus, &matcher);
    corpus.save(&config.output)?;

    Ok(report)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
