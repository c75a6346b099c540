// Basmalah detection for first verses of the corpus
// WHY: one anchored pattern replaces the exact-prefix and word-split heuristics

use anyhow::Result;
use regex_automata::{meta::Regex, Anchored, Input};
use tracing::debug;

/// The four-word opening formula exactly as it appears in the corpus
pub const BASMALAH: &str = "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ";

/// Byte-order mark carried by the first verse of surah 1 in some exports
const BOM: char = '\u{FEFF}';

/// A verse text split at the end of its leading Basmalah
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasmalahSplit<'a> {
    /// Basmalah as written in the source text, so callers can see which
    /// spacing variant matched; `rewrite` always emits `BASMALAH` instead
    pub matched: &'a str,
    /// Text after the Basmalah, trimmed of surrounding whitespace; never empty
    pub remainder: &'a str,
}

/// Anchored matcher for a Basmalah at the start of a verse
#[derive(Debug, Clone)]
pub struct BasmalahMatcher {
    regex: Regex,
}

impl BasmalahMatcher {
    /// Compile the prefix pattern: the four words separated by any run of whitespace
    pub fn new() -> Result<Self> {
        let words: Vec<&str> = BASMALAH.split(' ').collect();
        let pattern = format!("{BOM}?{}", words.join(r"\s+"));
        debug!("Compiling Basmalah pattern: {}", pattern);

        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Split `text` into its leading Basmalah and the remaining verse text.
    ///
    /// Returns `None` when the text does not start with the Basmalah or when
    /// nothing but whitespace follows it.
    pub fn split<'a>(&self, text: &'a str) -> Option<BasmalahSplit<'a>> {
        let input = Input::new(text).anchored(Anchored::Yes);
        let mat = self.regex.find(input)?;

        let remainder = text[mat.end()..].trim();
        if remainder.is_empty() {
            return None;
        }

        Some(BasmalahSplit {
            matched: text[mat.start()..mat.end()].trim_start_matches(BOM),
            remainder,
        })
    }

    /// Rewrite `text` as `BASMALAH + "\n" + remainder`.
    ///
    /// Returns `None` when there is nothing to split or when `text` is already
    /// in split form, so a second pass over fixed output changes nothing.
    pub fn rewrite(&self, text: &str) -> Option<String> {
        let split = self.split(text)?;
        let rewritten = format!("{BASMALAH}\n{}", split.remainder);
        (rewritten != text).then_some(rewritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REST: &str = "الٓمٓ";

    fn matcher() -> BasmalahMatcher {
        BasmalahMatcher::new().expect("Basmalah pattern should compile")
    }

    #[test]
    fn test_constant_has_four_words() {
        assert_eq!(BASMALAH.split_whitespace().count(), 4);
    }

    #[test]
    fn test_split_basmalah_followed_by_text() {
        let text = format!("{BASMALAH} {REST}");
        let split = matcher().split(&text).unwrap();
        assert_eq!(split.matched, BASMALAH);
        assert_eq!(split.remainder, REST);
    }

    #[test]
    fn test_basmalah_only_is_not_split() {
        assert!(matcher().split(BASMALAH).is_none());
        assert!(matcher().split(&format!("{BASMALAH}  \n")).is_none());
    }

    #[test]
    fn test_basmalah_must_be_a_prefix() {
        let text = format!("{REST} {BASMALAH} {REST}");
        assert!(matcher().split(&text).is_none());
        assert!(matcher().rewrite(&text).is_none());
    }

    #[test]
    fn test_unrelated_text_is_not_split() {
        assert!(matcher().split("قُلْ هُوَ ٱللَّهُ أَحَدٌ").is_none());
        assert!(matcher().split("").is_none());
    }

    #[test]
    fn test_rewrite_inserts_single_newline() {
        let text = format!("{BASMALAH} {REST}");
        assert_eq!(matcher().rewrite(&text).unwrap(), format!("{BASMALAH}\n{REST}"));
    }

    #[test]
    fn test_rewrite_trims_remainder() {
        let text = format!("{BASMALAH}   {REST}  ");
        assert_eq!(matcher().rewrite(&text).unwrap(), format!("{BASMALAH}\n{REST}"));
    }

    #[test]
    fn test_rewrite_normalizes_prefix_spacing() {
        let words: Vec<&str> = BASMALAH.split(' ').collect();
        let variant = words.join("  ");
        let text = format!("{variant}\t{REST}");
        assert_eq!(matcher().split(&text).unwrap().matched, variant);
        assert_eq!(matcher().rewrite(&text).unwrap(), format!("{BASMALAH}\n{REST}"));
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let m = matcher();
        let once = m.rewrite(&format!("{BASMALAH} {REST}")).unwrap();
        assert!(m.rewrite(&once).is_none());
    }

    #[test]
    fn test_leading_bom_is_tolerated() {
        let text = format!("{BOM}{BASMALAH} {REST}");
        let split = matcher().split(&text).unwrap();
        assert_eq!(split.matched, BASMALAH);
        assert_eq!(matcher().rewrite(&text).unwrap(), format!("{BASMALAH}\n{REST}"));
    }
}
