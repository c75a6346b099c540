pub mod basmalah;
pub mod corpus;
pub mod invalidator;
pub mod normalizer;
pub mod paths;

// Re-export main types for convenient access
pub use basmalah::{BasmalahMatcher, BasmalahSplit, BASMALAH};
pub use corpus::{Corpus, Verse};

pub use normalizer::{
    normalize_corpus, normalize_file, Modification, NormalizeReport, NormalizerConfig,
};

pub use invalidator::{
    default_roots, delete_matches, find_matches, invalidate, CacheMatch, CacheTarget, DeletionFailure,
    InvalidationReport, InvalidatorConfig, MatchKind,
};
