//! Domain layer of the tokenization pipeline
//!
//! Each stage is a pure function of its input plus the read-only resources:
//! reduplication detection, shielding, segmentation, affix analysis and
//! the auxiliary paragog normaliser.

pub mod affix;
pub mod paragog;
pub mod reduplication;
pub mod segmenter;
pub mod shield;
pub mod token;

pub use affix::{
    AffixAnalyser, AffixCandidates, AffixPosition, AffixRule, PhonologicalGate, PrefixAnalyser,
    SuffixAnalyser,
};
pub use paragog::{normalize_paragogs, ParagogNormalizer};
pub use reduplication::{extract_reduplications, find_reduplications, ReduplicationSpan};
pub use segmenter::{SegmentationPolicy, Segmenter};
pub use shield::{placeholder, protect_with_placeholders, PlaceholderMap, Segment, Shield, ShieldedText};
pub use token::{Token, TokenKind};
