//! Protection of reduplicated forms from segmentation
//!
//! `Shield::protect` cuts the text into plain and protected segments so the
//! segmenter never looks inside a reduplication. The placeholder variant
//! rewrites the text with `⟦REDUP:i⟧` markers and keeps a map to undo it.

use std::ops::Range;

use crate::domain::reduplication::{find_reduplications, ReduplicationSpan};

/// Part of a shielded text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text the segmenter may split
    Plain { text: &'a str, offset: usize },
    /// Reduplicated form emitted verbatim
    Protected { text: &'a str, offset: usize },
}

impl<'a> Segment<'a> {
    /// Segment text
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain { text, .. } | Segment::Protected { text, .. } => text,
        }
    }

    /// Byte offset into the source text
    pub fn offset(&self) -> usize {
        match self {
            Segment::Plain { offset, .. } | Segment::Protected { offset, .. } => *offset,
        }
    }

    /// Byte range in the source text
    pub fn range(&self) -> Range<usize> {
        self.offset()..self.offset() + self.text().len()
    }

    /// Whether the segment is protected
    pub fn is_protected(&self) -> bool {
        matches!(self, Segment::Protected { .. })
    }
}

/// Source text cut into plain and protected segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShieldedText<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> ShieldedText<'a> {
    /// The unshielded source
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Segments in source order
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Number of protected segments
    pub fn protected_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_protected()).count()
    }

    /// Concatenate the segments back into text
    pub fn reconstruct(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }
}

/// Builds shielded views of text
#[derive(Debug, Clone, Copy, Default)]
pub struct Shield;

impl Shield {
    /// Detect reduplications and protect them
    pub fn shield(text: &str) -> ShieldedText<'_> {
        Self::protect(text, &find_reduplications(text))
    }

    /// Protect the given spans of `text`
    ///
    /// Spans must be sorted and non-overlapping, as produced by
    /// `find_reduplications`. A span that does not match the text at its
    /// range is ignored.
    pub fn protect<'a>(text: &'a str, spans: &[ReduplicationSpan]) -> ShieldedText<'a> {
        let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
        let mut cursor = 0;

        for span in spans {
            let Range { start, end } = span.range.clone();
            if start < cursor || text.get(start..end) != Some(span.text.as_str()) {
                log::debug!("ignoring stale reduplication span {:?}", span.range);
                continue;
            }
            if start > cursor {
                segments.push(Segment::Plain {
                    text: &text[cursor..start],
                    offset: cursor,
                });
            }
            segments.push(Segment::Protected {
                text: &text[start..end],
                offset: start,
            });
            cursor = end;
        }

        if cursor < text.len() {
            segments.push(Segment::Plain {
                text: &text[cursor..],
                offset: cursor,
            });
        }

        ShieldedText {
            source: text,
            segments,
        }
    }
}

/// Placeholder marker for the reduplication at `index`
pub fn placeholder(index: usize) -> String {
    format!("⟦REDUP:{index}⟧")
}

/// Ordered placeholder to original text mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: Vec<(String, String)>,
}

impl PlaceholderMap {
    /// Number of placeholders
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no placeholder was issued
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Placeholder and original text pairs, in issue order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, o)| (p.as_str(), o.as_str()))
    }

    /// Replace every placeholder in `text` with its original
    pub fn restore(&self, text: &str) -> String {
        if !text.contains("⟦REDUP:") {
            return text.to_string();
        }
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (p, o)| acc.replace(p.as_str(), o))
    }

    /// Restore the placeholders embedded in each token
    pub fn unprotect<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens.iter().map(|t| self.restore(t.as_ref())).collect()
    }
}

/// Replace each span's first remaining occurrence with a placeholder
///
/// Replacement is literal: span text is never interpreted as a pattern.
pub fn protect_with_placeholders(text: &str, spans: &[ReduplicationSpan]) -> (String, PlaceholderMap) {
    let mut working = text.to_string();
    let mut map = PlaceholderMap::default();

    for (i, span) in spans.iter().enumerate() {
        let marker = placeholder(i);
        if working.contains(span.text.as_str()) {
            working = working.replacen(span.text.as_str(), &marker, 1);
            map.entries.push((marker, span.text.clone()));
        }
    }

    (working, map)
}
