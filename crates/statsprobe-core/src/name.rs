//! Metric name keys.
//!
//! A name is an ordered list of segments. Identity is the segment list itself:
//! `["a", "b"]` and `["a/b"]` are different metrics even though both print as
//! `a/b`. The joined form exists for display only.

use std::fmt;

use serde::Serialize;

/// Immutable, cheaply clonable metric name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NameKey {
    segments: Box<[String]>,
}

impl NameKey {
    /// Build a key from its segments. Segments are kept verbatim: no
    /// splitting, trimming, or deduplication.
    ///
    /// A key must have at least one segment; debug builds assert this.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Box<[String]> = segments.into_iter().map(Into::into).collect();
        debug_assert!(!segments.is_empty(), "metric name needs at least one segment");
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// A new key with `prefix` placed before this key's segments.
    pub fn prefixed(&self, prefix: &[String]) -> Self {
        Self::new(prefix.iter().chain(self.segments.iter()).cloned())
    }

    /// Display form, segments joined with `/`.
    pub fn joined(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(seg)?;
        }
        Ok(())
    }
}

impl From<&[&str]> for NameKey {
    fn from(segments: &[&str]) -> Self {
        Self::new(segments.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for NameKey {
    fn from(segments: [&str; N]) -> Self {
        Self::new(segments)
    }
}

impl From<Vec<String>> for NameKey {
    fn from(segments: Vec<String>) -> Self {
        Self::new(segments)
    }
}
