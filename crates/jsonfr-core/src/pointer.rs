//! # JSON Pointer Paths
//!
//! RFC 6901 pointers identifying a node inside a document. Pointers are
//! built one segment at a time while walking a tree and rendered with the
//! `~0` / `~1` escapes, so the output resolves with
//! [`serde_json::Value::pointer`].

use std::fmt;

/// A single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Key(String),
    Index(usize),
}

/// An RFC 6901 JSON Pointer.
///
/// The empty pointer refers to the whole document and renders as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer {
    segments: Vec<Segment>,
}

impl JsonPointer {
    /// The pointer to the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new pointer extended by an object key.
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.to_string()));
        Self { segments }
    }

    /// Returns a new pointer extended by an array index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str("/")?;
            match segment {
                Segment::Index(i) => write!(f, "{i}")?,
                Segment::Key(k) => {
                    // `~` must be escaped before `/`.
                    for c in k.chars() {
                        match c {
                            '~' => f.write_str("~0")?,
                            '/' => f.write_str("~1")?,
                            other => write!(f, "{other}")?,
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
