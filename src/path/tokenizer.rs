//! Forward-only tokenizer for dotted property paths.

use super::error::PathError;

/// One step through a dotted property path such as `user.emails[0].address`.
///
/// A tokenizer describes the first dot-delimited segment of its input and
/// holds the unparsed remainder. Advancing with [`next`](Self::next) builds a
/// fresh tokenizer over the remainder; the current instance is never mutated,
/// so it can be re-read (or shared across threads) freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyTokenizer {
    name: String,
    indexed_name: String,
    index: Option<String>,
    children: Option<String>,
}

impl PropertyTokenizer {
    /// Tokenizes the first segment of `path`.
    ///
    /// Only the portion up to the first `.` is validated here; the remainder
    /// is checked when the tokenizer advances into it.
    pub fn new(path: &str) -> Result<Self, PathError> {
        let (head, children) = match path.find('.') {
            Some(dot) => (&path[..dot], Some(path[dot + 1..].to_string())),
            None => (path, None),
        };

        let indexed_name = head.to_string();
        let (name, index) = match head.find('[') {
            Some(open) => {
                let close = head[open..]
                    .find(']')
                    .ok_or(PathError::UnmatchedBracket { position: open })?;
                (
                    head[..open].to_string(),
                    Some(head[open + 1..open + close].to_string()),
                )
            }
            None => (head.to_string(), None),
        };

        Ok(PropertyTokenizer {
            name,
            indexed_name,
            index,
            children,
        })
    }

    /// The segment's identifier with any bracketed index stripped.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The segment exactly as it appeared up to the first dot, bracket included.
    pub fn indexed_name(&self) -> &str {
        &self.indexed_name
    }

    /// The content between `[` and `]`, if the segment carries one.
    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// The unparsed remainder of the path after the first dot.
    pub fn children(&self) -> Option<&str> {
        self.children.as_deref()
    }

    /// Whether a remainder exists to advance into.
    pub fn has_next(&self) -> bool {
        self.children.is_some()
    }

    /// Builds a tokenizer over the remainder of the path.
    ///
    /// Returns [`PathError::EndOfPath`] when this is the last segment.
    pub fn next(&self) -> Result<PropertyTokenizer, PathError> {
        match &self.children {
            Some(rest) => PropertyTokenizer::new(rest),
            None => Err(PathError::EndOfPath),
        }
    }
}
