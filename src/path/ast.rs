//! Owned forms of a parsed property path.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::PathError;
use super::tokenizer::PropertyTokenizer;

/// One dot-delimited unit of a property path, possibly carrying a bracketed
/// index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    name: String,
    index: Option<String>,
}

impl Segment {
    /// The identifier with any bracketed index stripped.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The content between `[` and `]`, if present.
    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// The identifier with its bracket suffix reattached.
    pub fn indexed_name(&self) -> String {
        match &self.index {
            Some(idx) => format!("{}[{}]", self.name, idx),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(idx) = &self.index {
            write!(f, "[{}]", idx)?;
        }
        Ok(())
    }
}

/// A fully parsed property path.
///
/// Where [`PropertyTokenizer`] walks a path one segment at a time,
/// `PropertyPath` holds every segment at once: an owned, comparable value
/// suited for use as a map key or inside serde-described data. Its `Display`
/// form reconstructs the original input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    segments: Vec<Segment>,
}

impl PropertyPath {
    /// Parses a full path by driving the tokenizer to exhaustion.
    ///
    /// Fails on the first malformed segment.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        let mut segments = Vec::new();
        let mut current = PropertyTokenizer::new(input)?;
        loop {
            segments.push(Segment {
                name: current.name().to_string(),
                index: current.index().map(str::to_string),
            });
            if !current.has_next() {
                break;
            }
            current = current.next()?;
        }
        Ok(PropertyPath { segments })
    }

    /// The segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn first(&self) -> Option<&Segment> {
        self.segments.first()
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for PropertyPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyPath::parse(s)
    }
}

impl<'a> IntoIterator for &'a PropertyPath {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl Serialize for PropertyPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PropertyPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PathVisitor;

        impl<'de> Visitor<'de> for PathVisitor {
            type Value = PropertyPath;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a dotted property path string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                PropertyPath::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(PathVisitor)
    }
}
