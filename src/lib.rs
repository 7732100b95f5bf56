//! proppath - parsing and resolution of dotted property paths.
//!
//! A property path addresses a nested value in structured data:
//! `user.emails[0].address` names the `address` field of the first entry in
//! the `emails` array of `user`. The [`path`] module provides a forward-only
//! tokenizer over such strings, an owned parsed form, and an evaluator that
//! resolves paths against `serde_json::Value` trees.
//!
//! ```
//! use proppath::path::PropertyPath;
//! use serde_json::json;
//!
//! let root = json!({"user": {"emails": [{"address": "a@example.com"}]}});
//! let path = PropertyPath::parse("user.emails[0].address").unwrap();
//! let found = proppath::path::Evaluator::new(&root).get(&path);
//! assert_eq!(found, Some(&json!("a@example.com")));
//! ```

pub mod path;

pub use path::{Evaluator, PathError, PropertyPath, PropertyTokenizer, Segment};
