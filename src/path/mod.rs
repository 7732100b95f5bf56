//! Property path tokenizer, parser, and resolver.
//!
//! This module provides dotted property path support, addressing nested
//! values by name and optional bracketed index rather than by position.
//!
//! # Supported Syntax
//!
//! - `name` - Named property access
//! - `name[0]` - Bracketed array index (negative counts from the end)
//! - `name[key]` - Bracketed map key
//! - `a.b.c` - Dot-separated nesting
//!
//! # Examples
//!
//! ```
//! // user.emails[0].address - first email's address
//! // scores[math] - map entry under a computed key
//! // [2].name - third element of a top-level array
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod tokenizer;

pub use ast::{PropertyPath, Segment};
pub use error::PathError;
pub use evaluator::Evaluator;
pub use tokenizer::PropertyTokenizer;
