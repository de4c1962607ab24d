//! JSON document comparison with match classification
//!
//! This crate compares two JSON byte sequences and reports how they relate:
//! semantically equal ([`Classification::FullMatch`]), equal except for
//! extra members on the right-hand side ([`Classification::SupersetMatch`]),
//! or diverging ([`Classification::NoMatch`]). Alongside the classification
//! it renders a line-per-node report of the differences, either colorized
//! for a terminal or plain with matched lines suppressed, meant to sit
//! inside a Markdown code fence.

mod compare;
mod error;
mod options;

pub use compare::{compare, Classification, Comparison};
pub use error::{DiffError, DiffResult};
pub use options::{CompareOptions, Tag};
