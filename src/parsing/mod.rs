//! Parsers for the reference baseline table.
//!
//! The baseline is a plain-text, whitespace-delimited table with a
//! `#`-prefixed comment header and explicit year/month/day columns.
//! Values at or below zero are instrument/quality-flag sentinels and are
//! converted to missing during the parse, never surfaced as errors.

pub mod baseline_parser;


pub use baseline_parser::{parse_baseline_file, parse_baseline_str};
