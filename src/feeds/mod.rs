//! Feed ingestion: HTTP retrieval and tolerant CSV parsing.
//!
//! A feed is one published spreadsheet export. Fetching and parsing are
//! kept separate so the parser stays a pure transform from text to a
//! [`crate::models::FeedTable`]; the caller decides what to do with the
//! result.

mod client;
mod parser;

pub use client::FeedClient;
pub use parser::parse_feed;
