//! Google-specific modules for HTTP fetching, selectors, and result extraction.

pub mod client;
pub mod parser;
pub mod selectors;

pub use client::{GoogleClient, RawPage, SerpSource};
pub use parser::Parser;
