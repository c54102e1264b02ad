//! Readers for extracting code blocks from markdown.

mod markdown;

pub use markdown::{extract_code_blocks, read_code_blocks};
