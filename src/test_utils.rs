//! Shared test utilities.

use crate::model::CodeBlock;

/// Creates a test code block with the given name and code.
pub fn make_block(name: &str, code: &str) -> CodeBlock {
    CodeBlock::new("js", name, code)
}

/// Creates a test code block with a language override.
pub fn make_block_lang(name: &str, code: &str, language: &str) -> CodeBlock {
    CodeBlock::new(language, name, code)
}
