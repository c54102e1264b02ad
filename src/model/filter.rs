//! Predicates that decide which code blocks take part in a tangle.

use regex::Regex;

use super::code_block::CodeBlock;

/// A predicate over a code block.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Matches blocks whose language tag equals the given string exactly.
    Language(String),
    /// Matches blocks whose code contains a match for the pattern.
    Regex(Regex),
}

impl Filter {
    /// Creates a language filter.
    pub fn language(language: impl Into<String>) -> Self {
        Self::Language(language.into())
    }

    /// Compiles a regex filter.
    ///
    /// Invalid patterns are rejected here, so a bad configuration fails
    /// before any source is read.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Regex(Regex::new(pattern)?))
    }

    /// Returns true if the block passes this filter.
    pub fn matches(&self, block: &CodeBlock) -> bool {
        match self {
            Self::Language(language) => block.language == *language,
            Self::Regex(re) => re.is_match(&block.code),
        }
    }
}

/// Returns true if every filter accepts the block.
pub fn all_filters(block: &CodeBlock, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| filter.matches(block))
}

/// Keeps the blocks that pass every filter, in their original order.
pub fn filter_blocks(blocks: Vec<CodeBlock>, filters: &[Filter]) -> Vec<CodeBlock> {
    blocks
        .into_iter()
        .filter(|block| all_filters(block, filters))
        .collect()
}
