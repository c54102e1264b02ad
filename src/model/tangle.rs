//! The tangler: extract, filter, order, concatenate.

use std::path::Path;

use crate::errors::Result;
use crate::io::{FileCache, RealFileCache};
use crate::readers::read_code_blocks;

use super::code_block::CodeBlock;
use super::filter::{filter_blocks, Filter};
use super::order::OrderStrategy;

/// Options a tangler is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TanglerConfig {
    /// Keep only blocks with this language tag.
    pub language: Option<String>,
    /// Keep only blocks whose code matches this pattern.
    pub regex: Option<String>,
    /// Emit exactly these named blocks, in this order.
    pub order: Option<Vec<String>>,
}

/// Turns the code blocks of a list of markdown sources into one output.
///
/// Filters and ordering are compiled once at construction; a tangler can be
/// reused for any number of runs.
#[derive(Debug, Clone, Default)]
pub struct Tangler {
    filters: Vec<Filter>,
    order: OrderStrategy,
}

impl Tangler {
    /// Creates a tangler with no filters and implicit ordering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tangler from its configuration.
    ///
    /// Empty filter strings are ignored. Fails if the regex does not compile.
    pub fn from_config(config: TanglerConfig) -> Result<Self> {
        let mut tangler = Self::new();

        if let Some(language) = config.language.filter(|l| !l.is_empty()) {
            tangler = tangler.with_filter(Filter::language(language));
        }
        if let Some(pattern) = config.regex.filter(|r| !r.is_empty()) {
            tangler = tangler.with_filter(Filter::regex(&pattern)?);
        }

        Ok(tangler.with_order(OrderStrategy::from_order(config.order)))
    }

    /// Adds a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the ordering strategy.
    pub fn with_order(mut self, order: OrderStrategy) -> Self {
        self.order = order;
        self
    }

    /// Tangles the given source files from the real file system.
    pub fn tangle<P: AsRef<Path>>(&self, sources: &[P]) -> Result<String> {
        self.tangle_with(&RealFileCache, sources)
    }

    /// Tangles the given source files, reading them through `files`.
    pub fn tangle_with<F, P>(&self, files: &F, sources: &[P]) -> Result<String>
    where
        F: FileCache + ?Sized,
        P: AsRef<Path>,
    {
        let mut blocks = Vec::new();
        for source in sources {
            blocks.extend(read_code_blocks(files, source.as_ref())?);
        }
        self.tangle_blocks(blocks)
    }

    /// Filters, orders and concatenates already extracted blocks.
    pub fn tangle_blocks(&self, blocks: Vec<CodeBlock>) -> Result<String> {
        let extracted = blocks.len();
        let filtered = filter_blocks(blocks, &self.filters);
        let kept = filtered.len();
        let ordered = self.order.apply(filtered)?;

        tracing::debug!(
            "{} blocks extracted, {} after filters, {} emitted",
            extracted,
            kept,
            ordered.len()
        );

        Ok(concatenate(&ordered))
    }
}

/// Joins block bodies with a newline and drops one trailing newline.
pub fn concatenate(blocks: &[CodeBlock]) -> String {
    let mut output = blocks
        .iter()
        .map(|block| block.code.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    if output.ends_with('\n') {
        output.pop();
    }
    output
}
