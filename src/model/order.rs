//! Ordering policies that turn filtered blocks into output order.

use std::collections::HashMap;

use super::code_block::CodeBlock;
use crate::errors::{Result, TangleError};

/// How filtered blocks are arranged in the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OrderStrategy {
    /// Document order, where a repeated name overrides the earlier block in
    /// place.
    #[default]
    Implicit,
    /// Exactly the named blocks, in the listed order.
    Explicit(Vec<String>),
}

impl OrderStrategy {
    /// Picks the strategy for an optional order list.
    ///
    /// A missing or empty list selects implicit ordering.
    pub fn from_order(order: Option<Vec<String>>) -> Self {
        match order {
            Some(names) if !names.is_empty() => Self::Explicit(names),
            _ => Self::Implicit,
        }
    }

    /// Arranges the blocks according to this strategy.
    pub fn apply(&self, blocks: Vec<CodeBlock>) -> Result<Vec<CodeBlock>> {
        match self {
            Self::Implicit => Ok(order_blocks(blocks)),
            Self::Explicit(order) => explicitly_order_blocks(blocks, order),
        }
    }
}

/// Orders blocks by first appearance of each name.
///
/// Unnamed blocks are always appended. A named block seen for the first
/// time is appended and its index remembered; a later block with the same
/// name replaces the block at that index.
pub fn order_blocks(blocks: Vec<CodeBlock>) -> Vec<CodeBlock> {
    let mut ordered: Vec<CodeBlock> = Vec::with_capacity(blocks.len());
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for block in blocks {
        let Some(name) = block.name().map(str::to_string) else {
            ordered.push(block);
            continue;
        };

        if let Some(&index) = index_by_name.get(&name) {
            ordered[index] = block;
            continue;
        }
        index_by_name.insert(name, ordered.len());
        ordered.push(block);
    }

    ordered
}

/// Selects the named blocks listed in `order`, in that order.
///
/// If a name occurs more than once among the blocks, the last occurrence is
/// used. Fails on the first listed name that has no block.
pub fn explicitly_order_blocks(blocks: Vec<CodeBlock>, order: &[String]) -> Result<Vec<CodeBlock>> {
    let mut blocks_by_name: HashMap<String, CodeBlock> = HashMap::new();
    for block in blocks {
        if let Some(name) = block.name().map(str::to_string) {
            blocks_by_name.insert(name, block);
        }
    }

    order
        .iter()
        .map(|name| {
            blocks_by_name
                .get(name)
                .cloned()
                .ok_or_else(|| TangleError::UnknownBlockName(name.clone()))
        })
        .collect()
}
