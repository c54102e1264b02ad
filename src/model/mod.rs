//! Core model types for tangling.

mod code_block;
mod filter;
mod order;
mod tangle;

pub use code_block::CodeBlock;
pub use filter::{all_filters, filter_blocks, Filter};
pub use order::{explicitly_order_blocks, order_blocks, OrderStrategy};
pub use tangle::{concatenate, Tangler, TanglerConfig};
