#![warn(missing_docs)]
//! Blocks, containers and the in-memory world the sorting engine runs against.

mod block;
mod inventory;
mod range;
mod storage;

pub use block::*;
pub use inventory::*;
pub use range::*;
pub use storage::*;
