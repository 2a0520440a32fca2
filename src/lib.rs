//! Incremental decision-tree induction: instances are buffered at the leaves,
//! every leaf lazily ranks the candidate splits of its buffer, and the tree
//! reports which leaf is the most promising one to expand.

pub mod core;
pub mod growth;
pub mod scoring;
pub mod streams;
pub mod tasks;
pub mod tree;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
