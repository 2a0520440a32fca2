mod decision_leaf;
mod enumerable_inode;
mod node;
mod node_arena;
mod predicate_inode;

pub use decision_leaf::DecisionLeaf;
pub use enumerable_inode::EnumerableInode;
pub use node::{DecisionNode, NodeId};
pub(crate) use node_arena::NodeArena;
pub use predicate_inode::PredicateInode;
