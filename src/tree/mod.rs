mod attribute;
mod decision_tree;
mod error;
pub mod nodes;
mod predicate;
mod split_data;

pub use attribute::{AttributeKey, AttributeRef, ObjectAttribute, SourceAttribute};
pub use decision_tree::{DecisionTree, SplitProposal};
pub use error::TreeError;
pub use nodes::{DecisionLeaf, DecisionNode, EnumerableInode, NodeId, PredicateInode};
pub use predicate::Predicate;
pub use split_data::SplitData;
