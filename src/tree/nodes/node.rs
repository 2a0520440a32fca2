use crate::tree::nodes::{DecisionLeaf, EnumerableInode, PredicateInode};
use std::fmt;

/// Handle of a node inside the arena of the tree that created it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub enum DecisionNode<S> {
    Leaf(DecisionLeaf<S>),
    Predicate(PredicateInode<S>),
    Enumerable(EnumerableInode<S>),
}

impl<S> DecisionNode<S> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, DecisionNode::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&DecisionLeaf<S>> {
        match self {
            DecisionNode::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    pub(crate) fn as_leaf_mut(&mut self) -> Option<&mut DecisionLeaf<S>> {
        match self {
            DecisionNode::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// Children in branch order: `true` before `false` for predicates, key
    /// insertion order for enumerables. Leaves have none.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            DecisionNode::Leaf(_) => Vec::new(),
            DecisionNode::Predicate(inode) => vec![inode.true_node(), inode.false_node()],
            DecisionNode::Enumerable(inode) => inode.children().collect(),
        }
    }

    pub fn cached_maximum_leaf(&self) -> Option<NodeId> {
        match self {
            DecisionNode::Leaf(_) => None,
            DecisionNode::Predicate(inode) => inode.cached_maximum_leaf(),
            DecisionNode::Enumerable(inode) => inode.cached_maximum_leaf(),
        }
    }

    pub(crate) fn remember_maximum_leaf(&mut self, leaf: NodeId) {
        match self {
            DecisionNode::Leaf(_) => {}
            DecisionNode::Predicate(inode) => inode.remember_maximum_leaf(leaf),
            DecisionNode::Enumerable(inode) => inode.remember_maximum_leaf(leaf),
        }
    }

    pub(crate) fn forget_maximum_leaf(&mut self) {
        match self {
            DecisionNode::Leaf(_) => {}
            DecisionNode::Predicate(inode) => inode.forget_maximum_leaf(),
            DecisionNode::Enumerable(inode) => inode.forget_maximum_leaf(),
        }
    }
}

impl<S> fmt::Debug for DecisionNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionNode::Leaf(leaf) => f
                .debug_struct("Leaf")
                .field("buffered", &leaf.len())
                .field("score", &leaf.cached_score())
                .field("split_index", &leaf.split_index())
                .finish(),
            DecisionNode::Predicate(inode) => f
                .debug_struct("Predicate")
                .field("true_node", &inode.true_node())
                .field("false_node", &inode.false_node())
                .field("maximum_leaf", &inode.cached_maximum_leaf())
                .finish(),
            DecisionNode::Enumerable(inode) => f
                .debug_struct("Enumerable")
                .field("attribute", &inode.attribute().name())
                .field("branches", &inode.len())
                .field("maximum_leaf", &inode.cached_maximum_leaf())
                .finish(),
        }
    }
}
