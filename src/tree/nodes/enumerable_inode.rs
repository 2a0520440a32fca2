use crate::tree::attribute::{AttributeKey, AttributeRef};
use crate::tree::nodes::NodeId;
use std::collections::HashMap;

/// Multi-way inode with one child per observed value of its attribute.
///
/// Branches are kept in the order their keys were first seen; that order is
/// also the tie-break order when choosing the maximum leaf.
pub struct EnumerableInode<S> {
    attribute: AttributeRef<S>,
    branches: Vec<(AttributeKey, NodeId)>,
    positions: HashMap<AttributeKey, usize>,
    maximum_leaf: Option<NodeId>,
}

impl<S> EnumerableInode<S> {
    pub(crate) fn new(attribute: AttributeRef<S>) -> Self {
        Self {
            attribute,
            branches: Vec::new(),
            positions: HashMap::new(),
            maximum_leaf: None,
        }
    }

    pub fn attribute(&self) -> &AttributeRef<S> {
        &self.attribute
    }

    pub fn key_for(&self, source: &S) -> AttributeKey {
        self.attribute.evaluate_key(source)
    }

    pub fn child(&self, key: &AttributeKey) -> Option<NodeId> {
        self.positions.get(key).map(|&pos| self.branches[pos].1)
    }

    pub fn branches(&self) -> impl Iterator<Item = (&AttributeKey, NodeId)> + '_ {
        self.branches.iter().map(|(key, child)| (key, *child))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.branches.iter().map(|(_, child)| *child)
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub(crate) fn insert_child(&mut self, key: AttributeKey, child: NodeId) {
        debug_assert!(!self.positions.contains_key(&key), "branch key inserted twice");
        self.positions.insert(key.clone(), self.branches.len());
        self.branches.push((key, child));
    }

    pub fn cached_maximum_leaf(&self) -> Option<NodeId> {
        self.maximum_leaf
    }

    pub(crate) fn remember_maximum_leaf(&mut self, leaf: NodeId) {
        self.maximum_leaf = Some(leaf);
    }

    pub(crate) fn forget_maximum_leaf(&mut self) {
        self.maximum_leaf = None;
    }
}
