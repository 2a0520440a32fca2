use crate::tree::nodes::NodeId;
use crate::tree::predicate::Predicate;

/// Binary inode: sources passing the predicate go to `true_node`, the rest to `false_node`.
pub struct PredicateInode<S> {
    predicate: Box<dyn Predicate<S>>,
    true_node: NodeId,
    false_node: NodeId,
    maximum_leaf: Option<NodeId>,
}

impl<S> PredicateInode<S> {
    pub(crate) fn new(predicate: Box<dyn Predicate<S>>, true_node: NodeId, false_node: NodeId) -> Self {
        Self {
            predicate,
            true_node,
            false_node,
            maximum_leaf: None,
        }
    }

    pub fn true_node(&self) -> NodeId {
        self.true_node
    }

    pub fn false_node(&self) -> NodeId {
        self.false_node
    }

    pub fn next_hop(&self, source: &S) -> NodeId {
        if self.predicate.evaluate(source) {
            self.true_node
        } else {
            self.false_node
        }
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
