use crate::tree::attribute::AttributeRef;
use crate::tree::error::TreeError;
use crate::tree::nodes::{DecisionLeaf, DecisionNode, EnumerableInode, NodeId, PredicateInode};
use crate::tree::predicate::Predicate;

struct Slot<S> {
    parent: Option<NodeId>,
    node: DecisionNode<S>,
}

/// Owns every node of a tree. Nodes refer to each other by [`NodeId`]; slots
/// are never freed, a grafted leaf keeps its id and becomes an inode.
pub(crate) struct NodeArena<S> {
    slots: Vec<Slot<S>>,
}

impl<S> NodeArena<S> {
    pub(crate) fn with_root_leaf() -> (Self, NodeId) {
        let mut arena = NodeArena { slots: Vec::new() };
        let root = arena.push(None, DecisionNode::Leaf(DecisionLeaf::new()));
        (arena, root)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        id.0 < self.slots.len()
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&DecisionNode<S>> {
        self.slots.get(id.0).map(|slot| &slot.node)
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|slot| slot.parent)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (NodeId, &DecisionNode<S>)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (NodeId(i), &slot.node))
    }

    fn push(&mut self, parent: Option<NodeId>, node: DecisionNode<S>) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot { parent, node });
        id
    }

    /// One routing step. Leaves route to themselves; an enumerable inode that
    /// meets an unseen value grows a new empty leaf for it.
    pub(crate) fn next_hop(&mut self, id: NodeId, source: &S) -> NodeId {
        let unseen = match &self.slots[id.0].node {
            DecisionNode::Leaf(_) => return id,
            DecisionNode::Predicate(inode) => return inode.next_hop(source),
            DecisionNode::Enumerable(inode) => {
                let key = inode.key_for(source);
                match inode.child(&key) {
                    Some(child) => return child,
                    None => key,
                }
            }
        };

        let child = self.push(Some(id), DecisionNode::Leaf(DecisionLeaf::new()));
        if let DecisionNode::Enumerable(inode) = &mut self.slots[id.0].node {
            inode.insert_child(unseen, child);
        }
        self.forget_maximum_leaves_from(id);
        child
    }

    /// Follows `next_hop` from `from` until it reaches a leaf.
    pub(crate) fn descend(&mut self, from: NodeId, source: &S) -> NodeId {
        let mut current = from;
        loop {
            let next = self.next_hop(current, source);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    pub(crate) fn insert(&mut self, from: NodeId, source: S) -> NodeId {
        let leaf = self.descend(from, &source);
        if let Some(target) = self.slots[leaf.0].node.as_leaf_mut() {
            target.insert(source);
        }
        if let Some(parent) = self.slots[leaf.0].parent {
            self.forget_maximum_leaves_from(parent);
        }
        leaf
    }

    /// Drops every cached score and maximum leaf in the subtree rooted at `id`.
    pub(crate) fn make_dirty(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let node = &mut self.slots[current.0].node;
            pending.extend(node.children());
            match node {
                DecisionNode::Leaf(leaf) => leaf.make_dirty(),
                DecisionNode::Predicate(inode) => inode.forget_maximum_leaf(),
                DecisionNode::Enumerable(inode) => inode.forget_maximum_leaf(),
            }
        }
    }

    /// Clears the maximum-leaf cache of `id` and of all its ancestors.
    pub(crate) fn forget_maximum_leaves_from(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(node) = current {
            let slot = &mut self.slots[node.0];
            slot.node.forget_maximum_leaf();
            current = slot.parent;
        }
    }

    pub(crate) fn leaf_score(&mut self, leaf: NodeId, attributes: &[AttributeRef<S>]) -> f64 {
        match self.slots[leaf.0].node.as_leaf_mut() {
            Some(leaf) => leaf.expand_score(attributes),
            None => f64::NEG_INFINITY,
        }
    }

    pub(crate) fn expand_score(&mut self, id: NodeId, attributes: &[AttributeRef<S>]) -> f64 {
        match self.maximum_leaf(id, attributes) {
            Some(leaf) => self.leaf_score(leaf, attributes),
            None => f64::NEG_INFINITY,
        }
    }

    /// The leaf of the subtree with the highest expand score. `None` only for
    /// an enumerable inode that has not routed anything yet.
    ///
    /// Walks the stale part of the subtree in post-order with an explicit
    /// stack, so every child cache is filled before its parent compares them.
    pub(crate) fn maximum_leaf(
        &mut self,
        id: NodeId,
        attributes: &[AttributeRef<S>],
    ) -> Option<NodeId> {
        let node = &self.slots[id.0].node;
        if node.is_leaf() {
            return Some(id);
        }
        if let Some(cached) = node.cached_maximum_leaf() {
            return Some(cached);
        }

        let mut pending = vec![(id, false)];
        while let Some((current, children_done)) = pending.pop() {
            let node = &self.slots[current.0].node;
            if node.is_leaf() || node.cached_maximum_leaf().is_some() {
                continue;
            }
            if children_done {
                if let Some(leaf) = self.recalc_maximum_leaf(current, attributes) {
                    self.slots[current.0].node.remember_maximum_leaf(leaf);
                }
            } else {
                let children = node.children();
                pending.push((current, true));
                pending.extend(children.into_iter().map(|child| (child, false)));
            }
        }
        self.slots[id.0].node.cached_maximum_leaf()
    }

    // Expects every inode child to be up to date already. Children are visited
    // in branch order and only a strictly better score replaces the current
    // best, so the first branch wins ties.
    fn recalc_maximum_leaf(&mut self, id: NodeId, attributes: &[AttributeRef<S>]) -> Option<NodeId> {
        let children = self.slots[id.0].node.children();
        let mut best: Option<(NodeId, f64)> = None;
        for child in children {
            let node = &self.slots[child.0].node;
            let candidate = if node.is_leaf() {
                Some(child)
            } else {
                node.cached_maximum_leaf()
            };
            let Some(leaf) = candidate else {
                continue;
            };
            let score = self.leaf_score(leaf, attributes);
            match best {
                Some((_, max)) if score <= max => {}
                _ => best = Some((leaf, score)),
            }
        }
        best.map(|(leaf, _)| leaf)
    }

    pub(crate) fn graft_predicate(
        &mut self,
        at: NodeId,
        predicate: Box<dyn Predicate<S>>,
    ) -> Result<(NodeId, NodeId), TreeError> {
        let memory = self.take_leaf_memory(at)?;
        let true_node = self.push(Some(at), DecisionNode::Leaf(DecisionLeaf::new()));
        let false_node = self.push(Some(at), DecisionNode::Leaf(DecisionLeaf::new()));
        self.slots[at.0].node =
            DecisionNode::Predicate(PredicateInode::new(predicate, true_node, false_node));
        self.reinsert(at, memory);
        Ok((true_node, false_node))
    }

    pub(crate) fn graft_enumerable(
        &mut self,
        at: NodeId,
        attribute: AttributeRef<S>,
    ) -> Result<(), TreeError> {
        let memory = self.take_leaf_memory(at)?;
        self.slots[at.0].node = DecisionNode::Enumerable(EnumerableInode::new(attribute));
        self.reinsert(at, memory);
        Ok(())
    }

    fn take_leaf_memory(&mut self, at: NodeId) -> Result<Vec<S>, TreeError> {
        match self.slots.get_mut(at.0).map(|slot| &mut slot.node) {
            None => Err(TreeError::UnknownNode(at)),
            Some(DecisionNode::Leaf(leaf)) => Ok(leaf.take_memory()),
            Some(_) => Err(TreeError::NotALeaf(at)),
        }
    }

    fn reinsert(&mut self, at: NodeId, memory: Vec<S>) {
        for source in memory {
            self.insert(at, source);
        }
        self.forget_maximum_leaves_from(at);
    }
}
