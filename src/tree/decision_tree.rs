use crate::tree::attribute::AttributeRef;
use crate::tree::error::TreeError;
use crate::tree::nodes::{DecisionNode, NodeArena, NodeId};
use crate::tree::predicate::Predicate;
use crate::tree::split_data::SplitData;
use std::sync::Arc;

/// Best expansion candidate of a tree, as reported by [`DecisionTree::best_split`].
#[derive(Debug)]
pub struct SplitProposal<'a> {
    pub leaf: NodeId,
    pub attribute_index: usize,
    pub score: f64,
    pub split_data: &'a SplitData,
}

/// Incremental decision tree over sources of type `S`.
///
/// Sources are routed down to a leaf and buffered there. Each leaf lazily
/// scores every registered source attribute against its buffer, and inodes
/// remember which leaf below them currently scores best. Every mutation clears
/// exactly the caches it can affect, so a query after any sequence of inserts,
/// grafts and registry changes answers as if computed from scratch.
pub struct DecisionTree<S> {
    source_attributes: Vec<AttributeRef<S>>,
    target_attribute: Option<AttributeRef<S>>,
    nodes: NodeArena<S>,
    root: NodeId,
}

impl<S> Default for DecisionTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> DecisionTree<S> {
    pub fn new() -> Self {
        let (nodes, root) = NodeArena::with_root_leaf();
        Self {
            source_attributes: Vec::new(),
            target_attribute: None,
            nodes,
            root,
        }
    }

    pub fn with_target_attribute(target: AttributeRef<S>) -> Self {
        let mut tree = Self::new();
        tree.target_attribute = Some(target);
        tree
    }

    pub fn target_attribute(&self) -> Option<&AttributeRef<S>> {
        self.target_attribute.as_ref()
    }

    pub fn set_target_attribute(&mut self, target: Option<AttributeRef<S>>) {
        self.target_attribute = target;
    }

    pub fn source_attributes(&self) -> &[AttributeRef<S>] {
        &self.source_attributes
    }

    pub fn add_source_attribute(&mut self, attribute: AttributeRef<S>) {
        self.source_attributes.push(attribute);
        self.nodes.make_dirty(self.root);
    }

    /// Removes the first registered entry that is the same attribute object as
    /// `attribute`. Returns whether anything was removed; the tree is
    /// invalidated either way.
    pub fn remove_source_attribute(&mut self, attribute: &AttributeRef<S>) -> bool {
        let position = self
            .source_attributes
            .iter()
            .position(|registered| Arc::ptr_eq(registered, attribute));
        if let Some(position) = position {
            self.source_attributes.remove(position);
        }
        self.nodes.make_dirty(self.root);
        position.is_some()
    }

    pub fn insert(&mut self, source: S) {
        self.nodes.insert(self.root, source);
    }

    /// Drops every cached score. Buffered sources are kept.
    pub fn reduce_memory(&mut self) {
        self.nodes.make_dirty(self.root);
    }

    /// Invalidates the subtree at `id` and the maximum-leaf caches of its ancestors.
    pub fn make_dirty(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.check(id)?;
        self.nodes.make_dirty(id);
        if let Some(parent) = self.nodes.parent(id) {
            self.nodes.forget_maximum_leaves_from(parent);
        }
        Ok(())
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&DecisionNode<S>> {
        self.nodes.get(id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.parent(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaves(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|(_, node)| node.is_leaf()).count()
    }

    /// Number of sources currently buffered across all leaves.
    pub fn buffered_len(&self) -> usize {
        self.nodes
            .iter()
            .filter_map(|(_, node)| node.as_leaf())
            .map(|leaf| leaf.len())
            .sum()
    }

    /// One routing step from `id`. May grow a new branch on an enumerable inode.
    pub fn next_hop(&mut self, id: NodeId, source: &S) -> Result<NodeId, TreeError> {
        self.check(id)?;
        Ok(self.nodes.next_hop(id, source))
    }

    /// Leaf that `source` would be buffered in. Like an insert, this grows a
    /// branch when an enumerable inode meets an unseen value.
    pub fn route(&mut self, source: &S) -> NodeId {
        self.nodes.descend(self.root, source)
    }

    pub fn expand_score(&mut self) -> f64 {
        self.nodes.expand_score(self.root, &self.source_attributes)
    }

    pub fn subtree_expand_score(&mut self, id: NodeId) -> Result<f64, TreeError> {
        self.check(id)?;
        Ok(self.nodes.expand_score(id, &self.source_attributes))
    }

    pub fn maximum_leaf(&mut self) -> Option<NodeId> {
        self.nodes.maximum_leaf(self.root, &self.source_attributes)
    }

    pub fn subtree_maximum_leaf(&mut self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.check(id)?;
        Ok(self.nodes.maximum_leaf(id, &self.source_attributes))
    }

    /// The leaf that should be expanded next, with the attribute and split
    /// metadata behind its score.
    pub fn best_split(&mut self) -> Result<SplitProposal<'_>, TreeError> {
        let Some(leaf) = self.maximum_leaf() else {
            return Err(TreeError::NoSplitCandidate { leaf: self.root });
        };
        let score = self.nodes.leaf_score(leaf, &self.source_attributes);
        let Some(scored) = self.nodes.get(leaf).and_then(DecisionNode::as_leaf) else {
            return Err(TreeError::NotALeaf(leaf));
        };
        let Some(attribute_index) = scored.split_index() else {
            return Err(TreeError::NoSplitCandidate { leaf });
        };
        Ok(SplitProposal {
            leaf,
            attribute_index,
            score,
            split_data: scored.split_data(),
        })
    }

    /// Replaces the leaf `at` by a predicate inode with two fresh leaves and
    /// re-routes the buffered sources through it. Returns `(true, false)` children.
    pub fn graft_predicate<P>(&mut self, at: NodeId, predicate: P) -> Result<(NodeId, NodeId), TreeError>
    where
        P: Predicate<S> + 'static,
    {
        self.nodes.graft_predicate(at, Box::new(predicate))
    }

    /// Replaces the leaf `at` by an enumerable inode over `attribute` and
    /// re-routes the buffered sources through it.
    pub fn graft_enumerable(&mut self, at: NodeId, attribute: AttributeRef<S>) -> Result<(), TreeError> {
        self.nodes.graft_enumerable(at, attribute)
    }

    pub fn expand(&mut self, at: NodeId) -> Result<NodeId, TreeError> {
        match self.nodes.get(at) {
            None => Err(TreeError::UnknownNode(at)),
            Some(DecisionNode::Leaf(leaf)) => leaf.expand().map(|_| at),
            Some(_) => Err(TreeError::NotALeaf(at)),
        }
    }

    fn check(&self, id: NodeId) -> Result<(), TreeError> {
        if self.nodes.contains(id) {
            Ok(())
        } else {
            Err(TreeError::UnknownNode(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ConstantScoreAttribute, ScoringSpyAttribute};
    use crate::tree::SplitData;
    use crate::tree::attribute::ObjectAttribute;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Scores a batch by the share of sources whose bit `bit` is set, and
    /// routes on that same bit.
    struct BitAttribute {
        bit: u32,
    }

    impl ObjectAttribute<u32> for BitAttribute {
        type Value = bool;

        fn name(&self) -> String {
            format!("bit{}", self.bit)
        }

        fn evaluate(&self, source: &u32) -> bool {
            source & (1 << self.bit) != 0
        }

        fn calculate_score(&self, sources: &[u32], split: &mut SplitData) -> f64 {
            let set = sources.iter().filter(|s| self.evaluate(s)).count();
            split.set(self.bit);
            set as f64 / sources.len() as f64
        }
    }

    fn sum_attribute(name: &str) -> (AttributeRef<i32>, crate::testing::ScoringSpyHandle) {
        let (spy, handle) = ScoringSpyAttribute::new(name, |s: &[i32]| {
            s.iter().map(|&x| x as f64).sum::<f64>()
        });
        (Arc::new(spy), handle)
    }

    fn negated_sum_attribute(name: &str) -> AttributeRef<i32> {
        let (spy, _) = ScoringSpyAttribute::new(name, |s: &[i32]| {
            -s.iter().map(|&x| x as f64).sum::<f64>()
        });
        Arc::new(spy)
    }

    fn leaf_of(tree: &DecisionTree<i32>, id: NodeId) -> &crate::tree::DecisionLeaf<i32> {
        tree.node(id).and_then(DecisionNode::as_leaf).unwrap()
    }

    #[test]
    fn new_tree_is_a_single_empty_leaf() {
        let mut tree: DecisionTree<i32> = DecisionTree::new();
        assert_eq!(tree.node_count(), 1);
        assert!(tree.node(tree.root()).unwrap().is_leaf());
        assert_eq!(tree.maximum_leaf(), Some(tree.root()));
        assert_eq!(tree.expand_score(), f64::NEG_INFINITY);
        assert!(matches!(
            tree.best_split(),
            Err(TreeError::NoSplitCandidate { .. })
        ));
    }

    #[test]
    fn root_score_is_best_attribute_over_all_inserts() {
        let (a, _) = sum_attribute("a");
        let b = negated_sum_attribute("b");
        let mut tree = DecisionTree::new();
        tree.add_source_attribute(a);
        tree.add_source_attribute(b);

        for x in [1, 2, 3] {
            tree.insert(x);
        }

        assert_eq!(tree.expand_score(), 6.0);
        let root = tree.root();
        let proposal = tree.best_split().unwrap();
        assert_eq!(proposal.leaf, root);
        assert_eq!(proposal.attribute_index, 0);
        assert_eq!(proposal.score, 6.0);
        assert_eq!(proposal.split_data.get::<String>(), Some(&"a".to_string()));
    }

    #[test]
    fn equal_attributes_pick_the_first() {
        let mut tree: DecisionTree<i32> = DecisionTree::new();
        tree.add_source_attribute(Arc::new(ConstantScoreAttribute::new("a", 0.5)));
        tree.add_source_attribute(Arc::new(ConstantScoreAttribute::new("b", 0.5)));
        for x in [1, 2, 3] {
            tree.insert(x);
        }
        assert_eq!(tree.best_split().unwrap().attribute_index, 0);
    }

    #[test]
    fn removing_the_winning_attribute_rescores_with_the_rest() {
        let (a, _) = sum_attribute("a");
        let b = negated_sum_attribute("b");
        let mut tree = DecisionTree::new();
        tree.add_source_attribute(a.clone());
        tree.add_source_attribute(b);
        for x in [1, 2, 3] {
            tree.insert(x);
        }
        assert_eq!(tree.expand_score(), 6.0);

        assert!(tree.remove_source_attribute(&a));
        assert_eq!(tree.expand_score(), -6.0);
        assert_eq!(tree.best_split().unwrap().attribute_index, 0);
        assert_eq!(
            tree.best_split().unwrap().split_data.get::<String>(),
            Some(&"b".to_string())
        );
    }

    #[test]
    fn removing_an_unregistered_attribute_reports_false() {
        let (a, _) = sum_attribute("a");
        let (lookalike, _) = sum_attribute("a");
        let mut tree = DecisionTree::new();
        tree.add_source_attribute(a);
        assert!(!tree.remove_source_attribute(&lookalike));
        assert_eq!(tree.source_attributes().len(), 1);
    }

    #[test]
    fn adding_an_attribute_rescores_cached_leaves() {
        let mut tree: DecisionTree<i32> = DecisionTree::new();
        tree.add_source_attribute(Arc::new(ConstantScoreAttribute::new("low", 0.1)));
        tree.insert(1);
        assert_eq!(tree.expand_score(), 0.1);

        tree.add_source_attribute(Arc::new(ConstantScoreAttribute::new("high", 0.9)));
        assert!(leaf_of(&tree, tree.root()).is_dirty());
        assert_eq!(tree.expand_score(), 0.9);
        assert_eq!(tree.best_split().unwrap().attribute_index, 1);
    }

    #[test]
    fn insert_dirties_only_until_next_query() {
        let (a, handle) = sum_attribute("a");
        let mut tree = DecisionTree::new();
        tree.add_source_attribute(a);
        tree.insert(4);
        let root = tree.root();

        assert!(leaf_of(&tree, root).is_dirty());
        assert_eq!(tree.expand_score(), 4.0);
        assert!(!leaf_of(&tree, root).is_dirty());
        assert_eq!(tree.expand_score(), 4.0);
        assert_eq!(handle.count(), 1);

        tree.insert(5);
        assert!(leaf_of(&tree, root).is_dirty());
        assert_eq!(tree.expand_score(), 9.0);
        assert_eq!(handle.count(), 2);
    }

    #[test]
    fn reduce_memory_keeps_buffers_and_rescores() {
        let (a, handle) = sum_attribute("a");
        let mut tree = DecisionTree::new();
        tree.add_source_attribute(a);
        tree.insert(2);
        tree.insert(3);
        assert_eq!(tree.expand_score(), 5.0);

        tree.reduce_memory();
        tree.reduce_memory();
        assert_eq!(tree.buffered_len(), 2);
        assert_eq!(tree.expand_score(), 5.0);
        assert_eq!(handle.count(), 2);
    }

    #[test]
    fn predicate_graft_routes_buffer_and_picks_better_branch() {
        let (a, _) = sum_attribute("a");
        let mut tree = DecisionTree::new();
        tree.add_source_attribute(a);
        for x in [1, 2, 10, 20] {
            tree.insert(x);
        }

        let root = tree.root();
        let (small, large) = tree.graft_predicate(root, |x: &i32| *x < 5).unwrap();
        assert!(!tree.node(root).unwrap().is_leaf());
        assert_eq!(leaf_of(&tree, small).memory(), &[1, 2]);
        assert_eq!(leaf_of(&tree, large).memory(), &[10, 20]);

        assert_eq!(tree.maximum_leaf(), Some(large));
        assert_eq!(tree.expand_score(), 30.0);
        assert_eq!(tree.parent(small), Some(root));
    }

    #[test]
    fn predicate_ties_prefer_true_branch() {
        let mut tree: DecisionTree<i32> = DecisionTree::new();
        tree.add_source_attribute(Arc::new(ConstantScoreAttribute::new("c", 1.0)));
        let root = tree.root();
        let (yes, no) = tree.graft_predicate(root, |x: &i32| *x > 0).unwrap();
        tree.insert(1);
        tree.insert(-1);

        assert_eq!(tree.maximum_leaf(), Some(yes));
        assert_ne!(tree.maximum_leaf(), Some(no));
    }

    #[test]
    fn insert_into_other_branch_invalidates_ancestor_cache() {
        let (a, _) = sum_attribute("a");
        let mut tree = DecisionTree::new();
        tree.add_source_attribute(a);
        let root = tree.root();
        let (small, large) = tree.graft_predicate(root, |x: &i32| *x < 5).unwrap();

        tree.insert(4);
        tree.insert(6);
        assert_eq!(tree.maximum_leaf(), Some(large));

        tree.insert(3);
        tree.insert(3);
        assert_eq!(tree.maximum_leaf(), Some(small));
        assert_eq!(tree.expand_score(), 10.0);
    }

    #[test]
    fn enumerable_graft_creates_one_leaf_per_value() {
        let parity: AttributeRef<i32> = Arc::new(crate::testing::KeyedAttribute::new(
            "parity",
            |x: &i32| i64::from(x % 2 == 0),
        ));
        let mut tree: DecisionTree<i32> = DecisionTree::new();
        let root = tree.root();
        tree.graft_enumerable(root, parity).unwrap();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.maximum_leaf(), None);
        assert_eq!(tree.expand_score(), f64::NEG_INFINITY);

        let even = tree.route(&2);
        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.route(&4), even);
        assert_eq!(tree.node_count(), 2);

        let odd = tree.route(&3);
        assert_ne!(odd, even);
        assert_eq!(tree.node_count(), 3);
        assert!(leaf_of(&tree, odd).is_empty());

        tree.insert(5);
        assert_eq!(leaf_of(&tree, odd).memory(), &[5]);
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn enumerable_maximum_leaf_ties_resolve_to_first_key() {
        let parity: AttributeRef<i32> = Arc::new(crate::testing::KeyedAttribute::new(
            "parity",
            |x: &i32| i64::from(x % 2 == 0),
        ));
        let mut tree: DecisionTree<i32> = DecisionTree::new();
        tree.add_source_attribute(Arc::new(ConstantScoreAttribute::new("c", 0.5)));
        let root = tree.root();
        tree.graft_enumerable(root, parity).unwrap();

        tree.insert(7);
        tree.insert(8);
        let odd = tree.route(&7);
        assert_eq!(tree.maximum_leaf(), Some(odd));
    }

    #[test]
    fn new_branch_invalidates_cached_maximum() {
        let mod3: AttributeRef<i32> = Arc::new(crate::testing::KeyedAttribute::new(
            "mod3",
            |x: &i32| i64::from(x % 3),
        ));
        let (a, _) = sum_attribute("a");
        let mut tree = DecisionTree::new();
        tree.add_source_attribute(a);
        let root = tree.root();
        tree.graft_enumerable(root, mod3).unwrap();

        tree.insert(3);
        let first = tree.maximum_leaf();
        tree.insert(100);
        let hundred = tree.route(&100);
        assert_ne!(first, Some(hundred));
        assert_eq!(tree.maximum_leaf(), Some(hundred));
    }

    #[test]
    fn grafting_errors_are_structural() {
        let mut tree: DecisionTree<i32> = DecisionTree::new();
        let root = tree.root();
        let missing = NodeId(42);

        assert_eq!(
            tree.graft_predicate(missing, |_: &i32| true),
            Err(TreeError::UnknownNode(missing))
        );
        tree.graft_predicate(root, |_: &i32| true).unwrap();
        assert_eq!(
            tree.graft_predicate(root, |_: &i32| true),
            Err(TreeError::NotALeaf(root))
        );
        assert_eq!(tree.expand(root), Err(TreeError::NotALeaf(root)));
        assert_eq!(tree.expand(missing), Err(TreeError::UnknownNode(missing)));
        assert_eq!(tree.make_dirty(missing), Err(TreeError::UnknownNode(missing)));
    }

    #[test]
    fn make_dirty_on_a_subtree_leaves_siblings_cached() {
        let (a, handle) = sum_attribute("a");
        let mut tree = DecisionTree::new();
        tree.add_source_attribute(a);
        let root = tree.root();
        let (small, large) = tree.graft_predicate(root, |x: &i32| *x < 5).unwrap();
        tree.insert(1);
        tree.insert(9);
        assert_eq!(tree.expand_score(), 9.0);
        assert_eq!(handle.count(), 2);

        tree.make_dirty(small).unwrap();
        tree.make_dirty(small).unwrap();
        assert!(leaf_of(&tree, small).is_dirty());
        assert!(!leaf_of(&tree, large).is_dirty());
        assert_eq!(tree.node(root).unwrap().cached_maximum_leaf(), None);

        assert_eq!(tree.expand_score(), 9.0);
        assert_eq!(handle.count(), 3);
    }

    #[test]
    fn deep_chain_is_scored_on_a_small_stack() {
        let depth: i32 = 10_000;
        let worker = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(move || {
                let (a, _) = sum_attribute("a");
                let mut tree = DecisionTree::new();
                tree.add_source_attribute(a);
                let mut bottom = tree.root();
                for level in 0..depth {
                    let (_, deeper) = tree
                        .graft_predicate(bottom, move |x: &i32| *x < level)
                        .unwrap();
                    bottom = deeper;
                }
                tree.insert(depth + 7);
                let score = tree.expand_score();
                let leaf = tree.maximum_leaf();
                (score, leaf, bottom, tree.node_count())
            })
            .unwrap();

        let (score, leaf, bottom, nodes) = worker.join().unwrap();
        assert_eq!(score, f64::from(depth + 7));
        assert_eq!(leaf, Some(bottom));
        assert_eq!(nodes, 1 + 2 * depth as usize);
    }

    #[test]
    fn expanding_a_leaf_is_unsupported() {
        let mut tree: DecisionTree<i32> = DecisionTree::new();
        let root = tree.root();
        assert!(matches!(tree.expand(root), Err(TreeError::Unsupported(_))));
    }

    #[test]
    fn next_hop_is_a_fixed_point_on_leaves() {
        let mut tree: DecisionTree<i32> = DecisionTree::new();
        let root = tree.root();
        assert_eq!(tree.next_hop(root, &1), Ok(root));
        let (t, f) = tree.graft_predicate(root, |x: &i32| *x > 0).unwrap();
        assert_eq!(tree.next_hop(root, &1), Ok(t));
        assert_eq!(tree.next_hop(root, &-1), Ok(f));
        assert_eq!(tree.next_hop(t, &-1), Ok(t));
    }

    #[test]
    fn best_split_reports_leaf_without_candidate() {
        let mut tree: DecisionTree<i32> = DecisionTree::new();
        tree.add_source_attribute(Arc::new(ConstantScoreAttribute::new("none", f64::NEG_INFINITY)));
        tree.insert(1);
        let root = tree.root();
        assert_eq!(
            tree.best_split().unwrap_err(),
            TreeError::NoSplitCandidate { leaf: root }
        );
    }

    #[test]
    fn target_attribute_is_threaded_through() {
        let target: AttributeRef<i32> = Arc::new(ConstantScoreAttribute::new("label", 0.0));
        let mut tree = DecisionTree::with_target_attribute(target.clone());
        assert!(Arc::ptr_eq(tree.target_attribute().unwrap(), &target));
        tree.set_target_attribute(None);
        assert!(tree.target_attribute().is_none());
    }

    /// Rebuilds every cache from scratch and compares with the cached answer.
    fn assert_cache_is_transparent(tree: &mut DecisionTree<u32>) {
        let cached_leaf = tree.maximum_leaf();
        let cached = tree.expand_score();
        tree.reduce_memory();
        assert_eq!(tree.maximum_leaf(), cached_leaf);
        assert_eq!(tree.expand_score(), cached);
    }

    #[test]
    fn caching_is_transparent_under_random_operations() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let pool: Vec<AttributeRef<u32>> = (0..4)
            .map(|bit| Arc::new(BitAttribute { bit }) as AttributeRef<u32>)
            .collect();

        for _ in 0..20 {
            let mut tree = DecisionTree::new();
            tree.add_source_attribute(pool[0].clone());

            for _ in 0..200 {
                match rng.random_range(0..10) {
                    0 => tree.add_source_attribute(pool[rng.random_range(0..pool.len())].clone()),
                    1 => {
                        let attribute = pool[rng.random_range(0..pool.len())].clone();
                        tree.remove_source_attribute(&attribute);
                    }
                    2 => {
                        let leaves = tree.leaves();
                        if leaves.is_empty() {
                            continue;
                        }
                        let leaf = leaves[rng.random_range(0..leaves.len())];
                        let bit = rng.random_range(4..8u32);
                        if rng.random_bool(0.5) {
                            tree.graft_predicate(leaf, move |x: &u32| x & (1 << bit) != 0)
                                .unwrap();
                        } else {
                            tree.graft_enumerable(leaf, Arc::new(BitAttribute { bit }))
                                .unwrap();
                        }
                    }
                    3 => {
                        tree.expand_score();
                    }
                    _ => tree.insert(rng.random_range(0..256)),
                }
                if rng.random_bool(0.3) {
                    assert_cache_is_transparent(&mut tree);
                }
            }
            assert_cache_is_transparent(&mut tree);
        }
    }

    #[test]
    fn routing_is_deterministic_for_a_fixed_shape() {
        let mut tree: DecisionTree<u32> = DecisionTree::new();
        let root = tree.root();
        tree.graft_enumerable(root, Arc::new(BitAttribute { bit: 0 })).unwrap();
        for x in 0..16 {
            tree.insert(x);
        }
        let shape = tree.node_count();
        for x in 0..16 {
            assert_eq!(tree.route(&x), tree.route(&x));
        }
        assert_eq!(tree.node_count(), shape);
    }
}
