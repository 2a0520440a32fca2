use crate::tree::attribute::AttributeRef;
use crate::tree::error::TreeError;
use crate::tree::nodes::DecisionNode;
use crate::tree::split_data::SplitData;

/// Leaf buffering the sources routed to it until someone decides to split it.
///
/// The best split score over the registered attributes is computed lazily and
/// cached; any insert or explicit [`DecisionLeaf::make_dirty`] drops the cache.
pub struct DecisionLeaf<S> {
    memory: Vec<S>,
    score: Option<f64>,
    split_index: Option<usize>,
    split_data: SplitData,
}

impl<S> Default for DecisionLeaf<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> DecisionLeaf<S> {
    pub fn new() -> Self {
        Self {
            memory: Vec::new(),
            score: None,
            split_index: None,
            split_data: SplitData::new(),
        }
    }

    pub fn memory(&self) -> &[S] {
        &self.memory
    }

    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.score.is_none()
    }

    pub fn cached_score(&self) -> Option<f64> {
        self.score
    }

    /// Index, in the tree's attribute registry, of the attribute behind the cached score.
    /// `None` while dirty or when no attribute produced a usable split.
    pub fn split_index(&self) -> Option<usize> {
        self.split_index
    }

    pub fn split_data(&self) -> &SplitData {
        &self.split_data
    }

    pub fn make_dirty(&mut self) {
        self.score = None;
        self.split_index = None;
        self.split_data.clear();
    }

    pub fn insert(&mut self, source: S) {
        self.make_dirty();
        self.memory.push(source);
    }

    pub fn expand_score(&mut self, attributes: &[AttributeRef<S>]) -> f64 {
        if let Some(score) = self.score {
            return score;
        }
        let score = self.calculate_score(attributes);
        self.score = Some(score);
        score
    }

    /// Turning a scored leaf into an inode is left to the caller, see
    /// `DecisionTree::graft_predicate` and `DecisionTree::graft_enumerable`.
    pub fn expand(&self) -> Result<DecisionNode<S>, TreeError> {
        Err(TreeError::Unsupported("leaf expansion"))
    }

    pub(crate) fn take_memory(&mut self) -> Vec<S> {
        self.make_dirty();
        std::mem::take(&mut self.memory)
    }

    fn calculate_score(&mut self, attributes: &[AttributeRef<S>]) -> f64 {
        let mut max_score = f64::NEG_INFINITY;
        let mut max_index = None;
        self.split_data.clear();

        if self.memory.is_empty() {
            self.split_index = None;
            return max_score;
        }

        let mut current = SplitData::new();
        for (i, attribute) in attributes.iter().enumerate() {
            let score = attribute.calculate_score(&self.memory, &mut current);
            if score > max_score {
                max_score = score;
                max_index = Some(i);
                self.split_data.copy_from(&current);
            }
        }

        self.split_index = max_index;
        max_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ConstantScoreAttribute, ScoringSpyAttribute};
    use std::sync::Arc;

    fn attributes(scores: &[(&str, f64)]) -> Vec<AttributeRef<i32>> {
        scores
            .iter()
            .map(|(name, score)| {
                Arc::new(ConstantScoreAttribute::new(name, *score)) as AttributeRef<i32>
            })
            .collect()
    }

    #[test]
    fn new_leaf_is_dirty_and_empty() {
        let leaf: DecisionLeaf<i32> = DecisionLeaf::new();
        assert!(leaf.is_dirty());
        assert!(leaf.is_empty());
        assert_eq!(leaf.split_index(), None);
        assert!(leaf.split_data().is_empty());
    }

    #[test]
    fn empty_leaf_scores_negative_infinity_without_calling_scorers() {
        let (spy, handle) = ScoringSpyAttribute::new("spy", |_: &[i32]| 1.0);
        let attributes: Vec<AttributeRef<i32>> = vec![Arc::new(spy)];
        let mut leaf = DecisionLeaf::new();

        assert_eq!(leaf.expand_score(&attributes), f64::NEG_INFINITY);
        assert_eq!(leaf.split_index(), None);
        assert!(leaf.split_data().is_empty());
        assert_eq!(handle.count(), 0);
    }

    #[test]
    fn best_attribute_wins_and_its_data_is_kept() {
        let attributes = attributes(&[("a", 0.2), ("b", 0.7), ("c", 0.5)]);
        let mut leaf = DecisionLeaf::new();
        leaf.insert(1);

        assert_eq!(leaf.expand_score(&attributes), 0.7);
        assert_eq!(leaf.split_index(), Some(1));
        assert_eq!(leaf.split_data().get::<String>(), Some(&"b".to_string()));
    }

    #[test]
    fn ties_favour_earliest_attribute() {
        let attributes = attributes(&[("a", 0.4), ("b", 0.4)]);
        let mut leaf = DecisionLeaf::new();
        leaf.insert(1);

        assert_eq!(leaf.expand_score(&attributes), 0.4);
        assert_eq!(leaf.split_index(), Some(0));
        assert_eq!(leaf.split_data().get::<String>(), Some(&"a".to_string()));
    }

    #[test]
    fn no_usable_attribute_leaves_no_candidate() {
        let attributes = attributes(&[("a", f64::NEG_INFINITY), ("b", f64::NAN)]);
        let mut leaf = DecisionLeaf::new();
        leaf.insert(1);

        assert_eq!(leaf.expand_score(&attributes), f64::NEG_INFINITY);
        assert_eq!(leaf.split_index(), None);
        assert!(leaf.split_data().is_empty());
        assert!(!leaf.is_dirty());
    }

    #[test]
    fn score_is_cached_until_insert() {
        let (spy, handle) = ScoringSpyAttribute::new("len", |s: &[i32]| s.len() as f64);
        let attributes: Vec<AttributeRef<i32>> = vec![Arc::new(spy)];
        let mut leaf = DecisionLeaf::new();
        leaf.insert(1);

        assert_eq!(leaf.expand_score(&attributes), 1.0);
        assert_eq!(leaf.expand_score(&attributes), 1.0);
        assert_eq!(handle.count(), 1);

        leaf.insert(2);
        assert!(leaf.is_dirty());
        assert_eq!(leaf.expand_score(&attributes), 2.0);
        assert!(!leaf.is_dirty());
        assert_eq!(handle.count(), 2);
    }

    #[test]
    fn make_dirty_twice_matches_once() {
        let attributes = attributes(&[("a", 0.3)]);
        let mut leaf = DecisionLeaf::new();
        leaf.insert(1);
        let first = leaf.expand_score(&attributes);

        leaf.make_dirty();
        leaf.make_dirty();
        assert!(leaf.is_dirty());
        assert_eq!(leaf.expand_score(&attributes), first);
        assert_eq!(leaf.split_index(), Some(0));
    }

    #[test]
    fn expand_is_unsupported() {
        let leaf: DecisionLeaf<i32> = DecisionLeaf::new();
        assert!(matches!(leaf.expand(), Err(TreeError::Unsupported(_))));
    }

    #[test]
    fn take_memory_drains_and_dirties() {
        let attributes = attributes(&[("a", 0.3)]);
        let mut leaf = DecisionLeaf::new();
        leaf.insert(4);
        leaf.insert(5);
        leaf.expand_score(&attributes);

        assert_eq!(leaf.take_memory(), vec![4, 5]);
        assert!(leaf.is_empty());
        assert!(leaf.is_dirty());
    }
}
