use crate::tree::{ObjectAttribute, SplitData};

/// Gives every batch the same score and routes every source to the same key.
pub struct ConstantScoreAttribute {
    name: String,
    score: f64,
}

impl ConstantScoreAttribute {
    pub fn new(name: &str, score: f64) -> Self {
        Self {
            name: name.to_string(),
            score,
        }
    }
}

impl<S> ObjectAttribute<S> for ConstantScoreAttribute {
    type Value = ();

    fn name(&self) -> String {
        self.name.clone()
    }

    fn evaluate(&self, _source: &S) {}

    fn calculate_score(&self, _sources: &[S], split: &mut SplitData) -> f64 {
        split.set(self.name.clone());
        self.score
    }
}
