use crate::tree::{ObjectAttribute, SplitData};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

pub struct ScoringSpyHandle(Arc<AtomicUsize>);
impl ScoringSpyHandle {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

type ScoreFn<S> = Box<dyn Fn(&[S]) -> f64 + Send + Sync>;

/// Scores with a caller-supplied closure and counts how often it was asked to.
/// Stores its own name as split data.
pub struct ScoringSpyAttribute<S> {
    name: String,
    score: ScoreFn<S>,
    calls: Arc<AtomicUsize>,
}

impl<S> ScoringSpyAttribute<S> {
    pub fn new<F>(name: &str, score: F) -> (Self, ScoringSpyHandle)
    where
        F: Fn(&[S]) -> f64 + Send + Sync + 'static,
    {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                name: name.to_string(),
                score: Box::new(score),
                calls: calls.clone(),
            },
            ScoringSpyHandle(calls),
        )
    }
}

impl<S> ObjectAttribute<S> for ScoringSpyAttribute<S> {
    type Value = ();

    fn name(&self) -> String {
        self.name.clone()
    }

    fn evaluate(&self, _source: &S) {}

    fn calculate_score(&self, sources: &[S], split: &mut SplitData) -> f64 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        split.set(self.name.clone());
        (self.score)(sources)
    }
}
