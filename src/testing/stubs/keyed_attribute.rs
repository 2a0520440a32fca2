use crate::tree::{ObjectAttribute, SplitData};

type KeyFn<S> = Box<dyn Fn(&S) -> i64 + Send + Sync>;

/// Routes on an integer computed by a closure. Never proposes a split.
pub struct KeyedAttribute<S> {
    name: String,
    key: KeyFn<S>,
}

impl<S> KeyedAttribute<S> {
    pub fn new<F>(name: &str, key: F) -> Self
    where
        F: Fn(&S) -> i64 + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            key: Box::new(key),
        }
    }
}

impl<S> ObjectAttribute<S> for KeyedAttribute<S> {
    type Value = i64;

    fn name(&self) -> String {
        self.name.clone()
    }

    fn evaluate(&self, source: &S) -> i64 {
        (self.key)(source)
    }

    fn calculate_score(&self, _sources: &[S], _split: &mut SplitData) -> f64 {
        f64::NEG_INFINITY
    }
}
