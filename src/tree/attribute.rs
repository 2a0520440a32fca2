use crate::tree::split_data::SplitData;
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub type AttributeRef<S> = Arc<dyn SourceAttribute<S>>;

/// A candidate attribute over sources of type `S`.
///
/// `evaluate` maps a source to the value used by enumerable inodes to pick a
/// branch. `calculate_score` rates splitting a batch of buffered sources on
/// this attribute; higher is better, negative infinity means "cannot split".
/// The `split` holder is shared by every attribute during one scoring pass of a
/// leaf, so implementations overwrite it rather than assume it is empty.
pub trait ObjectAttribute<S>: Send + Sync {
    type Value: Eq + Hash + fmt::Debug + Send + Sync + 'static;

    fn name(&self) -> String;

    fn evaluate(&self, source: &S) -> Self::Value;

    fn calculate_score(&self, sources: &[S], split: &mut SplitData) -> f64;
}

/// Object-safe view of [`ObjectAttribute`], so attributes with different value
/// types can live in the same ordered registry.
pub trait SourceAttribute<S>: Send + Sync {
    fn name(&self) -> String;

    fn evaluate_key(&self, source: &S) -> AttributeKey;

    fn calculate_score(&self, sources: &[S], split: &mut SplitData) -> f64;
}

impl<S, A> SourceAttribute<S> for A
where
    A: ObjectAttribute<S>,
{
    fn name(&self) -> String {
        <A as ObjectAttribute<S>>::name(self)
    }

    fn evaluate_key(&self, source: &S) -> AttributeKey {
        AttributeKey::new(self.evaluate(source))
    }

    fn calculate_score(&self, sources: &[S], split: &mut SplitData) -> f64 {
        <A as ObjectAttribute<S>>::calculate_score(self, sources, split)
    }
}

trait ErasedKey: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eq_key(&self, other: &dyn ErasedKey) -> bool;
    fn hash_key(&self, state: &mut dyn Hasher);
}

struct KeyValue<T>(T);

impl<T> ErasedKey for KeyValue<T>
where
    T: Eq + Hash + fmt::Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        &self.0
    }

    fn eq_key(&self, other: &dyn ErasedKey) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|value| *value == self.0)
    }

    fn hash_key(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<T>().hash(&mut state);
        self.0.hash(&mut state);
    }
}

impl<T: fmt::Debug> fmt::Debug for KeyValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Type-tagged attribute value. Two keys are equal only when they hold the
/// same type and equal values.
#[derive(Clone)]
pub struct AttributeKey(Arc<dyn ErasedKey>);

impl AttributeKey {
    pub fn new<T>(value: T) -> Self
    where
        T: Eq + Hash + fmt::Debug + Send + Sync + 'static,
    {
        AttributeKey(Arc::new(KeyValue(value)))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl PartialEq for AttributeKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_key(&*other.0)
    }
}

impl Eq for AttributeKey {}

impl Hash for AttributeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash_key(state);
    }
}

impl fmt::Debug for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
