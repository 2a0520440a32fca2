/// Boolean test used by predicate inodes to route a source to their `true` or `false` child.
pub trait Predicate<S>: Send + Sync {
    fn evaluate(&self, source: &S) -> bool;
}

impl<S, F> Predicate<S> for F
where
    F: Fn(&S) -> bool + Send + Sync,
{
    fn evaluate(&self, source: &S) -> bool {
        self(source)
    }
}
