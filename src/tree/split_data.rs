use std::any::Any;
use std::fmt;

trait ErasedPayload: fmt::Debug + Send + Sync {
    fn clone_box(&self) -> Box<dyn ErasedPayload>;
    fn as_any(&self) -> &dyn Any;
}

struct Payload<T>(T);

impl<T> ErasedPayload for Payload<T>
where
    T: Any + Clone + fmt::Debug + Send + Sync,
{
    fn clone_box(&self) -> Box<dyn ErasedPayload> {
        Box::new(Payload(self.0.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Payload<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque, attribute-specific description of how a leaf would be partitioned.
///
/// Scorers write into it with [`SplitData::set`]; whoever later acts on the split
/// reads it back with [`SplitData::get`] using the type the scorer stored.
#[derive(Debug, Default)]
pub struct SplitData {
    payload: Option<Box<dyn ErasedPayload>>,
}

impl SplitData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<T>(&mut self, value: T)
    where
        T: Any + Clone + fmt::Debug + Send + Sync,
    {
        self.payload = Some(Box::new(Payload(value)));
    }

    pub fn get<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref()?.as_any().downcast_ref::<T>()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_none()
    }

    pub fn clear(&mut self) {
        self.payload = None;
    }

    /// Replaces the content with a deep copy of `other`, leaving `other` untouched.
    pub fn copy_from(&mut self, other: &SplitData) {
        self.payload = other.payload.as_ref().map(|p| p.clone_box());
    }
}

impl Clone for SplitData {
    fn clone(&self) -> Self {
        let mut copy = SplitData::new();
        copy.copy_from(self);
        copy
    }
}
