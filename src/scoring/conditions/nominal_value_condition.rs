use crate::core::instances::Instance;
use crate::scoring::distributions::{as_instance, known_value};
use crate::tree::Predicate;
use std::borrow::Borrow;

/// Passes instances whose nominal value at `attribute_index` is `value_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NominalValueCondition {
    attribute_index: usize,
    value_index: usize,
}

impl NominalValueCondition {
    pub fn new(attribute_index: usize, value_index: usize) -> Self {
        Self {
            attribute_index,
            value_index,
        }
    }

    pub fn attribute_index(&self) -> usize {
        self.attribute_index
    }

    pub fn value_index(&self) -> usize {
        self.value_index
    }

    pub fn passes(&self, instance: &dyn Instance) -> bool {
        known_value(instance, self.attribute_index).is_some_and(|v| v as usize == self.value_index)
    }
}

impl<I> Predicate<I> for NominalValueCondition
where
    I: Borrow<dyn Instance>,
{
    fn evaluate(&self, source: &I) -> bool {
        self.passes(as_instance(source))
    }
}
