use crate::core::instances::Instance;
use crate::scoring::distributions::{as_instance, known_value};
use crate::tree::Predicate;
use std::borrow::Borrow;

/// Passes instances whose value is below `threshold`, or equal to it when
/// `equals_passes`. Missing values fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericThresholdCondition {
    attribute_index: usize,
    threshold: f64,
    equals_passes: bool,
}

impl NumericThresholdCondition {
    pub fn new(attribute_index: usize, threshold: f64, equals_passes: bool) -> Self {
        Self {
            attribute_index,
            threshold,
            equals_passes,
        }
    }

    pub fn attribute_index(&self) -> usize {
        self.attribute_index
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn passes(&self, instance: &dyn Instance) -> bool {
        let Some(value) = known_value(instance, self.attribute_index) else {
            return false;
        };
        if value == self.threshold {
            return self.equals_passes;
        }
        value < self.threshold
    }
}

impl<I> Predicate<I> for NumericThresholdCondition
where
    I: Borrow<dyn Instance>,
{
    fn evaluate(&self, source: &I) -> bool {
        self.passes(as_instance(source))
    }
}
