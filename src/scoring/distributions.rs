use crate::core::instances::Instance;
use std::borrow::Borrow;

pub(crate) fn as_instance<I: Borrow<dyn Instance>>(source: &I) -> &dyn Instance {
    <I as Borrow<dyn Instance>>::borrow(source)
}

/// Value at `index`, `None` when absent or missing.
pub(crate) fn known_value(instance: &dyn Instance, index: usize) -> Option<f64> {
    match instance.is_missing_at_index(index) {
        Ok(false) => instance.value_at_index(index),
        _ => None,
    }
}

pub(crate) fn class_of(instance: &dyn Instance) -> Option<usize> {
    instance
        .class_value()
        .filter(|v| *v >= 0.0)
        .map(|v| v as usize)
}

/// Adds `weight` at `index`, growing the distribution as needed.
pub(crate) fn accumulate(distribution: &mut Vec<f64>, index: usize, weight: f64) {
    if distribution.len() <= index {
        distribution.resize(index + 1, 0.0);
    }
    distribution[index] += weight;
}

/// Element-wise sum of the branch distributions.
pub(crate) fn merge(branches: &[Vec<f64>]) -> Vec<f64> {
    let mut total = Vec::new();
    for branch in branches {
        for (class, &weight) in branch.iter().enumerate() {
            accumulate(&mut total, class, weight);
        }
    }
    total
}

pub(crate) fn is_populated(distribution: &[f64]) -> bool {
    distribution.iter().sum::<f64>() > 0.0
}
