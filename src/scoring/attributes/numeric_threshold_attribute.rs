use crate::core::instances::Instance;
use crate::scoring::conditions::NumericThresholdCondition;
use crate::scoring::distributions::{accumulate, as_instance, class_of, known_value};
use crate::scoring::split_criteria::SplitCriterion;
use crate::tree::{ObjectAttribute, SplitData};
use std::borrow::Borrow;
use std::sync::Arc;

/// Split metadata of [`NumericThresholdAttribute`]. `distributions[0]` holds
/// the class distribution of values at or below the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericThresholdSplit {
    pub attribute_index: usize,
    pub threshold: f64,
    pub distributions: [Vec<f64>; 2],
}

impl NumericThresholdSplit {
    /// Predicate sending the lower side to the `true` branch.
    pub fn condition(&self) -> NumericThresholdCondition {
        NumericThresholdCondition::new(self.attribute_index, self.threshold, true)
    }
}

/// Binary split of a numeric column at the best midpoint between observed values.
pub struct NumericThresholdAttribute {
    name: String,
    attribute_index: usize,
    criterion: Arc<dyn SplitCriterion>,
}

impl NumericThresholdAttribute {
    pub fn new(name: impl Into<String>, attribute_index: usize, criterion: Arc<dyn SplitCriterion>) -> Self {
        Self {
            name: name.into(),
            attribute_index,
            criterion,
        }
    }

    pub fn attribute_index(&self) -> usize {
        self.attribute_index
    }
}

impl<I> ObjectAttribute<I> for NumericThresholdAttribute
where
    I: Borrow<dyn Instance>,
{
    type Value = Option<u64>;

    fn name(&self) -> String {
        self.name.clone()
    }

    // Bit pattern so that exact values can key enumerable branches; -0.0 and 0.0 share one.
    fn evaluate(&self, source: &I) -> Option<u64> {
        known_value(as_instance(source), self.attribute_index).map(|v| (v + 0.0).to_bits())
    }

    fn calculate_score(&self, sources: &[I], split: &mut SplitData) -> f64 {
        let mut observed: Vec<(f64, usize, f64)> = sources
            .iter()
            .filter_map(|source| {
                let instance = as_instance(source);
                let value = known_value(instance, self.attribute_index)?;
                let class = class_of(instance)?;
                Some((value, class, instance.weight()))
            })
            .collect();
        observed.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut total = Vec::new();
        for &(_, class, weight) in &observed {
            accumulate(&mut total, class, weight);
        }

        let mut best: Option<(f64, f64, [Vec<f64>; 2])> = None;
        let mut lower = vec![0.0; total.len()];
        for pair in observed.windows(2) {
            let (value, class, weight) = pair[0];
            lower[class] += weight;
            let next = pair[1].0;
            if value == next {
                continue;
            }

            let upper: Vec<f64> = total.iter().zip(&lower).map(|(t, l)| t - l).collect();
            let post = [lower.clone(), upper];
            let merit = self.criterion.merit_of_split(&total, &post);
            if best.as_ref().is_none_or(|(max, _, _)| merit > *max) {
                best = Some((merit, value + (next - value) / 2.0, post));
            }
        }

        let Some((merit, threshold, distributions)) = best else {
            return f64::NEG_INFINITY;
        };
        split.set(NumericThresholdSplit {
            attribute_index: self.attribute_index,
            threshold,
            distributions,
        });
        merit
    }
}
