use crate::core::instances::Instance;
use crate::scoring::distributions::{accumulate, as_instance, class_of, is_populated, known_value, merge};
use crate::scoring::split_criteria::SplitCriterion;
use crate::tree::{ObjectAttribute, SplitData};
use std::borrow::Borrow;
use std::sync::Arc;

/// Split metadata of [`NominalMultiwayAttribute`]: class distribution per nominal value.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalMultiwaySplit {
    pub attribute_index: usize,
    pub branch_distributions: Vec<Vec<f64>>,
}

/// One branch per value of a nominal column.
pub struct NominalMultiwayAttribute {
    name: String,
    attribute_index: usize,
    criterion: Arc<dyn SplitCriterion>,
}

impl NominalMultiwayAttribute {
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

impl<I> ObjectAttribute<I> for NominalMultiwayAttribute
where
    I: Borrow<dyn Instance>,
{
    type Value = Option<usize>;

    fn name(&self) -> String {
        self.name.clone()
    }

    fn evaluate(&self, source: &I) -> Option<usize> {
        known_value(as_instance(source), self.attribute_index).map(|v| v as usize)
    }

    fn calculate_score(&self, sources: &[I], split: &mut SplitData) -> f64 {
        let mut branches: Vec<Vec<f64>> = Vec::new();
        for source in sources {
            let instance = as_instance(source);
            let (Some(value), Some(class)) = (
                known_value(instance, self.attribute_index),
                class_of(instance),
            ) else {
                continue;
            };
            let value = value as usize;
            if branches.len() <= value {
                branches.resize_with(value + 1, Vec::new);
            }
            accumulate(&mut branches[value], class, instance.weight());
        }

        if branches.iter().filter(|b| is_populated(b)).count() < 2 {
            return f64::NEG_INFINITY;
        }

        let merit = self.criterion.merit_of_split(&merge(&branches), &branches);
        split.set(NominalMultiwaySplit {
            attribute_index: self.attribute_index,
            branch_distributions: branches,
        });
        merit
    }
}
