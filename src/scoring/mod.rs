//! Ready-made attributes and predicates for trees over [`Instance`](crate::core::instances::Instance) rows.

pub mod attributes;
pub mod conditions;
mod distributions;
pub mod split_criteria;

pub use attributes::{
    NominalMultiwayAttribute, NominalMultiwaySplit, NumericThresholdAttribute, NumericThresholdSplit,
};
pub use conditions::{NominalValueCondition, NumericThresholdCondition};
pub use split_criteria::{GiniSplitCriterion, InfoGainSplitCriterion, SplitCriterion, SplitCriterionKind};
