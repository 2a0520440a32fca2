mod gini_split_criterion;
mod info_gain_split_criterion;
mod split_criterion;

pub use gini_split_criterion::GiniSplitCriterion;
pub use info_gain_split_criterion::InfoGainSplitCriterion;
pub use split_criterion::SplitCriterion;

use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SplitCriterionKind {
    #[default]
    Gini,
    InfoGain,
}

impl SplitCriterionKind {
    pub fn build(self) -> Arc<dyn SplitCriterion> {
        match self {
            SplitCriterionKind::Gini => Arc::new(GiniSplitCriterion::new()),
            SplitCriterionKind::InfoGain => Arc::new(InfoGainSplitCriterion::new()),
        }
    }
}
