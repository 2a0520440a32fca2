mod nominal_multiway_attribute;
mod numeric_threshold_attribute;

pub use nominal_multiway_attribute::{NominalMultiwayAttribute, NominalMultiwaySplit};
pub use numeric_threshold_attribute::{NumericThresholdAttribute, NumericThresholdSplit};
