mod nominal_value_condition;
mod numeric_threshold_condition;

pub use nominal_value_condition::NominalValueCondition;
pub use numeric_threshold_condition::NumericThresholdCondition;
