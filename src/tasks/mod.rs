mod growth_monitor;
mod tree_builder;

pub use growth_monitor::{DEFAULT_MIN_MERIT, GrowthMonitor};
pub use tree_builder::{InstanceTree, tree_for_header};
