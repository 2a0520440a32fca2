pub mod fixtures;
mod spies;
mod stubs;

pub use spies::scoring_spy_attribute::{ScoringSpyAttribute, ScoringSpyHandle};
pub use stubs::constant_score_attribute::ConstantScoreAttribute;
pub use stubs::keyed_attribute::KeyedAttribute;
pub use stubs::vec_stream::VecStream;
