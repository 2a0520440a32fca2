pub mod constant_score_attribute;
pub mod keyed_attribute;
pub mod vec_stream;
