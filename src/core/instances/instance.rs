use crate::core::instance_header::InstanceHeader;
use std::io::Error;

/// A weighted row of attribute values. Missing values are stored as NaN.
pub trait Instance {
    fn weight(&self) -> f64;
    fn value_at_index(&self, index: usize) -> Option<f64>;
    fn is_missing_at_index(&self, index: usize) -> Result<bool, Error>;
    fn number_of_attributes(&self) -> usize;
    fn class_index(&self) -> usize;
    fn class_value(&self) -> Option<f64>;
    fn is_class_missing(&self) -> bool;
    fn number_of_classes(&self) -> usize;
    fn to_vec(&self) -> Vec<f64>;
    fn header(&self) -> &InstanceHeader;
}
