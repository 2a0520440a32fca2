use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use std::sync::Arc;

pub const OUTLOOK: usize = 0;
pub const TEMPERATURE: usize = 1;
pub const PLAY: usize = 2;

/// `outlook {sunny, overcast, rainy}`, `temperature numeric`, class `play {no, yes}`.
pub fn weather_header() -> Arc<InstanceHeader> {
    let attributes: Vec<AttributeRef> = vec![
        Arc::new(NominalAttribute::from_values(
            "outlook".into(),
            vec!["sunny".into(), "overcast".into(), "rainy".into()],
        )),
        Arc::new(NumericAttribute::new("temperature".into())),
        Arc::new(NominalAttribute::from_values(
            "play".into(),
            vec!["no".into(), "yes".into()],
        )),
    ];
    Arc::new(InstanceHeader::new("weather".into(), attributes, PLAY))
}

pub fn row(header: &Arc<InstanceHeader>, values: &[f64]) -> Box<dyn Instance> {
    Box::new(DenseInstance::new(header.clone(), values.to_vec(), 1.0))
}

pub fn weather_rows(header: &Arc<InstanceHeader>) -> Vec<Box<dyn Instance>> {
    [
        [0.0, 85.0, 0.0],
        [0.0, 80.0, 0.0],
        [1.0, 83.0, 1.0],
        [2.0, 70.0, 1.0],
        [2.0, 68.0, 1.0],
        [2.0, 65.0, 0.0],
        [1.0, 64.0, 1.0],
        [0.0, 72.0, 0.0],
        [0.0, 69.0, 1.0],
        [2.0, 75.0, 1.0],
        [0.0, 75.0, 1.0],
        [1.0, 72.0, 1.0],
        [1.0, 81.0, 1.0],
        [2.0, 71.0, 0.0],
    ]
    .iter()
    .map(|values| row(header, values))
    .collect()
}
