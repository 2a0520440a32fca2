use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::Stream;
use std::io::Error;
use std::sync::Arc;

/// In-memory stream over fixed rows, all with weight 1.
pub struct VecStream {
    header: Arc<InstanceHeader>,
    rows: Vec<Vec<f64>>,
    position: usize,
}

impl VecStream {
    pub fn new(header: Arc<InstanceHeader>, rows: Vec<Vec<f64>>) -> Self {
        Self {
            header,
            rows,
            position: 0,
        }
    }
}

impl Stream for VecStream {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.position < self.rows.len()
    }

    fn next_instance(&mut self) -> Option<Box<dyn Instance>> {
        let values = self.rows.get(self.position)?.clone();
        self.position += 1;
        Some(Box::new(DenseInstance::new(self.header.clone(), values, 1.0)))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.position = 0;
        Ok(())
    }
}
