use crate::core::attributes::{NominalAttribute, NumericAttribute};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::scoring::{NominalMultiwayAttribute, NumericThresholdAttribute, SplitCriterionKind};
use crate::tree::{AttributeRef, DecisionTree};
use std::sync::Arc;

pub type InstanceTree = DecisionTree<Box<dyn Instance>>;

/// Tree with one candidate attribute per non-class column of `header`:
/// multiway for nominal columns, threshold for numeric ones. The class column
/// becomes the target attribute.
pub fn tree_for_header(header: &InstanceHeader, criterion: SplitCriterionKind) -> InstanceTree {
    let criterion = criterion.build();
    let mut tree = InstanceTree::new();

    for (index, attribute) in header.attributes.iter().enumerate() {
        let any = attribute.as_any();
        let candidate: AttributeRef<Box<dyn Instance>> = if any.is::<NominalAttribute>() {
            Arc::new(NominalMultiwayAttribute::new(attribute.name(), index, criterion.clone()))
        } else if any.is::<NumericAttribute>() {
            Arc::new(NumericThresholdAttribute::new(attribute.name(), index, criterion.clone()))
        } else {
            continue;
        };

        if index == header.class_index() {
            tree.set_target_attribute(Some(candidate));
        } else {
            tree.add_source_attribute(candidate);
        }
    }
    tree
}
