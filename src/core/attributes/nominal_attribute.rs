use crate::core::attributes::Attribute;
use std::any::Any;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    /// Builds the attribute from its ordered domain; duplicated labels keep their first index.
    pub fn from_values(name: String, values: Vec<String>) -> NominalAttribute {
        let mut label_to_index = HashMap::with_capacity(values.len());
        for (i, v) in values.iter().enumerate() {
            label_to_index.entry(v.clone()).or_insert(i);
        }
        NominalAttribute {
            name,
            values,
            label_to_index,
        }
    }

    pub fn index_of_value(&self, label: &str) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }

    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }
}

impl Attribute for NominalAttribute {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn arff_representation(&self) -> String {
        format!("@attribute {} {{ {} }}", self.name, self.values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_indexes_labels_in_order() {
        let attr = NominalAttribute::from_values(
            "outlook".into(),
            vec!["sunny".into(), "overcast".into(), "rainy".into()],
        );
        assert_eq!(attr.index_of_value("overcast"), Some(1));
        assert_eq!(attr.value_at(2), Some("rainy"));
        assert_eq!(attr.number_of_values(), 3);
        assert_eq!(attr.index_of_value("snowy"), None);
    }

    #[test]
    fn arff_representation_lists_domain() {
        let attr = NominalAttribute::from_values("play".into(), vec!["yes".into(), "no".into()]);
        assert_eq!(attr.arff_representation(), "@attribute play { yes, no }");
    }
}
