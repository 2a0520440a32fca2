pub mod scoring_spy_attribute;
