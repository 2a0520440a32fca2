/// Merit of partitioning a class distribution into branches. Higher is better;
/// a split that leaves every branch as mixed as the parent has merit zero.
pub trait SplitCriterion: Send + Sync {
    fn merit_of_split(&self, pre_split_distribution: &[f64], post_split_dists: &[Vec<f64>]) -> f64;
}
