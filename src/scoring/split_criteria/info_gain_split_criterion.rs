use crate::scoring::split_criteria::SplitCriterion;

/// Information gain in bits.
#[derive(Debug, Default, Clone, Copy)]
pub struct InfoGainSplitCriterion;

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_entropy(&self, distribution: &[f64]) -> f64 {
        let total: f64 = distribution.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        distribution
            .iter()
            .filter(|&&w| w > 0.0)
            .map(|&w| {
                let p = w / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn merit_of_split(&self, pre_split_distribution: &[f64], post_split_dists: &[Vec<f64>]) -> f64 {
        let dist_weights: Vec<f64> = post_split_dists.iter().map(|d| d.iter().sum()).collect();
        let total_weight: f64 = dist_weights.iter().sum();
        if total_weight <= 0.0 {
            return 0.0;
        }

        let post_entropy: f64 = post_split_dists
            .iter()
            .zip(&dist_weights)
            .map(|(dist, &weight)| (weight / total_weight) * self.compute_entropy(dist))
            .sum();

        self.compute_entropy(pre_split_distribution) - post_entropy
    }
}
