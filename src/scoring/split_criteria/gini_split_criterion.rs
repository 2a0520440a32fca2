use crate::scoring::split_criteria::SplitCriterion;

/// Reduction of Gini impurity.
#[derive(Debug, Default, Clone, Copy)]
pub struct GiniSplitCriterion;

impl GiniSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_gini(&self, distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        let mut gini = 1.0;
        for weight in distribution {
            let rel_freq = weight / distribution_sum_of_weights;
            gini -= rel_freq * rel_freq;
        }
        gini
    }
}

impl SplitCriterion for GiniSplitCriterion {
    fn merit_of_split(&self, pre_split_distribution: &[f64], post_split_dists: &[Vec<f64>]) -> f64 {
        let dist_weights: Vec<f64> = post_split_dists.iter().map(|d| d.iter().sum()).collect();
        let total_weight: f64 = dist_weights.iter().sum();
        if total_weight <= 0.0 {
            return 0.0;
        }

        let mut gini = 0.0;
        for (dist, &weight) in post_split_dists.iter().zip(&dist_weights) {
            if weight > 0.0 {
                gini += (weight / total_weight) * self.compute_gini(dist, weight);
            }
        }

        let pre_weight: f64 = pre_split_distribution.iter().sum();
        self.compute_gini(pre_split_distribution, pre_weight) - gini
    }
}
