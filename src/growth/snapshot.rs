use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Shape of the tree and its best expansion candidate at one point of a run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GrowthSnapshot {
    pub instances_seen: u64,
    pub leaves: usize,
    pub inodes: usize,
    pub buffered: usize,
    /// `None` while no leaf can be split.
    pub best_score: Option<f64>,
    pub best_attribute: Option<String>,
    pub seconds: f64,
}

impl GrowthSnapshot {
    #[inline]
    fn fmtv(v: Option<f64>) -> String {
        match v {
            Some(v) if !v.is_nan() => format!("{v:.6}"),
            _ => "-".into(),
        }
    }
}

impl Display for GrowthSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "seen={}, leaves={}, inodes={}, buffered={}, best={}",
            self.instances_seen,
            self.leaves,
            self.inodes,
            self.buffered,
            Self::fmtv(self.best_score),
        )?;
        if let Some(attribute) = &self.best_attribute {
            write!(f, " ({attribute})")?;
        }
        write!(f, ", t={:.6}s", self.seconds)
    }
}
