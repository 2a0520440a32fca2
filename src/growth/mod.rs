mod curve;
mod snapshot;

pub use curve::GrowthCurve;
pub use snapshot::GrowthSnapshot;
