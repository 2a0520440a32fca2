use crate::growth::GrowthSnapshot;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

/// Snapshots of one run, oldest first.
#[derive(Clone, Debug, Default)]
pub struct GrowthCurve {
    snapshots: Vec<GrowthSnapshot>,
}

impl GrowthCurve {
    pub fn push(&mut self, snapshot: GrowthSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn latest(&self) -> Option<&GrowthSnapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GrowthSnapshot> {
        self.snapshots.iter()
    }

    /// Writes the snapshots as a pretty-printed JSON array.
    pub fn export_json(&self, path: &Path) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.snapshots)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn snapshot(seen: u64, best_score: Option<f64>) -> GrowthSnapshot {
        GrowthSnapshot {
            instances_seen: seen,
            leaves: 1,
            inodes: 0,
            buffered: seen as usize,
            best_score,
            best_attribute: best_score.map(|_| "outlook".to_string()),
            seconds: 0.0,
        }
    }

    #[test]
    fn latest_is_last_pushed() {
        let mut curve = GrowthCurve::default();
        assert!(curve.is_empty());
        assert!(curve.latest().is_none());

        curve.push(snapshot(5, None));
        curve.push(snapshot(10, Some(0.3)));
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.latest().unwrap().instances_seen, 10);
        assert_eq!(
            curve.iter().map(|s| s.instances_seen).collect::<Vec<_>>(),
            vec![5, 10]
        );
    }

    #[test]
    fn export_writes_a_json_array_in_field_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curve.json");
        let mut curve = GrowthCurve::default();
        curve.push(snapshot(5, None));
        curve.push(snapshot(10, Some(0.5)));

        curve.export_json(&path).unwrap();

        let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["best_score"], Value::Null);
        assert_eq!(rows[1]["best_score"], 0.5);
        assert_eq!(rows[1]["best_attribute"], "outlook");

        let keys: Vec<&str> = rows[0].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["instances_seen", "leaves", "inodes", "buffered", "best_score", "best_attribute", "seconds"]
        );
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let err = GrowthCurve::default()
            .export_json(&dir.path().join("nope").join("curve.json"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
