use crate::growth::{GrowthCurve, GrowthSnapshot};
use crate::scoring::{NominalMultiwaySplit, NumericThresholdCondition, NumericThresholdSplit};
use crate::streams::Stream;
use crate::tasks::tree_builder::InstanceTree;
use crate::tree::NodeId;
use std::io::{Error, ErrorKind};
use std::sync::mpsc::Sender;

use cpu_time::ThreadTime;

pub const DEFAULT_MIN_MERIT: f64 = 0.01;

/// How the best candidate of a tree is turned into structure.
enum Growth {
    Threshold(NodeId, NumericThresholdCondition),
    Multiway(NodeId, usize),
}

/// Feeds a stream into a tree and grows it.
///
/// Every `sample_frequency` instances the best expansion candidate is grafted
/// when its merit reaches `min_merit`, then a snapshot is taken. One more
/// snapshot closes the run.
pub struct GrowthMonitor {
    tree: InstanceTree,
    stream: Box<dyn Stream>,

    curve: GrowthCurve,

    max_instances: Option<u64>,
    max_seconds: Option<u64>,
    sample_frequency: u64,
    min_merit: f64,

    processed: u64,
    grafts: u64,

    start_cpu: ThreadTime,
    progress_tx: Option<Sender<GrowthSnapshot>>,
}

impl GrowthMonitor {
    pub fn new(
        tree: InstanceTree,
        stream: Box<dyn Stream>,
        max_instances: Option<u64>,
        max_seconds: Option<u64>,
        sample_frequency: u64,
        min_merit: f64,
    ) -> Result<Self, Error> {
        if sample_frequency == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sample_frequency must be > 0",
            ));
        }
        if !min_merit.is_finite() || min_merit <= 0.0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "min_merit must be a positive number",
            ));
        }

        Ok(Self {
            tree,
            stream,
            curve: GrowthCurve::default(),
            max_instances,
            max_seconds,
            sample_frequency,
            min_merit,
            processed: 0,
            grafts: 0,
            start_cpu: ThreadTime::now(),
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<GrowthSnapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn run(&mut self) -> Result<(), Error> {
        self.start_cpu = ThreadTime::now();

        while self.stream.has_more_instances() {
            if self.max_instances.is_some_and(|n| self.processed >= n) {
                break;
            }
            if self
                .max_seconds
                .is_some_and(|s| self.start_cpu.elapsed().as_secs() >= s)
            {
                break;
            }

            let Some(instance) = self.stream.next_instance() else {
                break;
            };
            self.processed += 1;
            self.tree.insert(instance);

            if self.processed % self.sample_frequency == 0 {
                if self.grow() {
                    self.grafts += 1;
                }
                self.push_snapshot();
            }
        }

        self.push_snapshot();
        Ok(())
    }

    /// Number of leaves turned into inodes so far.
    pub fn grafts(&self) -> u64 {
        self.grafts
    }

    pub fn curve(&self) -> &GrowthCurve {
        &self.curve
    }

    pub fn tree(&self) -> &InstanceTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut InstanceTree {
        &mut self.tree
    }

    pub fn into_tree(self) -> InstanceTree {
        self.tree
    }

    /// Grafts the best candidate if it is good enough. Returns whether the tree changed.
    fn grow(&mut self) -> bool {
        let growth = match self.tree.best_split() {
            Ok(proposal) if proposal.score >= self.min_merit => {
                if let Some(split) = proposal.split_data.get::<NumericThresholdSplit>() {
                    Growth::Threshold(proposal.leaf, split.condition())
                } else if proposal.split_data.get::<NominalMultiwaySplit>().is_some() {
                    Growth::Multiway(proposal.leaf, proposal.attribute_index)
                } else {
                    return false;
                }
            }
            _ => return false,
        };

        let grafted = match growth {
            Growth::Threshold(leaf, condition) => {
                self.tree.graft_predicate(leaf, condition).map(|_| ())
            }
            Growth::Multiway(leaf, index) => {
                let Some(attribute) = self.tree.source_attributes().get(index).cloned() else {
                    return false;
                };
                self.tree.graft_enumerable(leaf, attribute)
            }
        };
        grafted.is_ok()
    }

    fn push_snapshot(&mut self) {
        let best = self
            .tree
            .best_split()
            .ok()
            .map(|proposal| (proposal.score, proposal.attribute_index));
        let best_attribute = best.and_then(|(_, index)| {
            self.tree
                .source_attributes()
                .get(index)
                .map(|attribute| attribute.name())
        });

        let leaves = self.tree.leaf_count();
        let snapshot = GrowthSnapshot {
            instances_seen: self.processed,
            leaves,
            inodes: self.tree.node_count() - leaves,
            buffered: self.tree.buffered_len(),
            best_score: best.map(|(score, _)| score),
            best_attribute,
            seconds: self.start_cpu.elapsed().as_secs_f64(),
        };

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(snapshot.clone());
        }
        self.curve.push(snapshot);
    }
}
