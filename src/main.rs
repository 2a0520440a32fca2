use std::io::{self, Write};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, SecondsFormat};
use clap::Parser;

use sapling::growth::GrowthSnapshot;
use sapling::scoring::{NominalMultiwaySplit, NumericThresholdSplit};
use sapling::streams::{ArffFileStream, Stream};
use sapling::tasks::{GrowthMonitor, InstanceTree, tree_for_header};
use sapling::tree::{DecisionNode, NodeId, TreeError};
use sapling::ui::cli::args::{Cli, Command, RunArgs};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_MAGENTA: &str = "\x1b[35m";

const REPAINT: Duration = Duration::from_millis(150);
const BAR_WIDTH: usize = 15;

fn main() -> Result<()> {
    let Command::Run(args) = Cli::parse().command;

    let stream = ArffFileStream::new(args.input.clone(), args.class_index)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let tree = tree_for_header(stream.header(), args.criterion);

    println!("{BOLD}{FG_CYAN}▶ Tree Growth{RESET}  {}", run_banner(&args));

    let (tx, rx) = std::sync::mpsc::channel();
    let limits = Limits {
        instances: args.max_instances,
        seconds: args.max_seconds,
    };
    let render = std::thread::spawn(move || render_status(rx, limits));

    let mut monitor = GrowthMonitor::new(
        tree,
        Box::new(stream),
        args.max_instances,
        args.max_seconds,
        args.sample_frequency,
        args.min_merit,
    )
    .context("invalid growth settings")?
    .with_progress(tx);

    monitor.run().context("growth run failed")?;

    if let Some(path) = args.dump_file.as_ref().filter(|p| !p.as_os_str().is_empty()) {
        monitor
            .curve()
            .export_json(path)
            .with_context(|| format!("failed to export snapshots to {}", path.display()))?;
    }

    let grafts = monitor.grafts();
    let mut tree = monitor.into_tree();
    let _ = render.join();

    println!("{BOLD}tree{RESET} {DIM}after {grafts} split(s){RESET}");
    for line in outline(&tree) {
        println!("  {line}");
    }
    println!("{}", describe_best_split(&mut tree));

    Ok(())
}

fn run_banner(args: &RunArgs) -> String {
    let started = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        "{DIM}input={} criterion={} sample_freq={} min_merit={} {started}{RESET}",
        args.input.display(),
        args.criterion,
        args.sample_frequency,
        args.min_merit,
    )
}

/// Indented listing of the tree, one node per line, depth first.
fn outline(tree: &InstanceTree) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: Vec<(NodeId, usize, String)> = vec![(tree.root(), 0, String::new())];

    while let Some((id, depth, edge)) = pending.pop() {
        let indent = "  ".repeat(depth);
        let Some(node) = tree.node(id) else {
            continue;
        };
        let body = match node {
            DecisionNode::Leaf(leaf) => format!("leaf {id} {DIM}buffered{RESET} {}", leaf.len()),
            DecisionNode::Predicate(inode) => {
                pending.push((inode.false_node(), depth + 1, "false".into()));
                pending.push((inode.true_node(), depth + 1, "true".into()));
                format!("{FG_MAGENTA}threshold{RESET} {id}")
            }
            DecisionNode::Enumerable(inode) => {
                for (key, child) in inode.branches().collect::<Vec<_>>().into_iter().rev() {
                    pending.push((child, depth + 1, format!("{key:?}")));
                }
                format!("{FG_MAGENTA}multiway{RESET} {id} on {}", inode.attribute().name())
            }
        };
        if edge.is_empty() {
            lines.push(format!("{indent}{body}"));
        } else {
            lines.push(format!("{indent}{DIM}{edge} →{RESET} {body}"));
        }
    }
    lines
}

fn describe_best_split(tree: &mut InstanceTree) -> String {
    let names: Vec<String> = tree.source_attributes().iter().map(|a| a.name()).collect();
    let proposal = match tree.best_split() {
        Ok(proposal) => proposal,
        Err(TreeError::NoSplitCandidate { leaf }) => {
            return format!("{DIM}no split candidate (best leaf {leaf}){RESET}");
        }
        Err(e) => return format!("{DIM}no split candidate: {e}{RESET}"),
    };

    let name = names
        .get(proposal.attribute_index)
        .map(String::as_str)
        .unwrap_or("?");
    let mut line = format!(
        "{BOLD}next split{RESET} leaf {} on {FG_MAGENTA}{name}{RESET} merit {:.6}",
        proposal.leaf, proposal.score
    );

    if let Some(split) = proposal.split_data.get::<NumericThresholdSplit>() {
        line.push_str(&format!(
            "  {DIM}threshold{RESET} {:.6}  {DIM}dists{RESET} {:?}",
            split.threshold, split.distributions
        ));
    } else if let Some(split) = proposal.split_data.get::<NominalMultiwaySplit>() {
        line.push_str(&format!("  {DIM}branches{RESET} {:?}", split.branch_distributions));
    }
    line
}

#[derive(Clone, Copy)]
struct Limits {
    instances: Option<u64>,
    seconds: Option<u64>,
}

/// Redraws one status line with the newest snapshot until the sender hangs up.
fn render_status(rx: Receiver<GrowthSnapshot>, limits: Limits) {
    let mut latest: Option<GrowthSnapshot> = None;
    loop {
        let disconnected = match rx.recv_timeout(REPAINT) {
            Ok(snapshot) => {
                latest = Some(snapshot);
                // drain the backlog so a fast run does not repaint every sample
                while let Ok(snapshot) = rx.try_recv() {
                    latest = Some(snapshot);
                }
                false
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => true,
        };

        if let Some(snapshot) = &latest {
            print!("\r{}\x1B[K", status_line(snapshot, limits));
            let _ = io::stdout().flush();
        }
        if disconnected {
            if latest.is_some() {
                println!();
            }
            break;
        }
    }
}

fn status_line(s: &GrowthSnapshot, limits: Limits) -> String {
    let best = match (s.best_score, s.best_attribute.as_deref()) {
        (Some(score), Some(attribute)) => format!("{score:.6} {attribute}"),
        (Some(score), None) => format!("{score:.6}"),
        _ => format!("{DIM}-{RESET}"),
    };

    let mut line = format!(
        "{FG_GREEN}{BOLD}seen{RESET} {:>9}  {FG_CYAN}{BOLD}leaves{RESET} {:>6} {DIM}inodes{RESET} {:>6}  \
         {DIM}buffered{RESET} {:>9}  {FG_MAGENTA}{BOLD}next{RESET} {best}  {DIM}t{RESET} {:.3}s",
        s.instances_seen, s.leaves, s.inodes, s.buffered, s.seconds
    );
    if let Some(max) = limits.instances {
        line.push_str(&format!("  {DIM}[inst]{RESET} {}", gauge(s.instances_seen as f64 / max as f64)));
    }
    if let Some(max) = limits.seconds {
        line.push_str(&format!("  {DIM}[time]{RESET} {}", gauge(s.seconds / max as f64)));
    }
    line
}

fn gauge(ratio: f64) -> String {
    let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 1.0 };
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        ratio * 100.0
    )
}
