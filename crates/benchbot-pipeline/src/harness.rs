//! Benchmark harness identities and invocation plans.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two measurement methodologies the pipeline reports on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HarnessKind {
    /// Deterministic instruction/cache-event counting (iai, backed by
    /// valgrind). Unaffected by host scheduling noise.
    CounterBased,

    /// Wall-clock timing over repeated trials (criterion, run through
    /// cargo-criterion). Sensitive to host load.
    Statistical,
}

impl HarnessKind {
    /// Tool name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            HarnessKind::CounterBased => "iai",
            HarnessKind::Statistical => "criterion",
        }
    }
}

impl fmt::Display for HarnessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The benchmarked component: a package and its two bench entry points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchTarget {
    /// Package the bench targets live in.
    pub package: String,

    /// Criterion bench target name.
    pub statistical_bench: String,

    /// Iai bench target name.
    pub counter_bench: String,
}

impl BenchTarget {
    /// Target a package with the conventional bench names of the proving
    /// library (`proof_criterion` / `proof_iai`).
    pub fn new(package: impl Into<String>) -> Self {
        BenchTarget {
            package: package.into(),
            statistical_bench: "proof_criterion".to_string(),
            counter_bench: "proof_iai".to_string(),
        }
    }

    /// Override the bench target names.
    pub fn with_benches(mut self, statistical: &str, counter: &str) -> Self {
        self.statistical_bench = statistical.to_string();
        self.counter_bench = counter.to_string();
        self
    }
}

/// Fixed invocation command for one harness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HarnessPlan {
    /// Which harness this plan invokes.
    pub kind: HarnessKind,

    /// Command to execute (first element is the executable).
    pub command: Vec<String>,
}

impl HarnessPlan {
    /// Plan the counter-based harness run for a target.
    pub fn counter_based(target: &BenchTarget) -> Self {
        HarnessPlan {
            kind: HarnessKind::CounterBased,
            command: vec![
                "cargo".to_string(),
                "bench".to_string(),
                "--package".to_string(),
                target.package.clone(),
                "--bench".to_string(),
                target.counter_bench.clone(),
            ],
        }
    }

    /// Plan the statistical harness run for a target. Color output is
    /// disabled so the capture embeds cleanly in a comment.
    pub fn statistical(target: &BenchTarget) -> Self {
        HarnessPlan {
            kind: HarnessKind::Statistical,
            command: vec![
                "cargo".to_string(),
                "criterion".to_string(),
                "--package".to_string(),
                target.package.clone(),
                "--bench".to_string(),
                target.statistical_bench.clone(),
                "--color".to_string(),
                "never".to_string(),
            ],
        }
    }

    /// Plan an arbitrary command for a harness kind.
    pub fn custom(kind: HarnessKind, command: Vec<String>) -> Self {
        HarnessPlan { kind, command }
    }
}

/// The two plans of one pipeline run, in their fixed execution order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HarnessSchedule {
    /// Counter-based plan; always runs first.
    pub counter_based: HarnessPlan,

    /// Statistical plan; runs after the counter-based harness completes.
    pub statistical: HarnessPlan,
}

impl HarnessSchedule {
    /// Build the standard schedule for a bench target.
    pub fn for_target(target: &BenchTarget) -> Self {
        HarnessSchedule {
            counter_based: HarnessPlan::counter_based(target),
            statistical: HarnessPlan::statistical(target),
        }
    }

    /// Build a schedule from explicit plans.
    pub fn custom(counter_based: HarnessPlan, statistical: HarnessPlan) -> Self {
        HarnessSchedule {
            counter_based,
            statistical,
        }
    }

    /// Plans in execution order. Strictly sequential, counter-based first:
    /// the perf-counter run must not share the machine with the timing run,
    /// and the timing run must not start under leftover load.
    pub fn in_run_order(&self) -> [&HarnessPlan; 2] {
        [&self.counter_based, &self.statistical]
    }
}
