//! benchbot pipeline - benchmark reporting for labeled pull requests
//!
//! Provides a single-shot pipeline that:
//! - Gates on the `benchmark` marker label
//! - Runs the counter-based (iai) and statistical (criterion) harnesses sequentially
//! - Composes one Markdown report embedding both captured outputs
//! - Publishes the report as a PR comment through a pluggable backend

pub mod collector;
pub mod error;
pub mod event;
pub mod fakes;
pub mod gate;
pub mod harness;
pub mod pipeline;
pub mod provision;
pub mod publish;
pub mod report;
pub mod runner;
pub mod telemetry;

// Re-export key types
pub use collector::{CollectedOutputs, ResultCollector};
pub use error::PipelineError;
pub use event::{EventError, LabelAction, TriggerEvent};
pub use gate::{GateDecision, TriggerGate, MARKER_LABEL};
pub use harness::{BenchTarget, HarnessKind, HarnessPlan, HarnessSchedule};
pub use pipeline::{BenchPipeline, PipelineOutcome};
pub use provision::{Provisioner, ProvisionError, ToolProbe};
pub use publish::{CommentPublisher, PublishRequest};
pub use report::{compose, ReportMessage};
pub use runner::{HarnessInvocation, HarnessRunner};
pub use telemetry::init_tracing;
