//! Captured-output bookkeeping between harness runs and report composition.

use crate::error::PipelineError;
use crate::harness::HarnessKind;
use crate::runner::HarnessInvocation;

/// Accumulates the two harness invocations of one run, keyed by harness
/// kind. Content is never transformed here; the module exists so "both
/// outputs present" is an explicit, testable invariant rather than an
/// assumption inside the orchestrator.
#[derive(Debug, Default)]
pub struct ResultCollector {
    counter_based: Option<HarnessInvocation>,
    statistical: Option<HarnessInvocation>,
}

/// Both captured outputs, guaranteed present.
#[derive(Debug, Clone)]
pub struct CollectedOutputs {
    pub counter_based: HarnessInvocation,
    pub statistical: HarnessInvocation,
}

impl ResultCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        ResultCollector::default()
    }

    /// Store an invocation in its kind's slot. A second record for the same
    /// kind replaces the first; a run only ever produces one per kind.
    pub fn record(&mut self, invocation: HarnessInvocation) {
        match invocation.kind {
            HarnessKind::CounterBased => self.counter_based = Some(invocation),
            HarnessKind::Statistical => self.statistical = Some(invocation),
        }
    }

    /// Look up the invocation captured for a kind, if any.
    pub fn get(&self, kind: HarnessKind) -> Option<&HarnessInvocation> {
        match kind {
            HarnessKind::CounterBased => self.counter_based.as_ref(),
            HarnessKind::Statistical => self.statistical.as_ref(),
        }
    }

    /// Whether both slots are filled.
    pub fn is_complete(&self) -> bool {
        self.counter_based.is_some() && self.statistical.is_some()
    }

    /// Finish collecting; errors on the first missing kind.
    pub fn finish(self) -> Result<CollectedOutputs, PipelineError> {
        let counter_based = self
            .counter_based
            .ok_or(PipelineError::MissingOutput(HarnessKind::CounterBased))?;
        let statistical = self
            .statistical
            .ok_or(PipelineError::MissingOutput(HarnessKind::Statistical))?;

        Ok(CollectedOutputs {
            counter_based,
            statistical,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(kind: HarnessKind, stdout: &str) -> HarnessInvocation {
        HarnessInvocation {
            kind,
            command: vec!["echo".to_string()],
            stdout: stdout.to_string(),
            stderr: String::new(),
            exit_code: 0,
            duration_ms: 1,
        }
    }

    #[test]
    fn test_empty_collector_is_incomplete() {
        let collector = ResultCollector::new();
        assert!(!collector.is_complete());
        assert!(collector.get(HarnessKind::CounterBased).is_none());
    }

    #[test]
    fn test_both_kinds_complete_the_collector() {
        let mut collector = ResultCollector::new();
        collector.record(invocation(HarnessKind::CounterBased, "counts"));
        assert!(!collector.is_complete());

        collector.record(invocation(HarnessKind::Statistical, "times"));
        assert!(collector.is_complete());

        let outputs = collector.finish().expect("finish failed");
        assert_eq!(outputs.counter_based.stdout, "counts");
        assert_eq!(outputs.statistical.stdout, "times");
    }

    #[test]
    fn test_finish_errors_on_missing_statistical() {
        let mut collector = ResultCollector::new();
        collector.record(invocation(HarnessKind::CounterBased, "counts"));

        let err = collector.finish().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingOutput(HarnessKind::Statistical)
        ));
    }

    #[test]
    fn test_finish_errors_on_missing_counter_based() {
        let mut collector = ResultCollector::new();
        collector.record(invocation(HarnessKind::Statistical, "times"));

        let err = collector.finish().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingOutput(HarnessKind::CounterBased)
        ));
    }

    #[test]
    fn test_record_replaces_same_kind() {
        let mut collector = ResultCollector::new();
        collector.record(invocation(HarnessKind::Statistical, "first"));
        collector.record(invocation(HarnessKind::Statistical, "second"));

        let captured = collector
            .get(HarnessKind::Statistical)
            .expect("slot should be filled");
        assert_eq!(captured.stdout, "second");
    }
}
