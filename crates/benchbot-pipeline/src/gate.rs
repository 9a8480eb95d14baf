//! Label gate deciding whether a trigger event starts the pipeline.

use crate::event::{LabelAction, TriggerEvent};

/// Reserved label name that arms the pipeline.
pub const MARKER_LABEL: &str = "benchmark";

/// Gate verdict for one trigger event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The event arms the pipeline.
    Proceed,
    /// The event does not arm the pipeline; skipping is a no-op, not an error.
    Skip,
}

impl GateDecision {
    /// Whether the pipeline should run.
    pub fn is_proceed(&self) -> bool {
        matches!(self, GateDecision::Proceed)
    }
}

/// Evaluates whether an incoming event qualifies the pipeline to run.
#[derive(Debug, Clone)]
pub struct TriggerGate {
    marker: String,
}

impl Default for TriggerGate {
    fn default() -> Self {
        TriggerGate::new(MARKER_LABEL)
    }
}

impl TriggerGate {
    /// Create a gate armed by the given marker label.
    pub fn new(marker: impl Into<String>) -> Self {
        TriggerGate {
            marker: marker.into(),
        }
    }

    /// The marker label this gate matches against.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Proceed only for an attachment whose label name equals the marker
    /// exactly (case-sensitive). Removal events and unrelated labels skip.
    /// No side effects.
    pub fn evaluate(&self, event: &TriggerEvent) -> GateDecision {
        if event.action == LabelAction::Attached && event.label == self.marker {
            GateDecision::Proceed
        } else {
            GateDecision::Skip
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TriggerEvent;

    #[test]
    fn test_marker_label_proceeds() {
        let gate = TriggerGate::default();
        let event = TriggerEvent::attached("benchmark", "o", "r", 1);
        assert_eq!(gate.evaluate(&event), GateDecision::Proceed);
        assert!(gate.evaluate(&event).is_proceed());
    }

    #[test]
    fn test_unrelated_label_skips() {
        let gate = TriggerGate::default();
        let event = TriggerEvent::attached("needs-review", "o", "r", 1);
        assert_eq!(gate.evaluate(&event), GateDecision::Skip);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let gate = TriggerGate::default();
        let event = TriggerEvent::attached("Benchmark", "o", "r", 1);
        assert_eq!(gate.evaluate(&event), GateDecision::Skip);
    }

    #[test]
    fn test_marker_removal_skips() {
        let gate = TriggerGate::default();
        let mut event = TriggerEvent::attached("benchmark", "o", "r", 1);
        event.action = LabelAction::Detached;
        assert_eq!(gate.evaluate(&event), GateDecision::Skip);
    }

    #[test]
    fn test_custom_marker() {
        let gate = TriggerGate::new("perf-check");
        assert_eq!(gate.marker(), "perf-check");

        let armed = TriggerEvent::attached("perf-check", "o", "r", 1);
        let default_marker = TriggerEvent::attached("benchmark", "o", "r", 1);
        assert_eq!(gate.evaluate(&armed), GateDecision::Proceed);
        assert_eq!(gate.evaluate(&default_marker), GateDecision::Skip);
    }
}
