//! Trigger events delivered by the review platform.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What happened to the label that produced this event.
///
/// The platform delivers removal events carrying the same label name as the
/// attachment, so the action has to travel with the event for the gate to
/// tell them apart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LabelAction {
    /// The label was attached to the pull request.
    Attached,
    /// The label was removed from the pull request.
    Detached,
}

/// A label event on a pull request.
///
/// Immutable: produced once by the platform (webhook payload) or assembled
/// from CLI flags, consumed once by the trigger gate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriggerEvent {
    /// Whether the label was attached or removed.
    pub action: LabelAction,

    /// Name of the label the event is about.
    pub label: String,

    /// Repository owner login.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Pull request number within the repository.
    pub number: u64,
}

/// Errors produced while decoding a webhook payload.
#[derive(Error, Debug)]
pub enum EventError {
    /// Payload is not valid JSON or misses required fields.
    #[error("malformed event payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Payload action is not a label event.
    #[error("unsupported event action: {0}")]
    UnsupportedAction(String),

    /// Label event without a label object.
    #[error("event payload carries no label")]
    MissingLabel,
}

// Wire shapes for the `pull_request` webhook payload. Only the fields the
// pipeline reads are modeled.
#[derive(Deserialize)]
struct WirePayload {
    action: String,
    label: Option<WireLabel>,
    pull_request: WirePullRequest,
    repository: WireRepository,
}

#[derive(Deserialize)]
struct WireLabel {
    name: String,
}

#[derive(Deserialize)]
struct WirePullRequest {
    number: u64,
}

#[derive(Deserialize)]
struct WireRepository {
    name: String,
    owner: WireOwner,
}

#[derive(Deserialize)]
struct WireOwner {
    login: String,
}

impl TriggerEvent {
    /// Create a label-attachment event from its parts.
    pub fn attached(label: &str, owner: &str, repo: &str, number: u64) -> Self {
        TriggerEvent {
            action: LabelAction::Attached,
            label: label.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
        }
    }

    /// Decode a `pull_request` webhook payload.
    ///
    /// Accepts `labeled` and `unlabeled` actions; anything else is an error
    /// because the caller should never have routed it here.
    pub fn from_payload(payload: &str) -> Result<Self, EventError> {
        let wire: WirePayload = serde_json::from_str(payload)?;

        let action = match wire.action.as_str() {
            "labeled" => LabelAction::Attached,
            "unlabeled" => LabelAction::Detached,
            other => return Err(EventError::UnsupportedAction(other.to_string())),
        };

        let label = wire.label.ok_or(EventError::MissingLabel)?.name;

        Ok(TriggerEvent {
            action,
            label,
            owner: wire.repository.owner.login,
            repo: wire.repository.name,
            number: wire.pull_request.number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(action: &str, label: &str) -> String {
        format!(
            r#"{{
                "action": "{action}",
                "label": {{ "name": "{label}" }},
                "pull_request": {{ "number": 42 }},
                "repository": {{ "name": "r", "owner": {{ "login": "o" }} }}
            }}"#
        )
    }

    #[test]
    fn test_decode_labeled_payload() {
        let event = TriggerEvent::from_payload(&payload("labeled", "benchmark"))
            .expect("decode failed");

        assert_eq!(event.action, LabelAction::Attached);
        assert_eq!(event.label, "benchmark");
        assert_eq!(event.owner, "o");
        assert_eq!(event.repo, "r");
        assert_eq!(event.number, 42);
    }

    #[test]
    fn test_decode_unlabeled_payload() {
        let event = TriggerEvent::from_payload(&payload("unlabeled", "benchmark"))
            .expect("decode failed");

        assert_eq!(event.action, LabelAction::Detached);
        assert_eq!(event.label, "benchmark");
    }

    #[test]
    fn test_decode_rejects_non_label_action() {
        let err = TriggerEvent::from_payload(&payload("synchronize", "benchmark")).unwrap_err();
        assert!(matches!(err, EventError::UnsupportedAction(a) if a == "synchronize"));
    }

    #[test]
    fn test_decode_rejects_missing_label() {
        let raw = r#"{
            "action": "labeled",
            "pull_request": { "number": 7 },
            "repository": { "name": "r", "owner": { "login": "o" } }
        }"#;

        let err = TriggerEvent::from_payload(raw).unwrap_err();
        assert!(matches!(err, EventError::MissingLabel));
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = TriggerEvent::from_payload("not json").unwrap_err();
        assert!(matches!(err, EventError::Malformed(_)));
    }

    #[test]
    fn test_attached_constructor() {
        let event = TriggerEvent::attached("benchmark", "o", "r", 42);
        assert_eq!(event.action, LabelAction::Attached);
        assert_eq!(event.number, 42);
    }
}
