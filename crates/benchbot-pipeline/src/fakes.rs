//! In-memory fakes for exercising the pipeline without a network.

use crate::publish::{CommentPublisher, PublishRequest};
use async_trait::async_trait;
use std::sync::Mutex;

/// Publisher that records every request instead of calling the platform.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    requests: Mutex<Vec<PublishRequest>>,
    fail: bool,
}

impl RecordingPublisher {
    /// A publisher that accepts and records everything.
    pub fn new() -> Self {
        RecordingPublisher::default()
    }

    /// A publisher whose `publish` always fails, for error-path tests.
    pub fn failing() -> Self {
        RecordingPublisher {
            requests: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Everything published so far.
    pub fn requests(&self) -> Vec<PublishRequest> {
        self.requests
            .lock()
            .expect("publisher mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl CommentPublisher for RecordingPublisher {
    async fn publish(&self, request: &PublishRequest) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("publisher configured to fail");
        }

        self.requests
            .lock()
            .expect("publisher mutex poisoned")
            .push(request.clone());
        Ok(())
    }
}
