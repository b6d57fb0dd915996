//! Session events - Defines events that trigger state transitions

use serde::{Deserialize, Serialize};

/// Defines the events that can trigger state transitions in the FSM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    /// A user submission was accepted and the payload is being built.
    SubmissionStarted,

    /// The streaming response opened (headers received).
    StreamOpened,

    /// The synchronous request was dispatched.
    SyncDispatched,

    /// One accumulator emission was applied to the trailing message.
    ChunkApplied,

    /// The stream signalled completion.
    StreamCompleted,

    /// The synchronous path received its full answer.
    AnswerReceived,

    /// The submission failed; the error will be surfaced once.
    SubmissionFailed { error: String },

    /// The failure notification was delivered.
    ErrorSurfaced,

    /// The submission was abandoned through its cancellation token.
    SubmissionCancelled,
}

impl SessionEvent {
    /// Whether this event reports a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::SubmissionFailed { .. })
    }

    /// Whether this event ends the in-flight submission.
    pub fn ends_submission(&self) -> bool {
        matches!(
            self,
            Self::StreamCompleted
                | Self::AnswerReceived
                | Self::SubmissionFailed { .. }
                | Self::SubmissionCancelled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_detection() {
        let failed = SessionEvent::SubmissionFailed {
            error: "boom".to_string(),
        };
        assert!(failed.is_failure());
        assert!(!SessionEvent::ChunkApplied.is_failure());
    }

    #[test]
    fn submission_ending_events() {
        assert!(SessionEvent::StreamCompleted.ends_submission());
        assert!(SessionEvent::AnswerReceived.ends_submission());
        assert!(SessionEvent::SubmissionCancelled.ends_submission());
        assert!(!SessionEvent::StreamOpened.ends_submission());
    }
}
