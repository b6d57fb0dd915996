//! Session states - Defines all possible states of a conversation submission

use serde::{Deserialize, Serialize};

/// Defines the possible states of one conversation's submission lifecycle.
///
/// At most one submission is in flight at a time; a new one may only begin
/// from `Idle`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Awaiting user input.
    Idle,

    /// A submission was accepted; the payload is being built and dispatched.
    Submitting,

    /// The streaming path is open and chunks are being applied to the
    /// trailing assistant message.
    StreamingReceive,

    /// The synchronous path is waiting for the full answer object.
    AwaitingSyncResponse,

    /// A failure is being surfaced through the notification sink. Always
    /// drains to `Idle`; the UI must never be left loading.
    SurfacingError { message: String },
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

impl SessionState {
    /// Whether a submission is currently in flight.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            Self::Submitting | Self::StreamingReceive | Self::AwaitingSyncResponse
        )
    }

    /// Whether a new submission may begin.
    pub fn accepts_user_input(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Human-readable description of the current state.
    pub fn description(&self) -> &str {
        match self {
            Self::Idle => "Ready for input",
            Self::Submitting => "Sending your message",
            Self::StreamingReceive => "Receiving response",
            Self::AwaitingSyncResponse => "Waiting for response",
            Self::SurfacingError { .. } => "Something went wrong",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(SessionState::default(), SessionState::Idle);
    }

    #[test]
    fn in_flight_detection() {
        assert!(SessionState::Submitting.is_in_flight());
        assert!(SessionState::StreamingReceive.is_in_flight());
        assert!(SessionState::AwaitingSyncResponse.is_in_flight());
        assert!(!SessionState::Idle.is_in_flight());
        let error = SessionState::SurfacingError {
            message: "boom".to_string(),
        };
        assert!(!error.is_in_flight());
    }

    #[test]
    fn only_idle_accepts_user_input() {
        assert!(SessionState::Idle.accepts_user_input());
        assert!(!SessionState::Submitting.accepts_user_input());
        assert!(!SessionState::StreamingReceive.accepts_user_input());
    }
}
