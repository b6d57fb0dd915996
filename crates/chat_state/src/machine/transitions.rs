//! State transitions - FSM transition logic

use super::events::SessionEvent;
use super::states::SessionState;

/// Represents a state transition result.
#[derive(Debug, Clone)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: SessionState,
    /// The state after the transition.
    pub to: SessionState,
    /// The event that triggered the transition.
    pub event: SessionEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// State machine for one conversation's submission lifecycle.
#[derive(Debug, Clone)]
pub struct StateMachine {
    /// Current state.
    current_state: SessionState,
    /// Transition history (limited).
    history: Vec<StateTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine in Idle state.
    pub fn new() -> Self {
        Self {
            current_state: SessionState::Idle,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Create a state machine with a specific initial state.
    pub fn with_state(state: SessionState) -> Self {
        Self {
            current_state: state,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &SessionState {
        &self.current_state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Handle an event and transition to a new state.
    pub fn handle_event(&mut self, event: SessionEvent) -> StateTransition {
        let old_state = self.current_state.clone();
        let new_state = Self::compute_next_state(&old_state, &event);
        let changed = old_state != new_state;

        if changed {
            log::debug!("session state: {old_state:?} -> {new_state:?} on {event:?}");
        }
        self.current_state = new_state.clone();

        let transition = StateTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
        };

        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    /// Compute the next state given current state and event.
    fn compute_next_state(state: &SessionState, event: &SessionEvent) -> SessionState {
        use SessionEvent::*;
        use SessionState::*;

        match (state, event) {
            // ========== Submission start ==========
            (Idle, SubmissionStarted) => Submitting,

            // ========== Path selection ==========
            (Submitting, StreamOpened) => StreamingReceive,
            (Submitting, SyncDispatched) => AwaitingSyncResponse,

            // ========== Streaming path ==========
            // Self-loop: each applied emission is recorded but changes nothing.
            (StreamingReceive, ChunkApplied) => StreamingReceive,
            (StreamingReceive, StreamCompleted) => Idle,

            // ========== Synchronous path ==========
            (AwaitingSyncResponse, AnswerReceived) => Idle,

            // ========== Failure pseudo-state ==========
            (current, SubmissionFailed { error }) if current.is_in_flight() => SurfacingError {
                message: error.clone(),
            },
            (SurfacingError { .. }, ErrorSurfaced) => Idle,

            // ========== Cancellation ==========
            (current, SubmissionCancelled) if current.is_in_flight() => Idle,

            // ========== Default: No transition ==========
            _ => state.clone(),
        }
    }

    /// Check if a transition is valid without executing it.
    pub fn can_transition(&self, event: &SessionEvent) -> bool {
        let next = Self::compute_next_state(&self.current_state, event);
        next != self.current_state
    }

    /// Reset to Idle state.
    pub fn reset(&mut self) {
        self.current_state = SessionState::Idle;
    }
}
