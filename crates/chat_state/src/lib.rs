//! chat_state - Conversation state machine for the MKit chat client
//!
//! Tracks one conversation's submission lifecycle:
//! `Idle -> Submitting -> {StreamingReceive | AwaitingSyncResponse} -> Idle`,
//! with an error pseudo-state that always drains back to `Idle`.

pub mod machine;

// Re-export commonly used types
pub use machine::{SessionEvent, SessionState, StateMachine, StateTransition};
