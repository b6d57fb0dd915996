//! ChatSession - owns one conversation and its submission lifecycle
//!
//! The embedding UI reads `messages()` and `state()`, and calls `submit` /
//! `load_history` from a single logical task. Failures inside a submission
//! are surfaced once through the notification sink and always end in `Idle`;
//! the caller only sees an `Err` for misuse (`Busy`).

use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;

use chat_core::{
    ApiChatMessage, ChatMessage, ChatPayload, ModelSettings, NotificationKind, NotificationSink,
    ProviderSelection, StreamSettings, Tool,
};
use chat_state::{SessionEvent, SessionState, StateMachine};
use chat_stream::{ChunkOutcome, ChunkStreamExt, ResponseAccumulator};
use mkit_client::{ChatBackend, ToolCatalog};

use crate::error::SessionError;

/// Per-submission knobs.
#[derive(Debug, Clone, Default)]
pub struct SubmitOptions {
    /// Use the streaming path. Defaults to off; `streaming()` turns it on.
    pub stream: bool,
    /// Server-side chunking knobs, sent only on the streaming path.
    pub stream_settings: Option<StreamSettings>,
    /// External cancellation handle for this submission. When absent the
    /// session creates its own, cancellable through `cancel_active`.
    pub cancellation: Option<CancellationToken>,
}

impl SubmitOptions {
    pub fn streaming() -> Self {
        Self {
            stream: true,
            ..Self::default()
        }
    }

    pub fn synchronous() -> Self {
        Self::default()
    }
}

/// One conversation: ordered message log, identity, and submission driver.
pub struct ChatSession<B, N>
where
    B: ChatBackend,
    N: NotificationSink,
{
    backend: B,
    notifications: N,
    machine: StateMachine,
    messages: Vec<ChatMessage>,
    chat_uuid: Option<String>,
    available_tools: Vec<Tool>,
    selected_tools: Vec<String>,
    provider: Option<ProviderSelection>,
    model_settings: ModelSettings,
    history_generation: u64,
    cancel: CancellationToken,
}

impl<B, N> ChatSession<B, N>
where
    B: ChatBackend,
    N: NotificationSink,
{
    pub fn new(backend: B, notifications: N) -> Self {
        Self {
            backend,
            notifications,
            machine: StateMachine::new(),
            messages: Vec::new(),
            chat_uuid: None,
            available_tools: Vec::new(),
            selected_tools: Vec::new(),
            provider: None,
            model_settings: ModelSettings::default(),
            history_generation: 0,
            cancel: CancellationToken::new(),
        }
    }

    // ========== Accessors ==========

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn chat_uuid(&self) -> Option<&str> {
        self.chat_uuid.as_deref()
    }

    pub fn state(&self) -> &SessionState {
        self.machine.state()
    }

    pub fn is_loading(&self) -> bool {
        self.machine.state().is_in_flight()
    }

    pub fn available_tools(&self) -> &[Tool] {
        &self.available_tools
    }

    pub fn selected_tools(&self) -> &[String] {
        &self.selected_tools
    }

    // ========== Selection ==========

    pub fn set_selected_tools(&mut self, tools: Vec<String>) {
        self.selected_tools = tools;
    }

    pub fn set_model_settings(&mut self, settings: ModelSettings) {
        self.model_settings = settings;
    }

    /// A provider override needs both halves; partial selections stay local
    /// to the picker and never reach the payload.
    pub fn select_provider(&mut self, provider: impl Into<String>, model_id: impl Into<String>) {
        self.provider = Some(ProviderSelection {
            provider: provider.into(),
            model_id: model_id.into(),
        });
    }

    pub fn clear_provider(&mut self) {
        self.provider = None;
    }

    /// Cancel the in-flight submission, if any.
    pub fn cancel_active(&self) {
        self.cancel.cancel();
    }

    // ========== Collaborator loads ==========

    /// Fetch the tool catalog. Non-fatal: a failure is logged and surfaced,
    /// the previous catalog stays.
    pub async fn load_tools<C: ToolCatalog>(&mut self, catalog: &C) {
        match catalog.list_tools().await {
            Ok(tools) => self.available_tools = tools,
            Err(err) => {
                log::error!("Error loading tools: {err}");
                self.notifications
                    .notify(NotificationKind::Error, &err.to_string());
            }
        }
    }

    /// Switch conversations. `None` resets to a fresh no-id conversation;
    /// `Some(id)` clears the view synchronously (no stale flash), fetches the
    /// persisted messages and replaces state wholesale. A failed fetch is
    /// logged and leaves the cleared state intact; a resolution that lost a
    /// race against a later switch is discarded.
    pub async fn load_history(&mut self, chat_id: Option<&str>) {
        self.cancel.cancel();
        self.messages.clear();
        self.chat_uuid = None;
        self.machine.reset();

        let Some(chat_id) = chat_id else {
            return;
        };

        self.history_generation += 1;
        let generation = self.history_generation;

        match self.backend.load_chat_history(chat_id).await {
            Ok(history) => {
                self.apply_loaded_history(generation, chat_id, history.messages);
            }
            Err(err) => {
                log::error!("Error loading chat history: {err}");
            }
        }
    }

    /// Apply a resolved history load unless a later switch superseded it.
    fn apply_loaded_history(
        &mut self,
        generation: u64,
        chat_id: &str,
        records: Vec<ApiChatMessage>,
    ) -> bool {
        if generation != self.history_generation {
            log::debug!("discarding stale history load for {chat_id}");
            return false;
        }
        self.messages = records
            .into_iter()
            .map(ApiChatMessage::into_message)
            .collect();
        self.chat_uuid = Some(chat_id.to_string());
        true
    }

    // ========== Submission ==========

    /// Submit one user message. The user message is appended immediately and
    /// stays even if the request fails. Path failures are surfaced once
    /// through the notification sink and drain the machine back to `Idle`;
    /// only calling while a submission is in flight returns an error.
    pub async fn submit(
        &mut self,
        question: &str,
        options: SubmitOptions,
    ) -> Result<(), SessionError> {
        if !self.machine.state().accepts_user_input() {
            log::warn!(
                "submission rejected while {}",
                self.machine.state().description()
            );
            return Err(SessionError::Busy);
        }

        self.messages.push(ChatMessage::user(question));
        self.machine.handle_event(SessionEvent::SubmissionStarted);

        let payload = self.build_payload(question, &options);
        let cancel = options.cancellation.clone().unwrap_or_default();
        self.cancel = cancel.clone();

        let result = if options.stream {
            self.run_streaming(&payload, &cancel).await
        } else {
            self.run_synchronous(&payload).await
        };

        if let Err(err) = result {
            let message = err.to_string();
            log::error!("submission failed: {message}");
            self.notifications
                .notify(NotificationKind::Error, &message);
            self.machine
                .handle_event(SessionEvent::SubmissionFailed { error: message });
            self.machine.handle_event(SessionEvent::ErrorSurfaced);
        }
        Ok(())
    }

    fn build_payload(&self, question: &str, options: &SubmitOptions) -> ChatPayload {
        ChatPayload {
            question: question.to_string(),
            selected_tools: self.selected_tools.clone(),
            model_settings: self.model_settings.clone(),
            stream_settings: if options.stream {
                options.stream_settings
            } else {
                None
            },
            chat_uuid: self.chat_uuid.clone(),
            llm_provider: self.provider.clone(),
        }
    }

    async fn run_streaming(
        &mut self,
        payload: &ChatPayload,
        cancel: &CancellationToken,
    ) -> Result<(), SessionError> {
        // Placeholder goes in before any bytes arrive and is the only
        // message mutated for the rest of this turn.
        self.messages.push(ChatMessage::placeholder());

        let response = self.backend.send_stream_message(payload).await?;
        self.machine.handle_event(SessionEvent::StreamOpened);

        if let Some(chat_uuid) = response.chat_uuid_header() {
            self.adopt_chat_uuid(chat_uuid);
        }

        let mut accumulator = ResponseAccumulator::new();
        let mut stream = Box::pin(response.chunk_stream());

        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    log::info!("stream submission cancelled");
                    self.machine.handle_event(SessionEvent::SubmissionCancelled);
                    return Ok(());
                }
                next = stream.next() => next,
            };
            let Some(chunk) = next else { break };
            let chunk = chunk?;

            match accumulator.apply(&chunk) {
                ChunkOutcome::Updated(full) => {
                    self.replace_trailing_assistant(full);
                    self.machine.handle_event(SessionEvent::ChunkApplied);
                }
                ChunkOutcome::Completed => break,
                ChunkOutcome::Ignored => {}
            }
        }

        self.machine.handle_event(SessionEvent::StreamCompleted);
        Ok(())
    }

    async fn run_synchronous(&mut self, payload: &ChatPayload) -> Result<(), SessionError> {
        self.machine.handle_event(SessionEvent::SyncDispatched);

        let response = self.backend.send_message(payload).await?;
        self.adopt_chat_uuid(response.chat_uuid);
        self.messages.push(ChatMessage::assistant(response.answer));

        self.machine.handle_event(SessionEvent::AnswerReceived);
        Ok(())
    }

    /// Adopt a backend-assigned conversation id exactly once; an id set by a
    /// history load or an earlier turn is never overwritten.
    fn adopt_chat_uuid(&mut self, chat_uuid: String) {
        if self.chat_uuid.is_none() && !chat_uuid.is_empty() {
            log::debug!("adopted conversation id {chat_uuid}");
            self.chat_uuid = Some(chat_uuid);
        }
    }

    /// Replace - never append - the trailing assistant message's content with
    /// the full accumulated text.
    fn replace_trailing_assistant(&mut self, content: String) {
        if let Some(last) = self.messages.last_mut() {
            if !last.is_user {
                last.content = content;
            }
        }
    }
}
