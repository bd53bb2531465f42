//! Async driver for [`QueryInputController`]
//!
//! A session task owns the controller and runs a single `select!` loop over
//! user input, the debounce timer, the blur timer and settled lookups. Lookups
//! run as spawned tasks bounded by the configured timeout; their results come
//! back through a channel and pass the controller's staleness check before
//! anything is shown. State changes are published on a watch channel.

use crate::controller::{
    Effect, LookupFailure, LookupRequest, QueryInputController, SearchBoxState, TimerTicket,
};
use adamftd_core::error::{Error, Result};
use adamftd_core::{Navigator, Suggestion, SuggestionProvider, TypeaheadConfig};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout, Sleep};
use tracing::{debug, info, trace};

const INPUT_CHANNEL_CAPACITY: usize = 64;

/// User interaction fed into a running session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    SetQuery(String),
    Clear,
    Focus,
    Blur,
    Submit,
    Select(Suggestion),
    /// Select by position in the currently displayed batch
    SelectIndex(usize),
}

/// How a spawned lookup settled
#[derive(Debug)]
enum LookupOutcome {
    Resolved(LookupRequest, Vec<Suggestion>),
    Failed(LookupRequest, LookupFailure),
}

enum Wake {
    Input(Option<InputEvent>),
    Debounce(TimerTicket),
    Blur(TimerTicket),
    Lookup(LookupOutcome),
}

type Timer = Option<(TimerTicket, Pin<Box<Sleep>>)>;

/// Resolves when the armed timer fires; pends forever when none is armed
async fn fired(timer: &mut Timer) -> TimerTicket {
    match timer {
        Some((ticket, sleep)) => {
            sleep.as_mut().await;
            *ticket
        }
        None => std::future::pending().await,
    }
}

/// One search box bound to a suggestion provider and a navigator
pub struct TypeaheadSession<P: ?Sized, N: ?Sized> {
    controller: QueryInputController,
    provider: Arc<P>,
    navigator: Arc<N>,
    lookup_timeout: Duration,
    state_tx: watch::Sender<SearchBoxState>,
}

impl<P, N> TypeaheadSession<P, N>
where
    P: SuggestionProvider + ?Sized + 'static,
    N: Navigator + ?Sized + 'static,
{
    /// Start a session task on the current runtime
    pub fn spawn(
        config: TypeaheadConfig,
        provider: Arc<P>,
        navigator: Arc<N>,
    ) -> SessionHandle {
        let lookup_timeout = config.lookup_timeout();
        let controller = QueryInputController::new(config);
        let (state_tx, state_rx) = watch::channel(controller.snapshot());
        let (input_tx, input_rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);

        let session = Self {
            controller,
            provider,
            navigator,
            lookup_timeout,
            state_tx,
        };
        let task = tokio::spawn(session.run(input_rx));

        SessionHandle {
            input: input_tx,
            state: state_rx,
            task,
        }
    }

    async fn run(mut self, mut input_rx: mpsc::Receiver<InputEvent>) {
        debug!("Search session started");
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
        let mut debounce: Timer = None;
        let mut blur: Timer = None;

        loop {
            let wake = tokio::select! {
                event = input_rx.recv() => Wake::Input(event),
                ticket = fired(&mut debounce) => Wake::Debounce(ticket),
                ticket = fired(&mut blur) => Wake::Blur(ticket),
                Some(outcome) = outcome_rx.recv() => Wake::Lookup(outcome),
            };

            let effects = match wake {
                Wake::Input(Some(event)) => self.handle_input(event),
                Wake::Input(None) => break,
                Wake::Debounce(ticket) => {
                    debounce = None;
                    self.controller.debounce_elapsed(ticket)
                }
                Wake::Blur(ticket) => {
                    blur = None;
                    self.controller.blur_elapsed(ticket);
                    Vec::new()
                }
                Wake::Lookup(outcome) => {
                    self.handle_outcome(outcome);
                    Vec::new()
                }
            };

            for effect in effects {
                match effect {
                    Effect::ScheduleDebounce { ticket, delay } => {
                        debounce = Some((ticket, Box::pin(sleep(delay))));
                    }
                    Effect::ScheduleBlur { ticket, delay } => {
                        blur = Some((ticket, Box::pin(sleep(delay))));
                    }
                    Effect::IssueLookup(request) => self.spawn_lookup(request, &outcome_tx),
                    Effect::Navigate(target) => {
                        info!("Navigating to {}", target);
                        self.navigator.navigate(&target);
                    }
                }
            }

            self.publish();
        }

        debug!("Search session stopped");
    }

    fn handle_input(&mut self, event: InputEvent) -> Vec<Effect> {
        trace!("Input event: {:?}", event);
        match event {
            InputEvent::SetQuery(text) => self.controller.set_query(text),
            InputEvent::Clear => self.controller.clear(),
            InputEvent::Focus => self.controller.focus(),
            InputEvent::Blur => self.controller.blur(),
            InputEvent::Submit => self.controller.submit(),
            InputEvent::Select(suggestion) => self.controller.select_suggestion(&suggestion),
            InputEvent::SelectIndex(index) => self.controller.select_index(index),
        }
    }

    fn handle_outcome(&mut self, outcome: LookupOutcome) {
        match outcome {
            LookupOutcome::Resolved(request, suggestions) => {
                self.controller.lookup_resolved(&request, suggestions);
            }
            LookupOutcome::Failed(request, failure) => {
                self.controller.lookup_failed(&request, failure);
            }
        }
    }

    /// Superseded lookups are left to finish; their results are dropped on arrival
    fn spawn_lookup(
        &self,
        request: LookupRequest,
        outcome_tx: &mpsc::UnboundedSender<LookupOutcome>,
    ) {
        let provider = Arc::clone(&self.provider);
        let outcome_tx = outcome_tx.clone();
        let limit = self.lookup_timeout;

        tokio::spawn(async move {
            let result = timeout(limit, provider.lookup(&request.query)).await;
            let outcome = match result {
                Ok(Ok(suggestions)) => LookupOutcome::Resolved(request, suggestions),
                Ok(Err(e)) => {
                    LookupOutcome::Failed(request, LookupFailure::Provider(e.to_string()))
                }
                Err(_) => LookupOutcome::Failed(request, LookupFailure::TimedOut),
            };
            // The session may already be gone
            let _ = outcome_tx.send(outcome);
        });
    }

    fn publish(&self) {
        let snapshot = self.controller.snapshot();
        self.state_tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }
}

/// Client side of a running session
#[derive(Debug)]
pub struct SessionHandle {
    input: mpsc::Sender<InputEvent>,
    state: watch::Receiver<SearchBoxState>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    /// Queue an input event
    pub async fn send(&self, event: InputEvent) -> Result<()> {
        self.input
            .send(event)
            .await
            .map_err(|_| Error::Other(anyhow::anyhow!("search session has stopped")))
    }

    pub async fn set_query(&self, text: impl Into<String>) -> Result<()> {
        self.send(InputEvent::SetQuery(text.into())).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.send(InputEvent::Clear).await
    }

    pub async fn focus(&self) -> Result<()> {
        self.send(InputEvent::Focus).await
    }

    pub async fn blur(&self) -> Result<()> {
        self.send(InputEvent::Blur).await
    }

    pub async fn submit(&self) -> Result<()> {
        self.send(InputEvent::Submit).await
    }

    pub async fn select(&self, suggestion: Suggestion) -> Result<()> {
        self.send(InputEvent::Select(suggestion)).await
    }

    pub async fn select_index(&self, index: usize) -> Result<()> {
        self.send(InputEvent::SelectIndex(index)).await
    }

    /// Latest published state
    pub fn state(&self) -> SearchBoxState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SearchBoxState> {
        self.state.clone()
    }

    /// Wait until the published state satisfies `predicate`
    pub async fn wait_for(
        &mut self,
        predicate: impl FnMut(&SearchBoxState) -> bool,
    ) -> Result<SearchBoxState> {
        let state = self
            .state
            .wait_for(predicate)
            .await
            .map_err(|_| Error::Other(anyhow::anyhow!("search session has stopped")))?;
        Ok((*state).clone())
    }

    /// Close the input channel and wait for the session task to exit
    pub async fn shutdown(self) -> Result<()> {
        let Self { input, task, .. } = self;
        drop(input);
        task.await
            .map_err(|e| Error::Other(anyhow::anyhow!("search session task failed: {e}")))
    }
}
