//! Debounced, race-safe search box
//!
//! [`QueryInputController`] is the synchronous state machine: it decides when
//! to look up suggestions, which results may be shown and where a submit or a
//! selection leads. [`TypeaheadSession`] runs one controller on the tokio
//! runtime, arming its timers and executing lookups against a
//! [`SuggestionProvider`](adamftd_core::SuggestionProvider).

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod controller;
mod session;

pub use controller::{
    Effect, LookupDisposition, LookupFailure, LookupRequest, QueryInputController, RequestId,
    SearchBoxState, SuggestionBatch, TimerTicket,
};
pub use session::{InputEvent, SessionHandle, TypeaheadSession};
