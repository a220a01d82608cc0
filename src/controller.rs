//! Prompt submission state machine for the Design Atelier form.
//!
//! ```text
//! Idle | Success | Error --submit(non-empty)--> Loading --payload--> Success
//!                                                     \--absent or error--> Error
//! ```
//!
//! Blank prompts are ignored and submissions observed while `Loading` are rejected. The
//! state is published on a [`tokio::sync::watch`] channel so a view layer can render every
//! transition, including the intermediate `Loading`.

use crate::{gemini::ImageGenerator, logger, models::ImagePayload};
use serde::Serialize;
use tokio::sync::watch;
use uuid::Uuid;

/// The single message shown for every failure cause.
pub const GENERIC_ERROR_MESSAGE: &str = "Please try again in a moment.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "image", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationState {
    Idle,
    Loading,
    Success(ImagePayload),
    Error,
}

impl GenerationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, GenerationState::Loading)
    }

    pub fn payload(&self) -> Option<&ImagePayload> {
        match self {
            GenerationState::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            GenerationState::Error => Some(GENERIC_ERROR_MESSAGE),
            _ => None,
        }
    }
}

/// What happened to one call to [`GenerationRequestController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank prompt, nothing changed.
    Ignored,
    /// A request was already in flight, nothing changed.
    Busy,
    Succeeded,
    Failed,
}

pub struct GenerationRequestController<G: ImageGenerator> {
    generator: G,
    state: watch::Sender<GenerationState>,
}

impl<G: ImageGenerator> GenerationRequestController<G> {
    pub fn new(generator: G) -> Self {
        let (state, _) = watch::channel(GenerationState::Idle);
        Self { generator, state }
    }

    pub fn state(&self) -> GenerationState {
        self.state.borrow().clone()
    }

    pub fn payload(&self) -> Option<ImagePayload> {
        self.state.borrow().payload().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.state.subscribe()
    }

    #[cfg(test)]
    pub(crate) fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn submit(&self, prompt: &str) -> Submission {
        if prompt.trim().is_empty() {
            log::debug!("Ignoring blank prompt");
            return Submission::Ignored;
        }

        // Check-and-set under the channel lock; this also drops any previous payload.
        let accepted = self.state.send_if_modified(|state| {
            if state.is_loading() {
                false
            } else {
                *state = GenerationState::Loading;
                true
            }
        });
        if !accepted {
            log::warn!("Generation already in progress; submission rejected");
            return Submission::Busy;
        }
        let in_flight = InFlight {
            state: &self.state,
            settled: false,
        };

        let request_id = Uuid::new_v4();
        log::info!("[req:{}] Generating nail art concept", request_id);
        let _timer = logger::timer(&format!("nail art generation {}", request_id));

        let (next, outcome) = match self.generator.generate(prompt).await {
            Ok(Some(payload)) => (GenerationState::Success(payload), Submission::Succeeded),
            Ok(None) => {
                log::warn!("[req:{}] No image data received", request_id);
                (GenerationState::Error, Submission::Failed)
            }
            Err(e) => {
                log::error!("[req:{}] Generation failed: {}", request_id, e);
                (GenerationState::Error, Submission::Failed)
            }
        };

        in_flight.settle(next);
        outcome
    }
}

/// Owns the `Loading` state of one accepted submission. Dropping it before
/// [`InFlight::settle`] (the `submit` future was cancelled) moves the state to `Error` so
/// the next submission is not rejected as busy.
struct InFlight<'a> {
    state: &'a watch::Sender<GenerationState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, next: GenerationState) {
        self.settled = true;
        self.state.send_replace(next);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            log::warn!("Generation abandoned before completion");
            self.state.send_replace(GenerationState::Error);
        }
    }
}
