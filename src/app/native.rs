//! Native session driver
//!
//! Owns a transport plus the form state and executes reducer effects:
//! network effects run immediately and their completions feed back into the
//! reducer; the success-banner timer is parked until [`Session::flush_status_clear`].

use crate::client::request::NoWasmClient;
use crate::error::Result;
use crate::form::{reduce, Effect, FormEvent, FormState};
use crate::interface::{HttpClient, RequestApi};
use std::time::Duration;

pub struct Session<C> {
    client: C,
    state: FormState,
    pending_clear: Option<(u64, u64)>,
}

impl Session<NoWasmClient> {
    /// Session against the production web app.
    pub async fn connect() -> Result<Self> {
        Ok(Session::with_client(NoWasmClient::new().await?))
    }
}

impl<C: RequestApi> Session<C> {
    pub fn with_client(client: C) -> Self {
        Session {
            client,
            state: FormState::default(),
            pending_clear: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run the reducer and execute the returned effects. Completions are
    /// fed back in, so one dispatch may settle several transitions.
    pub async fn dispatch(&mut self, event: FormEvent) {
        let mut queue = reduce(&mut self.state, event);
        while !queue.is_empty() {
            let mut follow_ups = Vec::new();
            for effect in queue {
                if let Some(completion) = self.run_effect(effect).await {
                    follow_ups.extend(reduce(&mut self.state, completion));
                }
            }
            queue = follow_ups;
        }
    }

    async fn run_effect(&mut self, effect: Effect) -> Option<FormEvent> {
        match effect {
            Effect::LoadRoster { epoch } => {
                let completion = match crate::app::load_roster(&self.client).await {
                    Ok(roster) => FormEvent::RosterLoaded { epoch, roster },
                    Err(e) => {
                        log::warn!("roster load failed: {e}");
                        FormEvent::RosterFailed {
                            epoch,
                            message: e.message(),
                        }
                    }
                };
                Some(completion)
            }
            Effect::Submit { payload } => {
                let completion = match crate::app::submit_payment(&self.client, &payload).await {
                    Ok(message) => FormEvent::SubmitSucceeded { message },
                    Err(e) => {
                        log::warn!("submission failed: {e}");
                        FormEvent::SubmitFailed {
                            message: e.message(),
                        }
                    }
                };
                Some(completion)
            }
            Effect::ScheduleStatusClear { epoch, delay_ms } => {
                self.pending_clear = Some((epoch, delay_ms));
                None
            }
        }
    }

    /// Wait out the pending success-banner timer, if any, and deliver its
    /// tick. The reducer drops the tick when the banner changed meanwhile.
    pub async fn flush_status_clear(&mut self) {
        if let Some((epoch, delay_ms)) = self.pending_clear.take() {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            self.dispatch(FormEvent::StatusClearElapsed { epoch }).await;
        }
    }
}
