use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

use crate::{
    advice,
    error::FetchError,
    model::{ViewState, WeatherQuery, WeatherSnapshot},
    provider::WeatherProvider,
};

/// Shown when the submitted city is blank; no request is made in that case.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a city name";

/// Owns the request lifecycle: validate input, fetch, classify failures,
/// derive the advisory, publish the resulting [`ViewState`].
///
/// State is exposed through a `watch` channel; the presentation layer either
/// awaits changes on a [`watch::Receiver`] or polls [`AdvisoryWorkflow::state`].
/// Overlapping requests are resolved by sequence number: each request is
/// tagged at initiation and a completion is only applied while its tag is
/// still the highest issued, so an older in-flight request can never
/// overwrite a newer result.
#[derive(Debug)]
pub struct AdvisoryWorkflow {
    provider: Box<dyn WeatherProvider>,
    tx: watch::Sender<ViewState>,
    next_seq: AtomicU64,
}

impl AdvisoryWorkflow {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        let (tx, _) = watch::channel(ViewState::default());
        Self {
            provider,
            tx,
            next_seq: AtomicU64::new(0),
        }
    }

    /// Subscribe to state changes. Receivers created here see every
    /// published transition from this point on.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    /// Current state, for pollers.
    pub fn state(&self) -> ViewState {
        self.tx.borrow().clone()
    }

    /// Run one query through the whole lifecycle. Never returns an error;
    /// observers see the outcome in the published state.
    pub async fn submit_query(&self, city: &str) {
        let city = city.trim();
        if city.is_empty() {
            // Validation short-circuit: no loading, no network, prior
            // snapshot stays as it was.
            self.tx
                .send_modify(|s| s.error = EMPTY_INPUT_MESSAGE.to_string());
            return;
        }

        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let city = city.to_string();

        self.tx.send_modify(|s| {
            s.city = city.clone();
            s.snapshot = None;
            s.advisory.clear();
            s.error.clear();
            s.loading = true;
        });

        let outcome = self.provider.current_weather(&WeatherQuery::new(city)).await;

        if self.next_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "discarding result of superseded request");
            return;
        }

        match outcome {
            Ok(snapshot) => self.publish_success(snapshot),
            Err(err) => self.publish_failure(&err),
        }
    }

    fn publish_success(&self, snapshot: WeatherSnapshot) {
        let advisory = advice::advisory_text(snapshot.temperature_c, &snapshot.description);
        self.tx.send_modify(|s| {
            s.snapshot = Some(snapshot);
            s.advisory = advisory;
            s.error.clear();
            s.loading = false;
        });
    }

    fn publish_failure(&self, err: &FetchError) {
        debug!(error = %err, "weather fetch failed");
        self.tx.send_modify(|s| {
            s.error = err.user_message().to_string();
            s.loading = false;
        });
    }
}
