use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};
use validator::Validate;

use crate::debounce::Debouncer;
use crate::resolver::SelectionResolver;
use crate::services::capabilities::{
    PlaceDetailsService, PredictionRequest, PredictionService, ADDRESS_TYPE_FILTER,
};
use crate::types::normalized_address::NormalizedAddress;
use crate::types::prediction::Prediction;
use crate::types::session_token::SessionToken;
use crate::types::widget_config::{ConfigError, WidgetConfig};
use crate::types::widget_event::{RequestStage, WidgetEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Querying,
    ShowingPredictions,
    Resolving,
}

struct ControllerState {
    phase: Phase,
    input: String,
    predictions: Vec<Prediction>,
    dropdown_visible: bool,
    service_ready: bool,
    session_token: Option<SessionToken>,
    country: Option<String>,
    changed_place: NormalizedAddress,
}

/// The widget's query/selection state machine.
///
/// Owns the input text, the prediction list and the dropdown flag; drives the
/// debounced prediction query and the selection resolver; publishes
/// `WidgetEvent`s on the channel handed out at construction. All mutation
/// happens inside short lock scopes, never across an await.
#[derive(Clone)]
pub struct AutocompleteController {
    state: Arc<Mutex<ControllerState>>,
    prediction_service: Arc<dyn PredictionService>,
    resolver: Arc<SelectionResolver>,
    debouncer: Arc<Debouncer>,
    // Bumped on every input event and selection; a prediction response is
    // applied only while its captured value still matches.
    generation: Arc<AtomicU64>,
    events: UnboundedSender<WidgetEvent>,
}

impl AutocompleteController {
    pub fn new(
        config: WidgetConfig,
        prediction_service: Arc<dyn PredictionService>,
        details_service: Arc<dyn PlaceDetailsService>,
    ) -> Result<(Self, UnboundedReceiver<WidgetEvent>), ConfigError> {
        config.validate()?;

        let (events, receiver) = mpsc::unbounded_channel();
        let controller = AutocompleteController {
            state: Arc::new(Mutex::new(ControllerState {
                phase: Phase::Idle,
                input: String::new(),
                predictions: Vec::new(),
                dropdown_visible: false,
                service_ready: false,
                session_token: None,
                country: config.country.clone(),
                changed_place: NormalizedAddress::new(),
            })),
            prediction_service,
            resolver: Arc::new(SelectionResolver::new(
                details_service,
                &config.autocomplete_identifier,
            )),
            debouncer: Arc::new(Debouncer::new(Duration::from_millis(config.debounce_ms))),
            generation: Arc::new(AtomicU64::new(0)),
            events,
        };

        Ok((controller, receiver))
    }

    /// Marks the external service as available and mints the session token.
    /// Repeat calls are no-ops; the token lives for the whole session.
    pub fn mark_service_ready(&self) {
        let mut state = self.lock();
        if !state.service_ready {
            state.service_ready = true;
            state.session_token = Some(SessionToken::new());
        }
    }

    pub fn set_country(&self, country: Option<String>) {
        self.lock().country = country;
    }

    /// One keystroke-level input event. Non-empty text re-arms the trailing
    /// debounce; empty text short-circuits synchronously: no request, list
    /// cleared, dropdown hidden.
    pub fn handle_input(&self, text: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.lock();
            state.input = text.to_string();
            if text.is_empty() {
                state.predictions.clear();
                state.dropdown_visible = false;
                state.phase = Phase::Idle;
            } else {
                state.phase = Phase::Querying;
            }
        }

        if text.is_empty() {
            self.debouncer.cancel();
            return;
        }

        let controller = self.clone();
        self.debouncer
            .schedule(move || async move { controller.run_query(generation).await });
    }

    pub fn handle_blur(&self) {
        self.lock().dropdown_visible = false;
    }

    /// Re-opens the dropdown on focus iff predictions from the last query are
    /// still around; no re-query.
    pub fn handle_focus(&self) {
        let mut state = self.lock();
        if !state.predictions.is_empty() {
            state.dropdown_visible = true;
        }
    }

    /// Resolves a clicked prediction. On success the normalized address is
    /// merged into the accumulated output map and exactly one `PlaceChanged`
    /// is emitted; on failure the widget returns to idle silently, with only
    /// the log and the `RequestFailed` side-channel as witnesses.
    pub async fn select_prediction(&self, prediction: Prediction) {
        // Invalidate any in-flight or pending query for the old text.
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.debouncer.cancel();
        self.lock().phase = Phase::Resolving;

        match self.resolver.resolve(&prediction).await {
            Ok(address) => {
                let snapshot = {
                    let mut state = self.lock();
                    state.changed_place.merge(address);
                    state.predictions.clear();
                    state.dropdown_visible = false;
                    state.phase = Phase::Idle;
                    state.changed_place.clone()
                };
                let _ = self.events.send(WidgetEvent::PlaceChanged(snapshot));
            }
            Err(status) => {
                {
                    let mut state = self.lock();
                    state.predictions.clear();
                    state.dropdown_visible = false;
                    state.phase = Phase::Idle;
                }
                let _ = self.events.send(WidgetEvent::RequestFailed {
                    stage: RequestStage::Details,
                    status,
                });
            }
        }
    }

    async fn run_query(&self, generation: u64) {
        let request = {
            let state = self.lock();
            if !state.service_ready {
                return;
            }
            let session_token = match &state.session_token {
                Some(token) => token.clone(),
                None => return,
            };
            PredictionRequest {
                input: state.input.clone(),
                country: state.country.clone(),
                session_token,
                types: vec![ADDRESS_TYPE_FILTER.to_string()],
            }
        };

        let response = self
            .prediction_service
            .get_place_predictions(request)
            .await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Discarding superseded prediction response");
            return;
        }

        if !response.is_ok() {
            warn!("Prediction request failed with status {}", response.status);
            {
                // The previous list and dropdown are retained as-is.
                let mut state = self.lock();
                state.phase = if state.dropdown_visible && !state.predictions.is_empty() {
                    Phase::ShowingPredictions
                } else {
                    Phase::Idle
                };
            }
            let _ = self.events.send(WidgetEvent::RequestFailed {
                stage: RequestStage::Predictions,
                status: response.status,
            });
            return;
        }

        let mut state = self.lock();
        state.predictions = response.payload;
        if state.predictions.is_empty() {
            state.dropdown_visible = false;
            state.phase = Phase::Idle;
        } else {
            state.dropdown_visible = true;
            state.phase = Phase::ShowingPredictions;
        }
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    pub fn input(&self) -> String {
        self.lock().input.clone()
    }

    pub fn predictions(&self) -> Vec<Prediction> {
        self.lock().predictions.clone()
    }

    pub fn dropdown_visible(&self) -> bool {
        self.lock().dropdown_visible
    }

    pub fn is_service_ready(&self) -> bool {
        self.lock().service_ready
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
