//! FormValidationEngine: turns user input into validated field state.
//!
//! The engine owns the [`FormState`] of one registration form.  Every
//! [`FormInput`] is applied synchronously: raw values are echoed, derived
//! values are regenerated, local rules run, and the resulting [`FormEvent`]s
//! are published in a fixed order.  Remote lookups go through the injected
//! [`AvailabilityChecker`] and are spawned onto a [`JoinSet`]; each result is
//! applied later as one extra state transition.
//!
//! # Architecture
//!
//! The engine depends only on the `AvailabilityChecker` trait and the
//! `shop-core` rules.  The concrete checker is injected at construction time,
//! making the engine fully unit-testable.
//!
//! # Stale lookups
//!
//! A user can type faster than a lookup completes.  Every lookup is tagged
//! with the edit generation of its field; when a result arrives for an older
//! generation it is discarded, so the error shown always belongs to the text
//! currently displayed.
//!
//! # Observing state
//!
//! Besides the event stream, the engine publishes a snapshot of its
//! [`FormState`] on a [`watch`] channel after every transition.  Use
//! [`subscribe_state`](FormValidationEngine::subscribe_state) to read the
//! state while [`run`](FormValidationEngine::run) owns the engine.

use std::sync::Arc;

use async_trait::async_trait;
use shop_core::{
    suggest_domain_name, validate_shop_name, City, ShopError, MIN_SHOP_NAME_CHARS,
    POSTAL_CODE_PLACEHOLDER,
};
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::events::{FormEvent, FormInput};
use super::form_state::FormState;

/// City identifier used in domain suggestions until the suggestion is wired
/// to the selected city.
pub const DEFAULT_DOMAIN_CITY_ID: &str = "4";

/// Remote lookups the form depends on.
///
/// Implementations are expected to always resolve; network failures must be
/// mapped to a result (e.g. "unavailable") by the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvailabilityChecker: Send + Sync {
    /// Returns `true` if no other shop uses `name`.
    async fn check_shop_name_availability(&self, name: &str) -> bool;

    /// Returns `None` if `name` can be used as a domain, otherwise the
    /// message to display verbatim.
    async fn check_domain_name_availability(&self, name: &str) -> Option<String>;
}

/// Tunables for one form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    /// City identifier appended to domain suggestions.
    pub domain_city_id: String,
    /// Minimum shop-name length in characters.
    pub min_shop_name_chars: usize,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            domain_city_id: DEFAULT_DOMAIN_CITY_ID.to_string(),
            min_shop_name_chars: MIN_SHOP_NAME_CHARS,
        }
    }
}

/// Result of one spawned lookup, tagged with the generation it was issued for.
#[derive(Debug)]
struct CheckOutcome {
    generation: u64,
    result: CheckResult,
}

#[derive(Debug)]
enum CheckResult {
    ShopName { name: String, available: bool },
    DomainName { name: String, error: Option<String> },
}

/// The form validation engine.
///
/// One engine serves one form session.  It is not shared between tasks:
/// every operation takes `&mut self`, and lookup results are applied through
/// [`settle`](Self::settle), [`next_completion`](Self::next_completion) or
/// [`run`](Self::run).
pub struct FormValidationEngine {
    session_id: Uuid,
    settings: FormSettings,
    state: FormState,
    checker: Arc<dyn AvailabilityChecker>,
    events: mpsc::UnboundedSender<FormEvent>,
    state_watch: watch::Sender<FormState>,
    /// In-flight lookups.  Dropping the engine aborts them.
    pending: JoinSet<CheckOutcome>,
    shop_name_generation: u64,
    domain_name_generation: u64,
}

impl FormValidationEngine {
    /// Creates an engine with an empty form and returns the receiving end of
    /// its event stream.
    ///
    /// The shop-name error starts hidden; that initial visibility is the
    /// first event on the stream.
    pub fn new(
        checker: Arc<dyn AvailabilityChecker>,
        settings: FormSettings,
    ) -> (Self, mpsc::UnboundedReceiver<FormEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let (state_watch, _) = watch::channel(FormState::default());
        let engine = Self {
            session_id: Uuid::new_v4(),
            settings,
            state: FormState::default(),
            checker,
            events,
            state_watch,
            pending: JoinSet::new(),
            shop_name_generation: 0,
            domain_name_generation: 0,
        };
        engine.emit(FormEvent::ShopNameErrorHidden(true));
        (engine, rx)
    }

    /// Identifier attached to this session's log lines.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Tunables this session was created with.
    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Read-only view of the current form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns a receiver that always holds the latest state snapshot.
    ///
    /// Subscribe before handing the engine to [`run`](Self::run).
    pub fn subscribe_state(&self) -> watch::Receiver<FormState> {
        self.state_watch.subscribe()
    }

    /// Number of lookups spawned but not yet applied (stale ones included).
    pub fn pending_checks(&self) -> usize {
        self.pending.len()
    }

    /// Applies one input.
    ///
    /// `PostalCodeRequested` discards the "may proceed" answer; call
    /// [`on_postal_code_requested`](Self::on_postal_code_requested) directly
    /// when it is needed.
    pub fn handle(&mut self, input: FormInput) {
        match input {
            FormInput::ShopNameChanged(text) => self.on_shop_name_changed(&text),
            FormInput::DomainNameChanged(text) => self.on_domain_name_changed(&text),
            FormInput::CitySelected(city) => self.on_city_selected(city),
            FormInput::PostalCodeRequested => {
                self.on_postal_code_requested();
            }
            FormInput::PostalCodeChanged(value) => self.on_postal_code_changed(value),
        }
    }

    // ── Field operations ──────────────────────────────────────────────────────

    /// The shop-name text changed.
    ///
    /// Echoes the text, regenerates the suggested domain, then runs the local
    /// rules.  When they all pass the availability lookup is spawned and the
    /// error stays hidden until it resolves.
    pub fn on_shop_name_changed(&mut self, text: &str) {
        self.state.shop_name = text.to_string();
        self.emit(FormEvent::ShopNameValue(text.to_string()));

        let suggestion = suggest_domain_name(text, &self.settings.domain_city_id);
        self.state.domain_name = suggestion.clone();
        // The displayed domain changed, so any lookup for the old one is stale.
        self.domain_name_generation += 1;
        self.state.domain_name_check_pending = false;
        self.state.domain_name_checked = false;
        self.emit(FormEvent::DomainNameValue(suggestion));
        // An error for the replaced domain no longer applies.
        if self.state.domain_name_error.take().is_some() {
            self.emit(FormEvent::DomainNameError(None));
            self.emit(FormEvent::DomainErrorHidden(true));
        }

        self.shop_name_generation += 1;
        match validate_shop_name(text, self.settings.min_shop_name_chars) {
            Err(kind) => {
                debug!(session = %self.session_id, ?kind, "shop name rejected locally");
                self.state.shop_name_check_pending = false;
                self.show_shop_name_error(kind);
            }
            Ok(()) => {
                self.state.shop_name_error = None;
                self.state.shop_name_check_pending = true;
                self.emit(FormEvent::ShopNameErrorHidden(true));
                self.spawn_shop_name_check(text.to_string());
            }
        }
        self.publish_state();
    }

    /// The domain-name text changed.
    ///
    /// No local rules apply: the lookup decides everything.
    pub fn on_domain_name_changed(&mut self, text: &str) {
        self.state.domain_name = text.to_string();
        self.emit(FormEvent::DomainNameValue(text.to_string()));

        self.domain_name_generation += 1;
        self.state.domain_name_check_pending = true;
        self.state.domain_name_checked = false;
        self.spawn_domain_name_check(text.to_string());
        self.publish_state();
    }

    /// The city picker closed.
    ///
    /// A confirmed city resets the postal code.  A cancelled picker keeps the
    /// last confirmed city, or reports the city as required if there is none.
    pub fn on_city_selected(&mut self, city: Option<City>) {
        let Some(city) = city else {
            if self.state.selected_city.is_none() {
                self.show_city_required();
                self.publish_state();
            } else {
                debug!(session = %self.session_id, "city picker cancelled; keeping last city");
            }
            return;
        };

        info!(session = %self.session_id, city = %city.name, "city selected");
        self.state.selected_city = Some(city.clone());
        self.emit(FormEvent::City(city));

        if self.state.city_error.take().is_some() {
            self.emit(FormEvent::CityErrorHidden(true));
        }

        if self.state.postal_code.take().is_some() {
            self.emit(FormEvent::PostalCode(POSTAL_CODE_PLACEHOLDER.to_string()));
        }
        self.state.postal_error_hidden = true;
        self.emit(FormEvent::PostalErrorHidden(true));
        self.publish_state();
    }

    /// The user asked to open the postal-code picker.
    ///
    /// Returns `true` if the picker may open.  Without a city the city field
    /// reports itself as required instead.
    pub fn on_postal_code_requested(&mut self) -> bool {
        if self.state.selected_city.is_some() {
            return true;
        }
        self.show_city_required();
        self.publish_state();
        false
    }

    /// The postal-code picker closed with `value` (`None` = nothing chosen).
    ///
    /// Postal codes have no rules of their own; the error is always hidden.
    pub fn on_postal_code_changed(&mut self, value: Option<String>) {
        let value = value.filter(|v| v != POSTAL_CODE_PLACEHOLDER);
        let display = value
            .clone()
            .unwrap_or_else(|| POSTAL_CODE_PLACEHOLDER.to_string());
        self.state.postal_code = value;
        self.emit(FormEvent::PostalCode(display));

        self.state.postal_error_hidden = true;
        self.emit(FormEvent::PostalErrorHidden(true));
        self.publish_state();
    }

    // ── Lookup completion ─────────────────────────────────────────────────────

    /// Waits for every in-flight lookup and applies the results.
    pub async fn settle(&mut self) {
        while let Some(joined) = self.pending.join_next().await {
            self.apply_joined(joined);
        }
    }

    /// Waits for the next lookup to finish and applies it.
    ///
    /// Returns `false` immediately if nothing is in flight.
    pub async fn next_completion(&mut self) -> bool {
        match self.pending.join_next().await {
            Some(joined) => {
                self.apply_joined(joined);
                true
            }
            None => false,
        }
    }

    /// Drives the engine from an input channel until it closes.
    ///
    /// Inputs and lookup results are interleaved in arrival order.  Once the
    /// channel closes the remaining lookups are settled and the final state
    /// is returned.
    pub async fn run(mut self, mut inputs: mpsc::Receiver<FormInput>) -> FormState {
        info!(session = %self.session_id, "form session started");
        loop {
            tokio::select! {
                maybe_input = inputs.recv() => match maybe_input {
                    Some(input) => self.handle(input),
                    None => break,
                },
                Some(joined) = self.pending.join_next(), if !self.pending.is_empty() => {
                    self.apply_joined(joined);
                }
            }
        }
        self.settle().await;
        info!(session = %self.session_id, complete = self.state.is_complete(), "form session ended");
        self.state
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn spawn_shop_name_check(&mut self, name: String) {
        let checker = Arc::clone(&self.checker);
        let generation = self.shop_name_generation;
        self.pending.spawn(async move {
            let available = checker.check_shop_name_availability(&name).await;
            CheckOutcome {
                generation,
                result: CheckResult::ShopName { name, available },
            }
        });
    }

    fn spawn_domain_name_check(&mut self, name: String) {
        let checker = Arc::clone(&self.checker);
        let generation = self.domain_name_generation;
        self.pending.spawn(async move {
            let error = checker.check_domain_name_availability(&name).await;
            CheckOutcome {
                generation,
                result: CheckResult::DomainName { name, error },
            }
        });
    }

    fn apply_joined(&mut self, joined: Result<CheckOutcome, JoinError>) {
        match joined {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(e) => {
                warn!(session = %self.session_id, "availability lookup did not complete: {e}");
            }
        }
    }

    fn apply_outcome(&mut self, outcome: CheckOutcome) {
        match outcome.result {
            CheckResult::ShopName { name, available } => {
                if outcome.generation != self.shop_name_generation {
                    debug!(session = %self.session_id, %name, "discarding stale shop-name lookup");
                    return;
                }
                self.state.shop_name_check_pending = false;
                if available {
                    self.state.shop_name_error = None;
                    self.emit(FormEvent::ShopNameErrorHidden(true));
                } else {
                    debug!(session = %self.session_id, %name, "shop name unavailable");
                    self.show_shop_name_error(ShopError::NameUnavailable);
                }
            }
            CheckResult::DomainName { name, error } => {
                if outcome.generation != self.domain_name_generation {
                    debug!(session = %self.session_id, %name, "discarding stale domain lookup");
                    return;
                }
                self.state.domain_name_check_pending = false;
                self.state.domain_name_checked = true;
                self.state.domain_name_error = error.clone();
                let hidden = error.is_none();
                self.emit(FormEvent::DomainNameError(error));
                self.emit(FormEvent::DomainErrorHidden(hidden));
            }
        }
        self.publish_state();
    }

    fn show_shop_name_error(&mut self, kind: ShopError) {
        self.state.shop_name_error = Some(kind);
        self.emit(FormEvent::ShopNameError(kind.message()));
        self.emit(FormEvent::ShopNameErrorHidden(false));
    }

    fn show_city_required(&mut self) {
        self.state.city_error = Some(ShopError::Empty);
        self.emit(FormEvent::CityError(ShopError::Empty.message()));
        self.emit(FormEvent::CityErrorHidden(false));
    }

    fn publish_state(&self) {
        self.state_watch.send_replace(self.state.clone());
    }

    fn emit(&self, event: FormEvent) {
        // A dropped receiver only means nobody is rendering the form anymore.
        if self.events.send(event).is_err() {
            debug!(session = %self.session_id, "event receiver dropped");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
