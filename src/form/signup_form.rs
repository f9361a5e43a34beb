//! The sign-up form's reactive graph

use super::input_state::{FormSnapshot, InputField, RawInputState};
use crate::signal::{CurrentValue, ReadSignal};

/// Signals derived from the raw inputs, listed in dependency order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedSignal {
    FormattedEmail,
    EmailValid,
    PasswordValid,
    PasswordMatchesConfirmation,
    PasswordValidAndConfirmed,
    FormIsValid,
}

impl DerivedSignal {
    /// Recomputation order; each signal comes after everything it reads
    pub const ORDER: [DerivedSignal; 6] = [
        DerivedSignal::FormattedEmail,
        DerivedSignal::EmailValid,
        DerivedSignal::PasswordValid,
        DerivedSignal::PasswordMatchesConfirmation,
        DerivedSignal::PasswordValidAndConfirmed,
        DerivedSignal::FormIsValid,
    ];

    /// Whether this signal must be recomputed when `field` is set
    pub fn depends_on(&self, field: InputField) -> bool {
        use InputField::*;
        match self {
            DerivedSignal::FormattedEmail | DerivedSignal::EmailValid => field == Email,
            DerivedSignal::PasswordValid => field == Password,
            DerivedSignal::PasswordMatchesConfirmation
            | DerivedSignal::PasswordValidAndConfirmed => {
                matches!(field, Password | Confirmation)
            }
            DerivedSignal::FormIsValid => true,
        }
    }

    /// Signals reachable from `field`, in recomputation order
    pub fn affected_by(field: InputField) -> impl Iterator<Item = DerivedSignal> {
        Self::ORDER
            .into_iter()
            .filter(move |signal| signal.depends_on(field))
    }
}

/// A sign-up form session.
///
/// Holds the four raw inputs and the derived signals computed from them.
/// Setting an input stores it, recomputes every dependent signal from the
/// updated state, then notifies the input's subscribers followed by each
/// dependent signal's subscribers in [`DerivedSignal::ORDER`]. Values are
/// all stored before any subscriber runs, so no subscriber sees a mix of
/// old and new derived values. Clones share the same session.
#[derive(Debug, Clone)]
pub struct SignupForm {
    email_text: CurrentValue<String>,
    password_text: CurrentValue<String>,
    confirmation_text: CurrentValue<String>,
    agree_terms: CurrentValue<bool>,

    formatted_email: CurrentValue<String>,
    email_valid: CurrentValue<bool>,
    password_valid: CurrentValue<bool>,
    password_matches_confirmation: CurrentValue<bool>,
    password_valid_and_confirmed: CurrentValue<bool>,
    form_is_valid: CurrentValue<bool>,
}

impl SignupForm {
    /// Create a form with empty text fields and terms not agreed
    pub fn new() -> Self {
        Self::with_state(RawInputState::default())
    }

    pub fn with_state(state: RawInputState) -> Self {
        let snapshot = FormSnapshot::derive(&state);
        Self {
            email_text: CurrentValue::new(state.email_text),
            password_text: CurrentValue::new(state.password_text),
            confirmation_text: CurrentValue::new(state.confirmation_text),
            agree_terms: CurrentValue::new(state.agree_terms),

            formatted_email: CurrentValue::new(snapshot.formatted_email),
            email_valid: CurrentValue::new(snapshot.email_valid),
            password_valid: CurrentValue::new(snapshot.password_valid),
            password_matches_confirmation: CurrentValue::new(
                snapshot.password_matches_confirmation,
            ),
            password_valid_and_confirmed: CurrentValue::new(snapshot.password_valid_and_confirmed),
            form_is_valid: CurrentValue::new(snapshot.form_is_valid),
        }
    }

    // Inputs

    pub fn set_email(&self, text: impl Into<String>) {
        self.email_text.replace(text.into());
        self.propagate(InputField::Email);
    }

    pub fn set_password(&self, text: impl Into<String>) {
        self.password_text.replace(text.into());
        self.propagate(InputField::Password);
    }

    pub fn set_confirmation(&self, text: impl Into<String>) {
        self.confirmation_text.replace(text.into());
        self.propagate(InputField::Confirmation);
    }

    pub fn set_agree_terms(&self, agree: bool) {
        self.agree_terms.replace(agree);
        self.propagate(InputField::AgreeTerms);
    }

    pub fn email_text(&self) -> ReadSignal<String> {
        self.email_text.read_only()
    }

    #[allow(dead_code)]
    pub fn password_text(&self) -> ReadSignal<String> {
        self.password_text.read_only()
    }

    #[allow(dead_code)]
    pub fn confirmation_text(&self) -> ReadSignal<String> {
        self.confirmation_text.read_only()
    }

    #[allow(dead_code)]
    pub fn agree_terms(&self) -> ReadSignal<bool> {
        self.agree_terms.read_only()
    }

    // Derived signals

    /// Email text, trimmed and lowercased
    pub fn formatted_email(&self) -> ReadSignal<String> {
        self.formatted_email.read_only()
    }

    pub fn email_valid(&self) -> ReadSignal<bool> {
        self.email_valid.read_only()
    }

    pub fn password_valid(&self) -> ReadSignal<bool> {
        self.password_valid.read_only()
    }

    pub fn password_matches_confirmation(&self) -> ReadSignal<bool> {
        self.password_matches_confirmation.read_only()
    }

    #[allow(dead_code)]
    pub fn password_valid_and_confirmed(&self) -> ReadSignal<bool> {
        self.password_valid_and_confirmed.read_only()
    }

    /// Email valid, password valid and confirmed, and terms agreed
    pub fn form_is_valid(&self) -> ReadSignal<bool> {
        self.form_is_valid.read_only()
    }

    /// Current raw inputs
    pub fn input_state(&self) -> RawInputState {
        RawInputState {
            email_text: self.email_text.get(),
            password_text: self.password_text.get(),
            confirmation_text: self.confirmation_text.get(),
            agree_terms: self.agree_terms.get(),
        }
    }

    /// Current derived values, as held by the signals
    #[allow(dead_code)]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            formatted_email: self.formatted_email.get(),
            email_valid: self.email_valid.get(),
            password_valid: self.password_valid.get(),
            password_matches_confirmation: self.password_matches_confirmation.get(),
            password_valid_and_confirmed: self.password_valid_and_confirmed.get(),
            form_is_valid: self.form_is_valid.get(),
        }
    }

    fn propagate(&self, changed: InputField) {
        let snapshot = FormSnapshot::derive(&self.input_state());
        tracing::debug!(
            field = %changed,
            email_valid = snapshot.email_valid,
            password_valid_and_confirmed = snapshot.password_valid_and_confirmed,
            form_is_valid = snapshot.form_is_valid,
            "Input changed"
        );

        for signal in DerivedSignal::affected_by(changed) {
            self.store(signal, &snapshot);
        }

        match changed {
            InputField::Email => self.email_text.notify(),
            InputField::Password => self.password_text.notify(),
            InputField::Confirmation => self.confirmation_text.notify(),
            InputField::AgreeTerms => self.agree_terms.notify(),
        }

        for signal in DerivedSignal::affected_by(changed) {
            self.derived_cell_notify(signal);
        }
    }

    fn store(&self, signal: DerivedSignal, snapshot: &FormSnapshot) {
        match signal {
            DerivedSignal::FormattedEmail => self
                .formatted_email
                .replace(snapshot.formatted_email.clone()),
            DerivedSignal::EmailValid => self.email_valid.replace(snapshot.email_valid),
            DerivedSignal::PasswordValid => self.password_valid.replace(snapshot.password_valid),
            DerivedSignal::PasswordMatchesConfirmation => self
                .password_matches_confirmation
                .replace(snapshot.password_matches_confirmation),
            DerivedSignal::PasswordValidAndConfirmed => self
                .password_valid_and_confirmed
                .replace(snapshot.password_valid_and_confirmed),
            DerivedSignal::FormIsValid => self.form_is_valid.replace(snapshot.form_is_valid),
        }
    }

    fn derived_cell_notify(&self, signal: DerivedSignal) {
        match signal {
            DerivedSignal::FormattedEmail => self.formatted_email.notify(),
            DerivedSignal::EmailValid => self.email_valid.notify(),
            DerivedSignal::PasswordValid => self.password_valid.notify(),
            DerivedSignal::PasswordMatchesConfirmation => {
                self.password_matches_confirmation.notify()
            }
            DerivedSignal::PasswordValidAndConfirmed => self.password_valid_and_confirmed.notify(),
            DerivedSignal::FormIsValid => self.form_is_valid.notify(),
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}
