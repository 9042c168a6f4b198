//! Checkout submission: validates the card, hands one submission to the
//! configured card processor and tracks the busy state until it settles.
//!
//! A submission is split into three steps so the presentation layer can
//! disable the submit control while the processor call is outstanding:
//!
//! 1. [`Checkout::begin`] runs the checksum and moves the form to
//!    [`SubmissionState::InFlight`].
//! 2. [`Checkout::deliver`] performs the single processor call.
//! 3. [`Checkout::settle`] records the outcome and the user notice.
//!
//! [`Checkout::submit`] runs all three in order.

use crate::error::{DeliveryError, ValidationError};
use crate::form::{FieldName, FieldSchema, FormFields, FormState, SubmissionState, ValidationResult};
use crate::luhn::luhn_valid;
use crate::mask::{last_four, mask_card};
use crate::CardNetwork;
use std::fmt;
use std::time::Duration;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Deployment settings injected when the checkout is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Processor-side identifier (merchant or account) submissions go to.
    pub destination: String,
    /// Minimum time the busy indicator stays up, regardless of how fast
    /// the processor answers. Zero disables it.
    pub min_busy: Duration,
}

impl CheckoutConfig {
    /// Creates a config with no minimum busy time.
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            min_busy: Duration::ZERO,
        }
    }

    /// Sets the minimum busy-indicator duration.
    pub fn with_min_busy(mut self, min_busy: Duration) -> Self {
        self.min_busy = min_busy;
        self
    }
}

/// Card details handed to the processor for one submission.
///
/// Wiped when dropped. `Debug` shows the last four digits only.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CardSubmission {
    card: String,
    expiry: String,
    cvc: String,
    name: String,
    email: String,
    country: String,
    alias: String,
    save_info: bool,
    #[zeroize(skip)]
    network: CardNetwork,
}

impl CardSubmission {
    fn from_fields(fields: &FormFields, schema: &FieldSchema, network: CardNetwork) -> Self {
        let pick = |field: FieldName| {
            if schema.contains(field) {
                fields.text(field).unwrap_or_default().to_string()
            } else {
                String::new()
            }
        };

        Self {
            card: fields.card.clone(),
            expiry: pick(FieldName::Expiry),
            cvc: pick(FieldName::Cvc),
            name: pick(FieldName::Name),
            email: pick(FieldName::Email),
            country: pick(FieldName::Country),
            alias: pick(FieldName::Alias),
            save_info: schema.contains(FieldName::SaveInfo) && fields.save_info,
            network,
        }
    }

    /// Card number in display form (`4242 4242 4242 4242`).
    pub fn card_number(&self) -> &str {
        &self.card
    }

    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    pub fn cvc(&self) -> &str {
        &self.cvc
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Whether the holder consented to saving the card.
    pub fn save_info(&self) -> bool {
        self.save_info
    }

    pub fn network(&self) -> CardNetwork {
        self.network
    }

    /// Plain-text receipt for the customer.
    ///
    /// Lists the non-empty fields with the card masked. The CVC is never
    /// included.
    pub fn receipt(&self) -> String {
        let mut lines = Vec::new();
        if !self.name.is_empty() {
            lines.push(format!("Name: {}", self.name));
        }
        if !self.email.is_empty() {
            lines.push(format!("Email: {}", self.email));
        }
        lines.push(format!("Card: {} {}", self.network, mask_card(&self.card)));
        if !self.expiry.is_empty() {
            lines.push(format!("Expiry: {}", self.expiry));
        }
        if !self.country.is_empty() {
            lines.push(format!("Country: {}", self.country));
        }
        lines.push(format!("Save card: {}", if self.save_info { "yes" } else { "no" }));
        lines.join("\n")
    }
}

impl fmt::Debug for CardSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardSubmission")
            .field("card", &mask_card(&self.card))
            .field("network", &self.network)
            .field("save_info", &self.save_info)
            .finish_non_exhaustive()
    }
}

/// Client for the card processor.
///
/// Implementations perform one request per call and report only whether
/// it settled successfully. Retries are not expected.
#[allow(async_fn_in_trait)]
pub trait CardProcessor {
    /// Sends one submission to `destination`.
    async fn process(&self, destination: &str, submission: &CardSubmission) -> Result<(), DeliveryError>;
}

impl<P: CardProcessor + ?Sized> CardProcessor for &P {
    async fn process(&self, destination: &str, submission: &CardSubmission) -> Result<(), DeliveryError> {
        (**self).process(destination, submission).await
    }
}

/// Kind of notice shown after a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    InvalidCard,
}

/// Localized message for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

/// Result of [`Checkout::begin`].
#[derive(Debug)]
pub enum Begin {
    /// The card failed the checksum. Nothing was sent.
    Rejected(Notice),
    /// A submission is already outstanding. Nothing changed.
    Busy,
    /// The form is now in flight; deliver this submission.
    Started(CardSubmission),
}

/// Submission orchestrator for one deployment.
#[derive(Debug)]
pub struct Checkout<P> {
    config: CheckoutConfig,
    processor: P,
}

impl<P: CardProcessor> Checkout<P> {
    pub fn new(config: CheckoutConfig, processor: P) -> Self {
        Self { config, processor }
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// Validates the card and, if it passes, marks the form in flight.
    ///
    /// A rejected card leaves the submission state untouched.
    pub fn begin(&self, form: &mut FormState) -> Begin {
        if form.submission().is_in_flight() {
            tracing::debug!("submission already in flight, ignoring submit");
            return Begin::Busy;
        }

        let card = &form.fields().card;
        if !luhn_valid(card) {
            tracing::info!(last_four = %last_four(card), "card number failed checksum");
            let notice = Notice {
                kind: NoticeKind::InvalidCard,
                message: form.strings().invalid_card,
            };
            form.set_validation(ValidationResult::Invalid(ValidationError::Checksum));
            form.set_notice(Some(notice));
            return Begin::Rejected(notice);
        }

        let submission = CardSubmission::from_fields(form.fields(), form.schema(), form.network());
        form.set_validation(ValidationResult::Valid);
        form.set_notice(None);
        form.set_submission(SubmissionState::InFlight);
        Begin::Started(submission)
    }

    /// Performs the single processor call for a started submission.
    ///
    /// Returns no earlier than `min_busy` after it was called.
    pub async fn deliver(&self, submission: &CardSubmission) -> Result<(), DeliveryError> {
        let started = tokio::time::Instant::now();
        tracing::info!(
            destination = %self.config.destination,
            network = %submission.network(),
            last_four = %last_four(submission.card_number()),
            "submitting card"
        );

        let result = self.processor.process(&self.config.destination, submission).await;

        if !self.config.min_busy.is_zero() {
            tokio::time::sleep_until(started + self.config.min_busy).await;
        }
        result
    }

    /// Records the outcome of a delivery and returns the notice to show.
    pub fn settle(&self, form: &mut FormState, result: Result<(), DeliveryError>) -> Notice {
        let strings = form.strings();
        let (state, notice) = match result {
            Ok(()) => {
                tracing::info!("submission succeeded");
                (
                    SubmissionState::Succeeded,
                    Notice {
                        kind: NoticeKind::Success,
                        message: strings.success,
                    },
                )
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                (
                    SubmissionState::Failed(strings.failure.to_string()),
                    Notice {
                        kind: NoticeKind::Failure,
                        message: strings.failure,
                    },
                )
            }
        };

        form.set_submission(state);
        form.set_notice(Some(notice));
        notice
    }

    /// Runs a whole submit: validate, deliver once, settle.
    ///
    /// Returns the form's submission state afterwards. Rejected and
    /// ignored submits return the state unchanged.
    pub async fn submit(&self, form: &mut FormState) -> SubmissionState {
        match self.begin(form) {
            Begin::Started(submission) => {
                let result = self.deliver(&submission).await;
                self.settle(form, result);
            }
            Begin::Rejected(_) | Begin::Busy => {}
        }
        form.submission().clone()
    }
}
