//! # card_entry
//!
//! Core of a card entry form: keystroke masking, card network detection,
//! Luhn validation and checkout submission. Markup and styling live in the
//! presentation layer, which forwards input events here and renders the
//! resulting [`FormState`].
//!
//! ## Quick Start
//!
//! ```rust
//! use card_entry::{CardNetwork, FieldInput, FieldName, FieldSchema, FormState, Locale};
//!
//! let mut form = FormState::new(FieldSchema::add_card(), Locale::En);
//! form.on_field_change(FieldName::Card, FieldInput::Text("4242424242424242")).unwrap();
//! form.on_field_change(FieldName::Expiry, FieldInput::Text("1230")).unwrap();
//!
//! assert_eq!(form.fields().card, "4242 4242 4242 4242");
//! assert_eq!(form.fields().expiry, "12 / 30");
//! assert_eq!(form.network(), CardNetwork::Visa);
//! assert!(card_entry::luhn_valid(&form.fields().card));
//! ```
//!
//! ## Submitting
//!
//! [`Checkout`] validates the card and passes one [`CardSubmission`] to a
//! [`CardProcessor`] implementation. While the call is outstanding the
//! form is [`SubmissionState::InFlight`] and further submits are ignored.
//!
//! ## Security
//!
//! - Field values and submissions are zeroized on drop
//! - `Debug` output and log lines show the last four digits only
//! - The customer receipt never contains the CVC
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod detect;
pub mod error;
pub mod form;
pub mod format;
pub mod locale;
pub mod luhn;
pub mod mask;
pub mod submit;

pub use card::CardNetwork;
pub use detect::detect_network;
pub use error::{DeliveryError, FormError, ValidationError};
pub use form::{FieldInput, FieldName, FieldSchema, FormFields, FormState, SubmissionState, ValidationResult};
pub use format::{format_card_number, format_cvc, format_expiry};
pub use locale::{Locale, StringTable};
pub use luhn::luhn_valid;
pub use submit::{Begin, CardProcessor, CardSubmission, Checkout, CheckoutConfig, Notice, NoticeKind};
