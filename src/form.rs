//! Form state: field values, the detected network, the inline validation
//! result and the submission lifecycle of one rendered form.
//!
//! A [`FieldSchema`] lists which fields a form shows, so the short
//! card-only layout and the full checkout layout share one controller.

use crate::detect::detect_network;
use crate::error::{FormError, ValidationError};
use crate::format::{format_card_number, format_cvc, format_expiry};
use crate::locale::{Locale, StringTable};
use crate::mask::last_four;
use crate::submit::{Notice, NoticeKind};
use crate::CardNetwork;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Names of the fields a form can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Email,
    Card,
    Expiry,
    Cvc,
    Name,
    Country,
    Alias,
    /// The "save my card" consent checkbox.
    SaveInfo,
}

impl FieldName {
    /// Every field, in display order.
    pub const ALL: [FieldName; 8] = [
        Self::Email,
        Self::Card,
        Self::Expiry,
        Self::Cvc,
        Self::Name,
        Self::Country,
        Self::Alias,
        Self::SaveInfo,
    ];

    /// Key used by the presentation layer (the input's `name` attribute).
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Card => "card",
            Self::Expiry => "expiry",
            Self::Cvc => "cvc",
            Self::Name => "name",
            Self::Country => "country",
            Self::Alias => "alias",
            Self::SaveInfo => "saveInfo",
        }
    }

    /// Looks a field up by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// True for checkbox-typed fields.
    pub const fn is_checkbox(&self) -> bool {
        matches!(self, Self::SaveInfo)
    }

    /// Localized label, or `None` for the checkbox (it uses the consent text).
    pub fn label(&self, strings: &StringTable) -> Option<&'static str> {
        let labels = &strings.labels;
        match self {
            Self::Email => Some(labels.email),
            Self::Card => Some(labels.card),
            Self::Expiry => Some(labels.expiry),
            Self::Cvc => Some(labels.cvc),
            Self::Name => Some(labels.name),
            Self::Country => Some(labels.country),
            Self::Alias => Some(labels.alias),
            Self::SaveInfo => None,
        }
    }
}

/// The set of fields a form variant shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Vec<FieldName>,
}

impl FieldSchema {
    /// Builds a schema from a list of fields. Duplicates are dropped and
    /// the card field is always present.
    pub fn new(fields: impl IntoIterator<Item = FieldName>) -> Self {
        let mut list: Vec<FieldName> = Vec::new();
        for f in fields {
            if !list.contains(&f) {
                list.push(f);
            }
        }
        if !list.contains(&FieldName::Card) {
            list.insert(0, FieldName::Card);
        }
        Self { fields: list }
    }

    /// The "add a card" layout: nickname, card, holder name, expiry, CVC
    /// and the save consent checkbox.
    pub fn add_card() -> Self {
        Self::new([
            FieldName::Alias,
            FieldName::Card,
            FieldName::Name,
            FieldName::Expiry,
            FieldName::Cvc,
            FieldName::SaveInfo,
        ])
    }

    /// The full checkout layout with every field.
    pub fn checkout() -> Self {
        Self::new(FieldName::ALL)
    }

    /// Whether the field is shown.
    pub fn contains(&self, field: FieldName) -> bool {
        self.fields.contains(&field)
    }

    /// Enabled fields in display order.
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::add_card()
    }
}

/// Current display values of every field.
///
/// Values are always the formatted representation. Contents are wiped
/// when dropped and `Debug` never prints the card number or CVC.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct FormFields {
    pub email: String,
    pub card: String,
    pub expiry: String,
    pub cvc: String,
    pub name: String,
    pub country: String,
    pub alias: String,
    pub save_info: bool,
}

impl FormFields {
    /// Returns the text value of a field, or `None` for the checkbox.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Email => Some(&self.email),
            FieldName::Card => Some(&self.card),
            FieldName::Expiry => Some(&self.expiry),
            FieldName::Cvc => Some(&self.cvc),
            FieldName::Name => Some(&self.name),
            FieldName::Country => Some(&self.country),
            FieldName::Alias => Some(&self.alias),
            FieldName::SaveInfo => None,
        }
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::Email => Some(&mut self.email),
            FieldName::Card => Some(&mut self.card),
            FieldName::Expiry => Some(&mut self.expiry),
            FieldName::Cvc => Some(&mut self.cvc),
            FieldName::Name => Some(&mut self.name),
            FieldName::Country => Some(&mut self.country),
            FieldName::Alias => Some(&mut self.alias),
            FieldName::SaveInfo => None,
        }
    }
}

impl fmt::Debug for FormFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFields")
            .field("email", &self.email)
            .field("card", &format_args!("****{}", last_four(&self.card)))
            .field("expiry", &self.expiry)
            .field("cvc", &"***")
            .field("name", &self.name)
            .field("country", &self.country)
            .field("alias", &self.alias)
            .field("save_info", &self.save_info)
            .finish()
    }
}

/// A value forwarded from an input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput<'a> {
    /// Raw text as typed.
    Text(&'a str),
    /// Checkbox state.
    Checked(bool),
}

/// Outcome of the last submit-time validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationError),
}

/// Lifecycle of the form's submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A submission is outstanding. Further submits are ignored.
    InFlight,
    Succeeded,
    /// Carries the localized failure notice.
    Failed(String),
}

impl SubmissionState {
    /// True while a submission is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }
}

/// State of one rendered form instance.
#[derive(Debug)]
pub struct FormState {
    schema: FieldSchema,
    locale: Locale,
    fields: FormFields,
    network: CardNetwork,
    validation: Option<ValidationResult>,
    submission: SubmissionState,
    notice: Option<Notice>,
}

impl FormState {
    /// Creates an empty form for the given schema and locale.
    pub fn new(schema: FieldSchema, locale: Locale) -> Self {
        Self {
            schema,
            locale,
            fields: FormFields::default(),
            network: CardNetwork::Unknown,
            validation: None,
            submission: SubmissionState::Idle,
            notice: None,
        }
    }

    /// Applies one field change.
    ///
    /// Card, expiry and CVC values are re-masked. Changing the card also
    /// recomputes the network and clears any validation result so that an
    /// error never sticks to new input. Other text fields are stored as
    /// typed.
    pub fn on_field_change(&mut self, field: FieldName, input: FieldInput<'_>) -> Result<(), FormError> {
        if !self.schema.contains(field) {
            return Err(FormError::FieldNotInSchema(field));
        }

        match (field, input) {
            (FieldName::SaveInfo, FieldInput::Checked(checked)) => {
                self.fields.save_info = checked;
            }
            (FieldName::SaveInfo, FieldInput::Text(_)) => {
                return Err(FormError::KindMismatch {
                    field,
                    expects_checkbox: true,
                });
            }
            (_, FieldInput::Checked(_)) => {
                return Err(FormError::KindMismatch {
                    field,
                    expects_checkbox: false,
                });
            }
            (FieldName::Card, FieldInput::Text(raw)) => {
                self.fields.card = format_card_number(raw);
                self.network = detect_network(&self.fields.card);
                self.validation = None;
                if matches!(self.notice, Some(n) if n.kind == NoticeKind::InvalidCard) {
                    self.notice = None;
                }
            }
            (FieldName::Expiry, FieldInput::Text(raw)) => {
                self.fields.expiry = format_expiry(raw);
            }
            (FieldName::Cvc, FieldInput::Text(raw)) => {
                self.fields.cvc = format_cvc(raw);
            }
            (_, FieldInput::Text(raw)) => {
                if let Some(slot) = self.fields.text_mut(field) {
                    slot.zeroize();
                    slot.push_str(raw);
                }
            }
        }

        tracing::trace!(field = field.key(), "field updated");
        Ok(())
    }

    /// Convenience wrapper taking the raw event shape: input name, value
    /// and whether the control is a checkbox.
    pub fn on_input_event(&mut self, name: &str, value: &str, checked: Option<bool>) -> Result<(), FormError> {
        let field = FieldName::from_key(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        match checked {
            Some(checked) => self.on_field_change(field, FieldInput::Checked(checked)),
            None => self.on_field_change(field, FieldInput::Text(value)),
        }
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Active string table.
    pub fn strings(&self) -> &'static StringTable {
        self.locale.strings()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Network detected from the current card value.
    pub fn network(&self) -> CardNetwork {
        self.network
    }

    pub fn validation(&self) -> Option<ValidationResult> {
        self.validation
    }

    /// Inline error to show under the card field, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        match self.validation {
            Some(ValidationResult::Invalid(ValidationError::Checksum)) => Some(self.strings().invalid_card),
            _ => None,
        }
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.submission.is_in_flight()
    }

    /// Label for the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.submission.is_in_flight() {
            self.strings().processing
        } else {
            self.strings().submit
        }
    }

    /// Notice from the last submit attempt.
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub(crate) fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    pub(crate) fn set_validation(&mut self, result: ValidationResult) {
        self.validation = Some(result);
    }

    pub(crate) fn set_submission(&mut self, state: SubmissionState) {
        self.submission = state;
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FieldSchema::default(), Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(form: &mut FormState, field: FieldName, raw: &str) {
        form.on_field_change(field, FieldInput::Text(raw)).unwrap();
    }

    #[test]
    fn test_card_is_formatted_and_detected() {
        let mut form = FormState::default();
        text(&mut form, FieldName::Card, "4242424242424242");
        assert_eq!(form.fields().card, "4242 4242 4242 4242");
        assert_eq!(form.network(), CardNetwork::Visa);

        text(&mut form, FieldName::Card, "3782");
        assert_eq!(form.network(), CardNetwork::Amex);
    }

    #[test]
    fn test_card_change_clears_validation() {
        let mut form = FormState::default();
        form.set_validation(ValidationResult::Invalid(ValidationError::Checksum));
        assert!(form.error_message().is_some());

        text(&mut form, FieldName::Card, "4242");
        assert_eq!(form.validation(), None);
        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn test_other_fields_keep_validation() {
        let mut form = FormState::default();
        form.set_validation(ValidationResult::Invalid(ValidationError::Checksum));
        text(&mut form, FieldName::Name, "Mei Lin");
        assert!(form.error_message().is_some());
    }

    #[test]
    fn test_expiry_and_cvc_masking() {
        let mut form = FormState::default();
        text(&mut form, FieldName::Expiry, "1230");
        text(&mut form, FieldName::Cvc, "12345");
        assert_eq!(form.fields().expiry, "12 / 30");
        assert_eq!(form.fields().cvc, "1234");
    }

    #[test]
    fn test_plain_fields_stored_as_typed() {
        let mut form = FormState::new(FieldSchema::checkout(), Locale::En);
        text(&mut form, FieldName::Email, " a@b.example ");
        text(&mut form, FieldName::Country, "TW");
        assert_eq!(form.fields().email, " a@b.example ");
        assert_eq!(form.fields().country, "TW");
    }

    #[test]
    fn test_checkbox_stores_bool() {
        let mut form = FormState::default();
        form.on_field_change(FieldName::SaveInfo, FieldInput::Checked(true)).unwrap();
        assert!(form.fields().save_info);

        let err = form
            .on_field_change(FieldName::SaveInfo, FieldInput::Text("on"))
            .unwrap_err();
        assert!(matches!(err, FormError::KindMismatch { expects_checkbox: true, .. }));
    }

    #[test]
    fn test_schema_rejects_disabled_field() {
        let mut form = FormState::new(FieldSchema::add_card(), Locale::Zh);
        let err = form
            .on_field_change(FieldName::Email, FieldInput::Text("a@b.example"))
            .unwrap_err();
        assert_eq!(err, FormError::FieldNotInSchema(FieldName::Email));
        assert_eq!(form.fields().email, "");
    }

    #[test]
    fn test_schema_always_has_card() {
        let schema = FieldSchema::new([FieldName::Name, FieldName::Name]);
        assert_eq!(schema.fields(), &[FieldName::Card, FieldName::Name]);
    }

    #[test]
    fn test_input_event_shape() {
        let mut form = FormState::default();
        form.on_input_event("card", "5555555555554444", None).unwrap();
        form.on_input_event("saveInfo", "", Some(true)).unwrap();
        assert_eq!(form.network(), CardNetwork::Mastercard);
        assert!(form.fields().save_info);

        let err = form.on_input_event("iban", "x", None).unwrap_err();
        assert_eq!(err, FormError::UnknownField("iban".to_string()));
    }

    #[test]
    fn test_submit_label_follows_state() {
        let mut form = FormState::default();
        assert_eq!(form.submit_label(), "新增");
        form.set_submission(SubmissionState::InFlight);
        assert!(!form.can_submit());
        assert_eq!(form.submit_label(), "處理中...");
    }

    #[test]
    fn test_debug_hides_card_and_cvc() {
        let mut form = FormState::default();
        text(&mut form, FieldName::Card, "4242424242424242");
        text(&mut form, FieldName::Cvc, "987");
        let debug = format!("{:?}", form.fields());
        assert!(!debug.contains("4242 4242 4242 4242"));
        assert!(!debug.contains("987"));
        assert!(debug.contains("4242"));
    }
}
