//! Form state controller for the soil/climate data-entry view.
//!
//! Holds the raw value of every field (which may be invalid while the user is
//! editing) together with the current per-field errors. Every `set` validates
//! the touched field immediately; `submit` validates the whole record.

use crate::error::ValidationError;
use crate::field::FieldId;
use crate::input::SoilClimateInput;
use crate::soil::SoilType;
use crate::validation::{coerce_number, validate_field, validate_record, FieldErrors, RawRecord};

/// Handle returned by [`FormController::subscribe`].
pub type SubscriptionId = u64;

type Listener = Box<dyn FnMut(FieldId, &str)>;

/// Starting values shown when the form first opens.
pub const DEFAULT_VALUES: [(FieldId, &str); 9] = [
    (FieldId::Nitrogen, "40"),
    (FieldId::Phosphorus, "30"),
    (FieldId::Potassium, "35"),
    (FieldId::Temperature, "25"),
    (FieldId::Humidity, "60"),
    (FieldId::Ph, "6.5"),
    (FieldId::Rainfall, "100"),
    (FieldId::Location, ""),
    (FieldId::SoilType, ""),
];

pub struct FormController {
    values: RawRecord,
    errors: FieldErrors,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            values: DEFAULT_VALUES
                .iter()
                .map(|(field, raw)| (*field, raw.to_string()))
                .collect(),
            errors: FieldErrors::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Pre-fill every field from an earlier record.
    pub fn from_record(record: &SoilClimateInput) -> Self {
        let mut form = Self::new();
        for field in FieldId::ALL {
            form.values.insert(field, record.raw(field));
        }
        form
    }

    /// Current raw value of `field`.
    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Current value of a numeric field, if it coerces.
    pub fn number(&self, field: FieldId) -> Option<f64> {
        coerce_number(field, self.value(field)).ok()
    }

    pub fn soil_type(&self) -> Option<SoilType> {
        self.value(FieldId::SoilType).parse().ok()
    }

    /// Store a raw value, validate it and notify subscribers.
    pub fn set(&mut self, field: FieldId, raw: impl Into<String>) {
        let raw = raw.into();
        match validate_field(field, &raw) {
            Ok(_) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err);
            }
        }
        self.values.insert(field, raw);

        let current = self.values.get(&field).map(String::as_str).unwrap_or("");
        for (_, listener) in self.listeners.iter_mut() {
            listener(field, current);
        }
    }

    /// Slider convenience for [`set`](Self::set).
    pub fn set_number(&mut self, field: FieldId, value: f64) {
        self.set(field, value.to_string());
    }

    pub fn error(&self, field: FieldId) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Register a callback invoked with `(field, raw_value)` after every `set`.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(FieldId, &str) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Validate every field, replacing the error set with the outcome.
    pub fn validate_all(&mut self) -> Result<SoilClimateInput, FieldErrors> {
        match validate_record(&self.values) {
            Ok(record) => {
                self.errors.clear();
                Ok(record)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Validate the whole record and hand it to `on_complete` if it passes.
    ///
    /// On failure the field errors are stored (and returned) and
    /// `on_complete` is not called.
    pub fn submit<F>(&mut self, on_complete: F) -> Result<(), FieldErrors>
    where
        F: FnOnce(SoilClimateInput),
    {
        let record = self.validate_all()?;
        log::debug!("form submitted for {}", record.location);
        on_complete(record);
        Ok(())
    }

    /// Restore defaults and clear errors. Subscriptions are kept.
    pub fn reset(&mut self) {
        for (field, raw) in DEFAULT_VALUES {
            self.values.insert(field, raw.to_string());
        }
        self.errors.clear();
    }
}
