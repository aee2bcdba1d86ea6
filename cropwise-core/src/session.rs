//! Single-slot session transfer store.
//!
//! The input view saves the validated record under a fixed key; the
//! recommendations view loads it once. There is no history, versioning or
//! expiry, and the slot disappears with the browser session.
//!
//! # Example
//!
//! ```rust
//! use cropwise_core::session::{MemoryStore, SessionTransfer};
//!
//! let transfer = SessionTransfer::new(MemoryStore::default());
//! assert!(transfer.load().unwrap().is_none());
//! ```

use crate::config::STORAGE_KEY;
use crate::error::StoreError;
use crate::input::SoilClimateInput;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key/value storage with sessionStorage semantics.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process store used by tests and the CLI.
///
/// Cheaply cloneable; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Typed access to the `cropInputData` slot of a [`SessionStore`].
#[derive(Debug, Clone)]
pub struct SessionTransfer<S> {
    store: S,
}

impl<S: SessionStore> SessionTransfer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Serialize `record` into the slot, replacing any previous value.
    pub fn save(&self, record: &SoilClimateInput) -> Result<(), StoreError> {
        let json = serde_json::to_string(record).map_err(StoreError::Encode)?;
        self.store.set_item(STORAGE_KEY, &json)?;
        log::info!("saved input record for {} ({} bytes)", record.location, json.len());
        Ok(())
    }

    /// Read the slot. `Ok(None)` means nothing has been saved.
    ///
    /// A value that does not decode, or decodes with an out-of-range field,
    /// yields [`StoreError::Corrupt`].
    pub fn load(&self) -> Result<Option<SoilClimateInput>, StoreError> {
        let Some(json) = self.store.get_item(STORAGE_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: STORAGE_KEY.to_string(),
                source,
            })
    }

    /// `true` if a decodable record is present.
    pub fn has_record(&self) -> bool {
        matches!(self.load(), Ok(Some(_)))
    }

    /// Empty the slot.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove_item(STORAGE_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{
        Humidity, Nitrogen, Ph, Phosphorus, Potassium, Rainfall, Temperature, HUMIDITY_MAX,
        NUTRIENT_MAX, PH_MAX, RAINFALL_MAX, TEMPERATURE_MAX, TEMPERATURE_MIN,
    };
    use crate::input::fixtures::sample_input;

    /// xorshift64 mapped onto `[min, max]`; full-precision, non-round values.
    fn next_in(state: &mut u64, min: f64, max: f64) -> f64 {
        *state ^= *state << 13;
        *state ^= *state >> 7;
        *state ^= *state << 17;
        let unit = (*state >> 11) as f64 / (1u64 << 53) as f64;
        min + unit * (max - min)
    }

    #[test]
    fn load_after_save_returns_the_same_record() {
        let transfer = SessionTransfer::new(MemoryStore::default());
        let record = sample_input();
        transfer.save(&record).unwrap();
        assert_eq!(transfer.load().unwrap(), Some(record.clone()));
        // Loading does not consume the slot.
        assert_eq!(transfer.load().unwrap(), Some(record));
    }

    #[test]
    fn arbitrary_in_range_readings_survive_save_and_load() {
        let transfer = SessionTransfer::new(MemoryStore::default());
        let mut seed = 0x9E37_79B9_7F4A_7C15_u64;
        for _ in 0..5_000 {
            let mut record = sample_input();
            record.nitrogen = Nitrogen::new(next_in(&mut seed, 0.0, NUTRIENT_MAX)).unwrap();
            record.phosphorus = Phosphorus::new(next_in(&mut seed, 0.0, NUTRIENT_MAX)).unwrap();
            record.potassium = Potassium::new(next_in(&mut seed, 0.0, NUTRIENT_MAX)).unwrap();
            record.temperature =
                Temperature::new(next_in(&mut seed, TEMPERATURE_MIN, TEMPERATURE_MAX)).unwrap();
            record.humidity = Humidity::new(next_in(&mut seed, 0.0, HUMIDITY_MAX)).unwrap();
            record.ph = Ph::new(next_in(&mut seed, 0.0, PH_MAX)).unwrap();
            record.rainfall = Rainfall::new(next_in(&mut seed, 0.0, RAINFALL_MAX)).unwrap();

            transfer.save(&record).unwrap();
            assert_eq!(transfer.load().unwrap().as_ref(), Some(&record));
        }
    }

    #[test]
    fn save_overwrites_the_single_slot() {
        let store = MemoryStore::default();
        let transfer = SessionTransfer::new(store.clone());
        let first = sample_input();
        let mut second = sample_input();
        second.nitrogen = Nitrogen::new(90.0).unwrap();

        transfer.save(&first).unwrap();
        transfer.save(&second).unwrap();

        assert_eq!(transfer.load().unwrap(), Some(second));
        assert_eq!(store.items.borrow().len(), 1);
    }

    #[test]
    fn absent_slot_loads_none() {
        let transfer = SessionTransfer::new(MemoryStore::default());
        assert!(transfer.load().unwrap().is_none());
        assert!(!transfer.has_record());
    }

    #[test]
    fn corrupt_slot_is_reported() {
        let store = MemoryStore::default();
        store.set_item(STORAGE_KEY, "{not json").unwrap();
        let transfer = SessionTransfer::new(store.clone());
        assert!(matches!(transfer.load(), Err(StoreError::Corrupt { .. })));

        let mut json = serde_json::to_value(sample_input()).unwrap();
        json["rainfall"] = serde_json::json!(999);
        store.set_item(STORAGE_KEY, &json.to_string()).unwrap();
        assert!(matches!(transfer.load(), Err(StoreError::Corrupt { .. })));
        assert!(!transfer.has_record());
    }

    #[test]
    fn clear_empties_the_slot() {
        let transfer = SessionTransfer::new(MemoryStore::default());
        transfer.save(&sample_input()).unwrap();
        transfer.clear().unwrap();
        assert!(transfer.load().unwrap().is_none());
    }
}
