//! The daily entry record.
//!
//! A [`Record`] holds one string value per schema field, always the full
//! set, always in canonical order. Values are not validated: anything typed
//! into a field, including nothing, is kept verbatim.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::clock::TimestampDefaults;
use crate::schema::Field;

/// One daily log entry over the canonical schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
}

impl Default for Record {
    fn default() -> Self {
        Self::blank()
    }
}

impl Record {
    /// A record with every field empty.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            values: vec![String::new(); Field::COUNT],
        }
    }

    /// A blank record with the timestamp fields filled in.
    #[must_use]
    pub fn seeded(defaults: &TimestampDefaults) -> Self {
        let mut record = Self::blank();
        record.apply_timestamps(defaults);
        record
    }

    /// Get the value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Set the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Overwrite the date, weekday and time fields.
    pub fn apply_timestamps(&mut self, defaults: &TimestampDefaults) {
        self.set(Field::Date, defaults.date.clone());
        self.set(Field::DayOfWeek, defaults.day_of_week.clone());
        self.set(Field::TimeOfEntry, defaults.time_of_entry.clone());
    }

    /// Iterate `(field, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Values in canonical order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Whether every non-timestamp field is empty.
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.iter()
            .all(|(field, value)| field.is_timestamp() || value.is_empty())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}
