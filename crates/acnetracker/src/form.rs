//! The entry form being filled in.
//!
//! The form owns a draft [`Record`]. Submitting hands the draft over by value
//! and starts a fresh one, so later edits can never reach an entry that has
//! already been recorded.

use tracing::debug;

use crate::clock::TimestampDefaults;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::schema::Field;

/// Value stored by a ticked checkbox.
pub const CHECKED: &str = "Yes";
/// Value stored by an unticked checkbox.
pub const UNCHECKED: &str = "No";

/// The in-progress entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    draft: Record,
}

impl EntryForm {
    /// A fresh form seeded with the given timestamps.
    #[must_use]
    pub fn new(defaults: &TimestampDefaults) -> Self {
        Self {
            draft: Record::seeded(defaults),
        }
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &Record {
        &self.draft
    }

    /// Set a field's value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!(field = field.key(), %value, "Form edit");
        self.draft.set(field, value);
    }

    /// Checkbox-style edit: stores `Yes` when ticked, `No` otherwise.
    pub fn set_checkbox(&mut self, field: Field, checked: bool) {
        self.set(field, if checked { CHECKED } else { UNCHECKED });
    }

    /// Empty a single field.
    pub fn unset(&mut self, field: Field) {
        self.set(field, String::new());
    }

    /// Discard all edits and reseed the timestamps.
    pub fn reset(&mut self, defaults: &TimestampDefaults) {
        self.draft = Record::seeded(defaults);
        debug!("Form reset");
    }

    /// Hand over the draft and start a fresh one seeded with `next`.
    #[must_use]
    pub fn take(&mut self, next: &TimestampDefaults) -> Record {
        std::mem::replace(&mut self.draft, Record::seeded(next))
    }

    /// Whether a field is currently shown.
    ///
    /// Follow-up fields appear only while their controlling yes/no field
    /// reads `Yes`. Hidden fields keep their value and are still recorded.
    #[must_use]
    pub fn is_visible(&self, field: Field) -> bool {
        field
            .visible_when()
            .map_or(true, |controller| self.draft.get(controller) == CHECKED)
    }
}

/// Parse a checkbox state word.
///
/// # Errors
///
/// Returns [`Error::CheckboxState`] for anything other than the accepted
/// on/off spellings.
pub fn parse_checkbox(state: &str) -> Result<bool> {
    match state.to_ascii_lowercase().as_str() {
        "on" | "yes" | "y" | "true" | "1" | "checked" => Ok(true),
        "off" | "no" | "n" | "false" | "0" | "unchecked" => Ok(false),
        _ => Err(Error::CheckboxState {
            state: state.to_string(),
        }),
    }
}
