//! `acnetracker` - a daily acne and lifestyle journal
//!
//! Entries are filled in on a form, appended to a session-scoped store, and
//! exported as CSV. Nothing is persisted between sessions except the CSV
//! files the user chooses to save.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod logging;
pub mod notice;
pub mod record;
pub mod schema;
pub mod session;
pub mod shell;
pub mod store;
pub mod table;

pub use clock::{Clock, FixedClock, SystemClock, TimestampDefaults};
pub use config::Config;
pub use error::{Error, Result};
pub use export::{to_csv, Download, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use form::EntryForm;
pub use logging::init_logging;
pub use record::Record;
pub use schema::{Field, Section};
pub use session::Session;
pub use store::EntryStore;
