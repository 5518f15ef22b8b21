//! One tracking session: a form, the entries recorded so far, and the clock
//! that seeds each fresh entry.
//!
//! A session is created when tracking starts and dropped when it ends; its
//! entries go with it. Every operation runs to completion before the next
//! one begins, so an export always sees a settled store.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::clock::{Clock, TimestampDefaults};
use crate::config::Config;
use crate::export::Download;
use crate::form::EntryForm;
use crate::notice::{Notice, ENTRY_ADDED};
use crate::record::Record;
use crate::store::EntryStore;

/// State for a single tracking session.
#[derive(Debug)]
pub struct Session {
    clock: Box<dyn Clock>,
    form: EntryForm,
    store: EntryStore,
    notice: Option<Notice>,
    notice_seconds: u64,
    export_dir: PathBuf,
    export_file_name: String,
}

impl Session {
    /// Start a session with the given clock and configuration.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, config: &Config) -> Self {
        let form = EntryForm::new(&TimestampDefaults::now(clock.as_ref()));
        Self {
            clock,
            form,
            store: EntryStore::new(),
            notice: None,
            notice_seconds: config.session.notice_seconds,
            export_dir: config.export_dir(),
            export_file_name: config.export.file_name.clone(),
        }
    }

    /// The form being filled in.
    #[must_use]
    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    /// Mutable access to the form for edits.
    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    /// Entries recorded in this session.
    #[must_use]
    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Default directory exports are saved into.
    #[must_use]
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Record the current draft and start a fresh one.
    ///
    /// Returns the recorded entry.
    pub fn submit(&mut self) -> &Record {
        let now = self.clock.now();
        let record = self.form.take(&TimestampDefaults::at(now));
        self.store.append(record);
        self.notice = Some(Notice::new(ENTRY_ADDED, now, self.notice_seconds));
        info!(entries = self.store.len(), "Entry added");
        &self.store.all()[self.store.len() - 1]
    }

    /// Discard the draft and reseed the timestamps.
    pub fn clear(&mut self) {
        let defaults = TimestampDefaults::now(self.clock.as_ref());
        self.form.reset(&defaults);
    }

    /// The confirmation message, while it is still up.
    #[must_use]
    pub fn active_notice(&self) -> Option<&'static str> {
        let now = self.clock.now();
        self.notice
            .as_ref()
            .filter(|notice| notice.is_visible(now))
            .map(Notice::message)
    }

    /// Build the CSV export of every entry recorded so far.
    #[must_use]
    pub fn export(&self) -> Download {
        Download::named(self.export_file_name.clone(), self.store.all())
    }

    /// Export and save into `dir`, or the configured export directory.
    ///
    /// Saving is best-effort: a failure is logged and `None` is returned.
    pub fn deliver(&self, dir: Option<&Path>) -> Option<PathBuf> {
        let dir = dir.unwrap_or(self.export_dir.as_path());
        match self.export().save_to(dir) {
            Ok(path) => {
                info!(entries = self.store.len(), "Exported to {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!(error = %e, "Export was not saved");
                None
            }
        }
    }
}
