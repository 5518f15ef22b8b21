//! Line-oriented front end for a tracking session.
//!
//! Each input line is one user action (edit a field, submit, export, ...).
//! Actions run to completion before the next line is read.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::form::parse_checkbox;
use crate::schema::{Field, InputKind, Section};
use crate::session::Session;
use crate::table;

const HELP: &str = "\
Commands:
  set <field> <value>    fill in a field (value kept as typed; in notes
                         and other multi-line fields \\n is a line break)
  check <field> on|off   tick or untick a yes/no box
  unset <field>          empty a field
  show [all]             show the entry being filled in
  submit                 add the entry and start a new one
  clear                  discard the entry being filled in
  list                   show recorded entries
  export [DIR]           save recorded entries as CSV
  csv                    print recorded entries as CSV
  fields [SECTION]       list field names
  help                   show this help
  quit                   end the session (entries are discarded)";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Fill in a field.
    Set {
        /// Target field.
        field: Field,
        /// New value, verbatim.
        value: String,
    },
    /// Checkbox-style yes/no edit.
    Check {
        /// Target field.
        field: Field,
        /// Ticked or not.
        checked: bool,
    },
    /// Empty a field.
    Unset(Field),
    /// Show the draft; `true` includes hidden follow-up fields.
    Show(bool),
    /// Record the draft.
    Submit,
    /// Discard the draft.
    Clear,
    /// Show recorded entries.
    List,
    /// Save the CSV export, optionally into a given directory.
    Export(Option<PathBuf>),
    /// Print the CSV export.
    Csv,
    /// List field names, optionally for one section.
    Fields(Option<Section>),
    /// Show help.
    Help,
    /// End the session.
    Quit,
}

/// Split off the first whitespace-delimited word.
///
/// Exactly one separator character is consumed, so the remainder keeps any
/// further leading whitespace.
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (input, ""),
    }
}

/// Decode `\n` (line break) and `\\` (backslash) in a multi-line value.
///
/// Any other backslash is kept as typed.
fn unescape_multiline(value: &str) -> String {
    let mut decoded = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some('n') => {
                    chars.next();
                    decoded.push('\n');
                    continue;
                }
                Some('\\') => {
                    chars.next();
                }
                _ => {}
            }
        }
        decoded.push(ch);
    }
    decoded
}

impl FromStr for ShellCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (verb, rest) = next_word(line);
        let command = match verb.to_ascii_lowercase().as_str() {
            "set" => {
                let (name, value) = next_word(rest);
                if name.is_empty() {
                    return Err(Error::Usage {
                        usage: "set <field> <value>",
                    });
                }
                let field: Field = name.parse()?;
                let value = if field.kind() == InputKind::TextArea {
                    unescape_multiline(value)
                } else {
                    value.to_string()
                };
                Self::Set { field, value }
            }
            "check" => {
                let (name, state) = next_word(rest);
                let state = state.trim();
                if name.is_empty() || state.is_empty() {
                    return Err(Error::Usage {
                        usage: "check <field> on|off",
                    });
                }
                Self::Check {
                    field: name.parse()?,
                    checked: parse_checkbox(state)?,
                }
            }
            "unset" => {
                let name = rest.trim();
                if name.is_empty() {
                    return Err(Error::Usage {
                        usage: "unset <field>",
                    });
                }
                Self::Unset(name.parse()?)
            }
            "show" => match rest.trim() {
                "" => Self::Show(false),
                "all" => Self::Show(true),
                _ => return Err(Error::Usage { usage: "show [all]" }),
            },
            "submit" | "add" => Self::Submit,
            "clear" => Self::Clear,
            "list" => Self::List,
            "export" => {
                let dir = rest.trim();
                Self::Export((!dir.is_empty()).then(|| PathBuf::from(dir)))
            }
            "csv" => Self::Csv,
            "fields" => {
                let section = rest.trim();
                Self::Fields(if section.is_empty() {
                    None
                } else {
                    Some(section.parse()?)
                })
            }
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(Error::unknown_command(line.trim())),
        };
        Ok(command)
    }
}

/// Drives a [`Session`] from lines of input.
#[derive(Debug)]
pub struct Shell<'a> {
    session: &'a mut Session,
    prompt: String,
    show_hidden: bool,
}

impl<'a> Shell<'a> {
    /// Wrap a session.
    #[must_use]
    pub fn new(session: &'a mut Session, prompt: impl Into<String>, show_hidden: bool) -> Self {
        Self {
            session,
            prompt: prompt.into(),
            show_hidden,
        }
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Mistyped commands are reported on `output` and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<ShellCommand>() {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.execute(command, &mut output)?,
                Err(e) if e.is_input_error() => writeln!(output, "error: {e}")?,
                Err(e) => return Err(e),
            }
        }
        debug!(
            entries = self.session.store().len(),
            "Session ended, entries discarded"
        );
        Ok(())
    }

    /// Perform one command.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(&mut self, command: ShellCommand, output: &mut W) -> Result<()> {
        match command {
            ShellCommand::Set { field, value } => {
                self.session.form_mut().set(field, value);
            }
            ShellCommand::Check { field, checked } => {
                self.session.form_mut().set_checkbox(field, checked);
            }
            ShellCommand::Unset(field) => self.session.form_mut().unset(field),
            ShellCommand::Show(all) => self.show_draft(all || self.show_hidden, output)?,
            ShellCommand::Submit => {
                self.session.submit();
                if let Some(message) = self.session.active_notice() {
                    writeln!(output, "{message}")?;
                }
            }
            ShellCommand::Clear => {
                self.session.clear();
                writeln!(output, "Form cleared.")?;
            }
            ShellCommand::List => {
                let store = self.session.store();
                if store.is_empty() {
                    writeln!(output, "No entries recorded yet.")?;
                } else {
                    writeln!(output, "Recorded Entries ({})", store.len())?;
                    writeln!(output, "{}", table::render(store.all()))?;
                }
            }
            ShellCommand::Export(dir) => match self.session.deliver(dir.as_deref()) {
                Some(path) => writeln!(output, "Saved {}", path.display())?,
                None => writeln!(output, "Export not saved.")?,
            },
            ShellCommand::Csv => {
                let download = self.session.export();
                if !download.is_empty() {
                    writeln!(output, "{}", download.contents)?;
                }
            }
            ShellCommand::Fields(section) => write_fields(section, output)?,
            ShellCommand::Help => writeln!(output, "{HELP}")?,
            ShellCommand::Quit => {}
        }
        Ok(())
    }

    fn show_draft<W: Write>(&self, include_hidden: bool, output: &mut W) -> Result<()> {
        let form = self.session.form();
        for section in Section::ALL {
            writeln!(output, "== {section} ==")?;
            for field in section.fields() {
                if !include_hidden && !form.is_visible(field) {
                    continue;
                }
                writeln!(
                    output,
                    "  {:<34} {}",
                    field.key(),
                    form.draft().get(field)
                )?;
            }
        }
        Ok(())
    }
}

/// Write the field listing used by `fields` in the shell and on the CLI.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn write_fields<W: Write>(section: Option<Section>, output: &mut W) -> Result<()> {
    let sections: Vec<Section> = section.map_or_else(|| Section::ALL.to_vec(), |s| vec![s]);
    for section in sections {
        writeln!(output, "== {section} ==")?;
        for field in section.fields() {
            let kind = field.kind();
            let options = kind
                .choices()
                .map(|c| format!(" [{}]", c.values().join("/")))
                .unwrap_or_default();
            writeln!(
                output,
                "  {:<34} {:<8} {}{}",
                field.key(),
                kind.name(),
                field.label(),
                options
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::Config;
    use chrono::NaiveDate;

    fn session() -> Session {
        let now = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        Session::new(Box::new(FixedClock(now)), &Config::default())
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        Shell::new(session, "> ", false)
            .run(script.as_bytes(), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_set_keeps_spaces_in_value() {
        let cmd: ShellCommand = "set locationNewBreakouts Forehead, Chin".parse().unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Set {
                field: Field::LocationNewBreakouts,
                value: "Forehead, Chin".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_set_keeps_surrounding_whitespace() {
        let cmd: ShellCommand = "set dailyNotes  indented note  \n".parse().unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Set {
                field: Field::DailyNotes,
                value: " indented note  ".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_set_strips_crlf_only() {
        let cmd: ShellCommand = "set snacks chips \r\n".parse().unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Set {
                field: Field::Snacks,
                value: "chips ".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_set_multiline_escape() {
        let cmd: ShellCommand = r"set dailyNotes line one\nline two \\n".parse().unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Set {
                field: Field::DailyNotes,
                value: "line one\nline two \\n".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_set_single_line_field_keeps_backslashes() {
        let cmd: ShellCommand = r"set snacks a\nb".parse().unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Set {
                field: Field::Snacks,
                value: r"a\nb".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_set_empty_value() {
        let cmd: ShellCommand = "set snacks".parse().unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Set {
                field: Field::Snacks,
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_check() {
        let cmd: ShellCommand = "check towelsChanged on".parse().unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Check {
                field: Field::TowelsChanged,
                checked: true,
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "set".parse::<ShellCommand>(),
            Err(Error::Usage { .. })
        ));
        assert!(matches!(
            "set nope 1".parse::<ShellCommand>(),
            Err(Error::UnknownField { .. })
        ));
        assert!(matches!(
            "dance".parse::<ShellCommand>(),
            Err(Error::UnknownCommand { .. })
        ));
        assert!(matches!(
            "check towelsChanged sometimes".parse::<ShellCommand>(),
            Err(Error::CheckboxState { .. })
        ));
    }

    #[test]
    fn test_parse_export_dir() {
        assert_eq!(
            "export".parse::<ShellCommand>().unwrap(),
            ShellCommand::Export(None)
        );
        assert_eq!(
            "export /tmp/out".parse::<ShellCommand>().unwrap(),
            ShellCommand::Export(Some(PathBuf::from("/tmp/out")))
        );
    }

    #[test]
    fn test_parse_fields_section() {
        assert_eq!(
            "fields diet".parse::<ShellCommand>().unwrap(),
            ShellCommand::Fields(Some(Section::Diet))
        );
    }

    #[test]
    fn test_session_submit_and_csv() {
        let mut session = session();
        let out = run(
            &mut session,
            "set painLevel 2\nset dailyNotes He said \"hi\"\nsubmit\ncsv\n",
        );

        assert!(out.contains("Entry added"));
        assert!(out.contains(r#","He said ""hi""""#));
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.store().all()[0].get(Field::PainLevel), "2");
    }

    #[test]
    fn test_multiline_note_is_one_csv_cell() {
        let mut session = session();
        run(&mut session, "set dailyNotes calm\\nno new spots\nsubmit\n");

        assert_eq!(
            session.store().all()[0].get(Field::DailyNotes),
            "calm\nno new spots"
        );
        assert_eq!(session.export().row_count(), 2);
    }

    #[test]
    fn test_mistakes_do_not_end_session() {
        let mut session = session();
        let out = run(&mut session, "sett x\nset painLvl 3\nsubmit\n");

        assert!(out.contains("unknown command"));
        assert!(out.contains("unknown field 'painLvl'"));
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = session();
        run(&mut session, "submit\nquit\nsubmit\n");
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_list_empty_and_filled() {
        let mut session = session();
        let out = run(&mut session, "list\nsubmit\nlist\n");
        assert!(out.contains("No entries recorded yet."));
        assert!(out.contains("Recorded Entries (1)"));
        assert!(out.contains("Day Of Week"));
    }

    #[test]
    fn test_show_hides_follow_ups_until_yes() {
        let mut session = session();
        let before = run(&mut session, "show\n");
        assert!(!before.contains("makeupHours"));

        let after = run(&mut session, "check makeupWorn on\nshow\n");
        assert!(after.contains("makeupHours"));
    }

    #[test]
    fn test_show_all_includes_hidden() {
        let mut session = session();
        let out = run(&mut session, "show all\n");
        assert!(out.contains("sunDurationSpf"));
    }

    #[test]
    fn test_clear_resets_draft() {
        let mut session = session();
        run(&mut session, "set snacks almonds\nclear\n");
        assert!(session.form().draft().is_untouched());
    }

    #[test]
    fn test_export_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session();
        let out = run(
            &mut session,
            &format!("submit\nexport {}\n", dir.path().display()),
        );
        assert!(out.contains("Saved"));
        assert!(dir.path().join("acne_tracking_data.csv").exists());
    }

    #[test]
    fn test_csv_on_empty_session_prints_nothing() {
        let mut session = session();
        let out = run(&mut session, "csv\n");
        assert_eq!(out, "> > \n");
    }

    #[test]
    fn test_write_fields_section() {
        let mut out = Vec::new();
        write_fields(Some(Section::Wellbeing), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("overallMood"));
        assert!(text.contains("[1/2/3/4/5]"));
        assert!(!text.contains("dailyNotes"));
    }
}
