//! Command-line interface for acnetracker.
//!
//! This module provides the CLI structure for the `acnetrack` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, FieldsCommand, RecordCommand, TrackCommand};

use crate::logging::Verbosity;

/// acnetrack - Track your skin. See real progress.
///
/// Log daily acne observations alongside diet, skincare and lifestyle
/// factors, then export the session's entries as CSV.
#[derive(Debug, Parser)]
#[command(name = "acnetrack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `welcome`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the landing page
    Welcome,

    /// Start an interactive tracking session
    Track(TrackCommand),

    /// Record a single entry and export it
    Record(RecordCommand),

    /// Describe the entry fields
    Fields(FieldsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}
