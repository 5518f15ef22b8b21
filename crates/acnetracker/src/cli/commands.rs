//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::schema::{Field, Section};

/// Interactive session arguments.
#[derive(Debug, Args)]
pub struct TrackCommand {
    /// Directory exports are saved into (overrides configuration)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Always show follow-up fields, even when their question reads "No"
    #[arg(long)]
    pub show_hidden: bool,
}

/// One-shot entry arguments.
#[derive(Debug, Args)]
pub struct RecordCommand {
    /// Field value as key=value (repeatable); timestamps default to now
    #[arg(short, long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(Field, String)>,

    /// Directory the CSV file is saved into (overrides configuration)
    #[arg(short, long, value_name = "DIR", conflicts_with = "stdout")]
    pub out: Option<PathBuf>,

    /// Print the CSV instead of saving it
    #[arg(long)]
    pub stdout: bool,
}

/// Schema listing arguments.
#[derive(Debug, Args)]
pub struct FieldsCommand {
    /// Only list one section (general, acne, diet, skincare, lifestyle,
    /// medical, wellbeing, notes)
    #[arg(short, long, value_parser = parse_section)]
    pub section: Option<Section>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn parse_assignment(raw: &str) -> Result<(Field, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    let field = name.trim().parse::<Field>().map_err(|e| e.to_string())?;
    Ok((field, value.to_string()))
}

fn parse_section(raw: &str) -> Result<Section, String> {
    raw.parse().map_err(|e: crate::Error| e.to_string())
}
