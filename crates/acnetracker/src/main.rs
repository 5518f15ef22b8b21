//! `acnetrack` - CLI for acnetracker
//!
//! The landing page, an interactive tracking session, one-shot recording,
//! and configuration helpers.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};

use clap::Parser;

use acnetracker::cli::{Cli, Command, ConfigCommand, FieldsCommand, RecordCommand, TrackCommand};
use acnetracker::schema::fields_json;
use acnetracker::shell::{write_fields, Shell};
use acnetracker::{init_logging, Config, Field, Section, Session, SystemClock};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone())?;

    match cli.command.unwrap_or(Command::Welcome) {
        Command::Welcome => {
            handle_welcome();
            Ok(())
        }
        Command::Track(track_cmd) => handle_track(config, &track_cmd),
        Command::Record(record_cmd) => handle_record(config, record_cmd),
        Command::Fields(fields_cmd) => handle_fields(&fields_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_welcome() {
    println!("Acne Tracker");
    println!("============");
    println!();
    println!("Track Your Skin. See Real Progress.");
    println!("A smart acne diary to help you visualize your journey to clearer skin.");
    println!();
    println!("Get started:  acnetrack track");
    println!();
    println!("This is not a medical tool.");
}

fn handle_track(mut config: Config, cmd: &TrackCommand) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = &cmd.out {
        config.export.directory = Some(dir.clone());
    }
    let show_hidden = cmd.show_hidden || config.session.show_hidden_fields;

    let mut session = Session::new(Box::new(SystemClock), &config);
    println!("Daily Acne & Lifestyle Tracker");
    println!("Type 'help' for commands, 'quit' to finish. Entries are not kept after you quit.");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut session, config.session.prompt.clone(), show_hidden)
        .run(stdin.lock(), stdout.lock())?;
    Ok(())
}

fn handle_record(mut config: Config, cmd: RecordCommand) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = cmd.out {
        config.export.directory = Some(dir);
    }

    let mut session = Session::new(Box::new(SystemClock), &config);
    for (field, value) in cmd.set {
        session.form_mut().set(field, value);
    }
    session.submit();

    if cmd.stdout {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", session.export().contents)?;
    } else {
        match session.deliver(None) {
            Some(path) => println!("Saved {}", path.display()),
            None => println!("Export not saved."),
        }
    }
    Ok(())
}

fn handle_fields(cmd: &FieldsCommand) -> Result<(), Box<dyn std::error::Error>> {
    if cmd.json {
        println!("{}", fields_json(cmd.section)?);
    } else {
        write_fields(cmd.section, &mut io::stdout().lock())?;
        if cmd.section.is_none() {
            println!();
            println!(
                "{} fields in {} sections.",
                Field::COUNT,
                Section::ALL.len()
            );
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", config.to_json()?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Export]");
                println!("  Directory:          {}", config.export_dir().display());
                println!("  File name:          {}", config.export.file_name);
                println!();
                println!("[Session]");
                println!("  Notice (seconds):   {}", config.session.notice_seconds);
                println!(
                    "  Show hidden fields: {}",
                    config.session.show_hidden_fields
                );
                println!("  Prompt:             {:?}", config.session.prompt);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
