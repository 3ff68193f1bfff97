use crate::{
    ops::smart_grid_generate::{self, GenerateOptions, GenerateSummary},
    utils::constants::{DEFAULT_INPUT_FILE_NAME, DEFAULT_OUTPUT_FILE_NAME},
};
use anyhow::Result;
use clap::{ArgAction, Parser};
use smart_grid_tracing::{println_action_green, println_action_yellow, TracingSubscriberOptions};
use std::path::PathBuf;

/// Generate the SmartGridMapping Solidity contract from a JSON list of users.
///
/// Run without arguments to read `users.json` and write `SmartGridMappingGenerated.sol`
/// in the current directory.
#[derive(Debug, Parser)]
#[clap(name = "smart-grid-gen", version)]
pub struct Command {
    /// Path to the JSON array of user records.
    #[clap(short, long, default_value = DEFAULT_INPUT_FILE_NAME)]
    pub input: PathBuf,
    /// Path of the generated contract. Overwritten if it exists.
    #[clap(short, long, default_value = DEFAULT_OUTPUT_FILE_NAME)]
    pub output: PathBuf,
    /// Run in 'check' mode.
    ///
    /// - Exits with `0` if the output is up to date.
    /// - Exits with `1` if it is missing or would change. Nothing is written.
    #[clap(long)]
    pub check: bool,
    /// Use verbose output (-vv for more).
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Silence all output except errors.
    #[clap(short, long)]
    pub silent: bool,
}

impl Command {
    pub fn tracing_options(&self) -> TracingSubscriberOptions {
        TracingSubscriberOptions {
            verbosity: Some(self.verbose),
            silent: Some(self.silent),
            ..Default::default()
        }
    }

    fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            check: self.check,
        }
    }
}

pub fn exec(command: Command) -> Result<()> {
    let summary = smart_grid_generate::generate(&command.generate_options())?;
    let details = format_details(&summary);
    if summary.up_to_date {
        println_action_yellow(
            "Checked",
            &format!("{} is up to date ({details})", summary.output.display()),
        );
    } else {
        println_action_green(
            "Generated",
            &format!("{} ({details})", summary.output.display()),
        );
    }
    Ok(())
}

fn format_details(summary: &GenerateSummary) -> String {
    let users = match summary.users {
        1 => "1 user".to_string(),
        n => format!("{n} users"),
    };
    format!("{users}, {} bytes", summary.bytes)
}
