use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::output::{ConsoleOutput, Message, QuizOutput};
use crate::quiz::definition::QuizDefinition;
use crate::quiz::input::ConsoleInput;
use crate::quiz::shuffle::shuffle;
use crate::quiz::{Quiz, Settings};

mod args;
mod output;
mod quiz;

fn init_logging() {
    // stdout belongs to the quiz, logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse_from_env();

    let mut definition =
        QuizDefinition::open(&args.file).context("Error while reading the problem file")?;
    if args.shuffle {
        info!("Shuffling {} records", definition.get_records().len());
        shuffle(definition.records_mut(), &mut rand::thread_rng());
    }
    let problems = definition.build_problems();

    let mut output = ConsoleOutput::default();
    output.say(&Message::Loaded(problems.len()));

    let settings = Settings {
        time_limit: Duration::from_secs(args.limit),
        ..Default::default()
    };
    let report = Quiz::new(problems, settings, ConsoleInput::default(), output).run();
    info!(
        "Quiz ended ({:?}) after {} problems: {}",
        report.outcome, report.presented, report.tally
    );

    Ok(())
}
