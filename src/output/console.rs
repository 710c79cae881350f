use std::io::{self, Write};
use tracing::warn;

use crate::output::{Message, QuizOutput};

#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    fn write(&self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()
    }
}

pub fn render(message: &Message) -> String {
    match message {
        Message::Loaded(count) => format!("Successfully parsed {} problems\n", count),
        Message::Warmup(seconds) => format!("Starting the quiz in {}...\n", seconds),
        Message::Problem { number, question } => format!("Problem #{}: {} = ", number, question),
        Message::TimeUp => "\nTime's up!\n".to_owned(),
        Message::Completed => "You have completed the quiz.\n".to_owned(),
        Message::Score(tally) => format!("Your score: {}\n", tally),
    }
}

impl QuizOutput for ConsoleOutput {
    fn say(&mut self, message: &Message) {
        if let Err(e) = self.write(&render(message)) {
            warn!("Could not write to stdout: {}", e);
        }
    }
}
