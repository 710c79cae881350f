use crate::quiz::tally::Tally;

pub mod console;
#[cfg(test)]
pub mod mock;

pub use self::console::ConsoleOutput;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Loaded(usize),
    Warmup(u32),
    Problem { number: usize, question: String },
    TimeUp,
    Completed,
    Score(Tally),
}

pub trait QuizOutput {
    fn say(&mut self, message: &Message);
}
