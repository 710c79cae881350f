use tracing::warn;

use super::Record;

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Problem {
    pub question: String,
    /// `None` when the record carries no usable answer; such a problem can
    /// never be answered correctly.
    pub answer: Option<String>,
}

impl Problem {
    pub fn new<Q: Into<String>, A: Into<String>>(question: Q, answer: A) -> Self {
        let answer = answer.into();
        Problem {
            question: question.into(),
            answer: if answer.trim().is_empty() {
                None
            } else {
                Some(answer)
            },
        }
    }

    pub fn is_guess_correct(&self, guess: &str) -> bool {
        let guess = normalize(guess);
        match &self.answer {
            Some(answer) => !guess.is_empty() && guess == normalize(answer),
            None => false,
        }
    }
}

impl From<&Record> for Problem {
    fn from(record: &Record) -> Self {
        let question = record.field(0).unwrap_or_default();
        let problem = Problem::new(question, record.field(1).unwrap_or_default());
        if problem.answer.is_none() {
            warn!("Problem `{}` has no answer", question);
        }
        problem
    }
}
