use parking_lot::Mutex;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::thread;
use tracing::{debug, info, warn};

use self::deadline::Deadline;
use self::definition::Problem;
use self::input::{spawn_read, AnswerSource, AnswerSourceHandle};
use self::tally::Tally;
use crate::output::{Message, QuizOutput};

pub use self::settings::Settings;

pub mod deadline;
pub mod definition;
pub mod input;
mod settings;
pub mod shuffle;
pub mod tally;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Warmup,
    Running,
    TimedOut,
    Exhausted,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    TimedOut,
    Exhausted,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionReport {
    pub outcome: Outcome,
    pub tally: Tally,
    pub presented: usize,
}

pub struct Quiz<O, S> {
    problems: Vec<Problem>,
    settings: Settings,
    current_phase: Phase,
    current_index: usize,
    presented: usize,
    tally: Tally,
    answers: AnswerSourceHandle<S>,
    output: O,
}

impl<O: QuizOutput, S: AnswerSource> Quiz<O, S> {
    pub fn new(problems: Vec<Problem>, settings: Settings, answers: S, output: O) -> Self {
        Quiz {
            problems,
            settings,
            current_phase: Phase::Warmup,
            current_index: 0,
            presented: 0,
            tally: Tally::default(),
            answers: Arc::new(Mutex::new(answers)),
            output,
        }
    }

    fn set_current_phase(&mut self, phase: Phase) {
        info!("Entering quiz phase: {:?}", phase);
        self.current_phase = phase;
    }

    pub fn run(mut self) -> SessionReport {
        self.set_current_phase(Phase::Warmup);
        self.warmup();

        self.set_current_phase(Phase::Running);
        let deadline = Deadline::after(self.settings.time_limit);
        let outcome = self.ask_until(deadline);

        match outcome {
            Outcome::TimedOut => {
                self.set_current_phase(Phase::TimedOut);
                self.output.say(&Message::TimeUp);
            }
            Outcome::Exhausted => {
                self.set_current_phase(Phase::Exhausted);
                self.output.say(&Message::Completed);
            }
        }
        self.output.say(&Message::Score(self.tally));

        SessionReport {
            outcome,
            tally: self.tally,
            presented: self.presented,
        }
    }

    fn warmup(&mut self) {
        for step in (1..=self.settings.warmup_steps).rev() {
            self.output.say(&Message::Warmup(step));
            thread::sleep(self.settings.warmup_step_duration);
        }
    }

    fn ask_until(&mut self, deadline: Deadline) -> Outcome {
        debug_assert_eq!(self.current_phase, Phase::Running);
        while self.current_index < self.problems.len() {
            if deadline.has_passed() {
                return Outcome::TimedOut;
            }

            let problem = &self.problems[self.current_index];
            self.output.say(&Message::Problem {
                number: self.current_index + 1,
                question: problem.question.clone(),
            });
            self.presented += 1;

            let receiver = spawn_read(&self.answers);
            let answer = match receiver.recv_timeout(deadline.remaining()) {
                Ok(answer) => answer,
                Err(RecvTimeoutError::Timeout) => {
                    debug!("Abandoning problem #{}", self.current_index + 1);
                    return Outcome::TimedOut;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    warn!("Answer reader stopped without answering");
                    None
                }
            };

            let is_correct = answer
                .as_deref()
                .map_or(false, |answer| problem.is_guess_correct(answer));
            debug!(
                "Problem #{} answered {:?}, correct: {}",
                self.current_index + 1,
                answer.as_deref().map(str::trim),
                is_correct
            );
            self.tally.record(is_correct);
            self.current_index += 1;
        }
        Outcome::Exhausted
    }
}
