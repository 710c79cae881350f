use parking_lot::Mutex;
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Blocking source of typed answers, one per call.
pub trait AnswerSource: Send + 'static {
    /// Returns `None` once input is exhausted.
    fn read_answer(&mut self) -> io::Result<Option<String>>;
}

#[derive(Debug, Default)]
pub struct ConsoleInput;

impl AnswerSource for ConsoleInput {
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match io::stdin().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

pub type AnswerSourceHandle<S> = Arc<Mutex<S>>;

/// Reads one answer on a detached thread. The result arrives on the returned
/// receiver, `None` when nothing could be read. Once the receiver is dropped a
/// late answer is thrown away.
pub fn spawn_read<S: AnswerSource>(source: &AnswerSourceHandle<S>) -> Receiver<Option<String>> {
    let (sender, receiver) = mpsc::sync_channel(1);
    let source = Arc::clone(source);
    thread::spawn(move || {
        let answer = match source.lock().read_answer() {
            Ok(Some(answer)) => Some(answer),
            Ok(None) => {
                debug!("Answer source reached end of input");
                None
            }
            Err(e) => {
                warn!("Could not read answer: {}", e);
                None
            }
        };
        if sender.send(answer).is_err() {
            debug!("Discarding answer that arrived after the session ended");
        }
    });
    receiver
}
