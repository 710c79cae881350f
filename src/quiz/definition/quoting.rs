use super::ParseError;

#[derive(Clone, Copy)]
enum State {
    FieldStart,
    Unquoted,
    Quoted { opened_on: u64 },
    ClosingQuote { opened_on: u64 },
}

/// Rejects quoting the csv reader would silently accept: a `"` inside an
/// unquoted field, text between a closing quote and the next delimiter, and a
/// quoted field that runs to the end of the input.
pub fn check_quoting(text: &str) -> Result<(), ParseError> {
    let mut line = 1;
    let mut state = State::FieldStart;
    for c in text.chars() {
        state = match state {
            State::Quoted { opened_on } => match c {
                '"' => State::ClosingQuote { opened_on },
                _ => state,
            },
            State::ClosingQuote { opened_on } => match c {
                '"' => State::Quoted { opened_on },
                ',' | '\n' | '\r' => State::FieldStart,
                _ => return Err(ParseError::ExtraneousQuote { line }),
            },
            State::FieldStart | State::Unquoted => match c {
                ',' | '\n' | '\r' => State::FieldStart,
                '"' if matches!(state, State::FieldStart) => State::Quoted { opened_on: line },
                '"' => return Err(ParseError::BareQuote { line }),
                _ => State::Unquoted,
            },
        };
        if c == '\n' {
            line += 1;
        }
    }
    match state {
        State::Quoted { opened_on } => Err(ParseError::UnterminatedQuote { line: opened_on }),
        _ => Ok(()),
    }
}
