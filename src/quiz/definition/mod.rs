use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use self::quoting::check_quoting;

pub mod problem;
mod quoting;

pub use self::problem::Problem;


#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Could not open problem file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse problem file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Could not read problem data")]
    Read(#[from] std::io::Error),
    #[error("Quote inside an unquoted field on line {line}")]
    BareQuote { line: u64 },
    #[error("Unexpected text after a closing quote on line {line}")]
    ExtraneousQuote { line: u64 },
    #[error("Quoted field opened on line {line} is never closed")]
    UnterminatedQuote { line: u64 },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// One row of the problem file, fields in source order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Record {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

impl From<&csv::StringRecord> for Record {
    fn from(row: &csv::StringRecord) -> Self {
        Record::new(row.iter())
    }
}

#[derive(Debug)]
pub struct QuizDefinition {
    records: Vec<Record>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition, SourceError> {
        let file = File::open(source).map_err(|e| SourceError::Open {
            path: source.to_path_buf(),
            source: e,
        })?;
        let definition = Self::from_reader(file).map_err(|e| SourceError::Parse {
            path: source.to_path_buf(),
            source: e,
        })?;
        debug!(
            "Read {} records from {}",
            definition.records.len(),
            source.display()
        );
        Ok(definition)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<QuizDefinition, ParseError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        check_quoting(&text)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(text.as_bytes());
        let mut records = Vec::new();
        for row in csv_reader.records() {
            records.push(Record::from(&row?));
        }
        Ok(QuizDefinition { records })
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub fn get_records(&self) -> &[Record] {
        &self.records
    }

    /// Builds problems in record order.
    pub fn build_problems(&self) -> Vec<Problem> {
        self.records.iter().map(Problem::from).collect()
    }
}
