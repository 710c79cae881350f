use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "timed-quiz", version, about = "Timed quiz over a CSV file of problems")]
pub struct Args {
    /// CSV file with one `question,answer` pair per line
    #[arg(long, default_value = "problems.csv", allow_hyphen_values = true)]
    pub file: PathBuf,

    /// Time limit for the whole quiz, in seconds
    #[arg(long, default_value_t = 30)]
    pub limit: u64,

    /// Ask the problems in random order
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub shuffle: bool,
}

const LONG_FLAGS: &[&str] = &["file", "limit", "shuffle", "help", "version"];

/// Accepts `-file x` style long flags by rewriting them to `--file x`.
/// Values, including ones starting with a dash, are left untouched.
fn normalize_flag(arg: OsString) -> OsString {
    let rewritten = match arg.to_str() {
        Some(s) if s.starts_with('-') && !s.starts_with("--") => {
            let name = s[1..].split('=').next().unwrap_or_default();
            if LONG_FLAGS.contains(&name) {
                Some(format!("-{}", s))
            } else {
                None
            }
        }
        _ => None,
    };
    rewritten.map_or(arg, OsString::from)
}

impl Args {
    pub fn parse_from_env() -> Self {
        Self::parse_normalized(std::env::args_os())
    }

    pub fn parse_normalized<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let program = args.next();
        Args::parse_from(program.into_iter().chain(args.map(normalize_flag)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let args = std::iter::once("timed-quiz")
            .chain(args.iter().copied())
            .map(OsString::from);
        Args::parse_normalized(args)
    }

    #[test]
    fn defaults() {
        let args = parse(&[]);
        assert_eq!(args.file, PathBuf::from("problems.csv"));
        assert_eq!(args.limit, 30);
        assert!(!args.shuffle);
    }

    #[test]
    fn single_dash_long_flags() {
        let args = parse(&["-file", "quiz.csv", "-limit", "5", "-shuffle"]);
        assert_eq!(args.file, PathBuf::from("quiz.csv"));
        assert_eq!(args.limit, 5);
        assert!(args.shuffle);
    }

    #[test]
    fn flags_with_equals() {
        let args = parse(&["-file=quiz.csv", "--limit=12", "-shuffle=false"]);
        assert_eq!(args.file, PathBuf::from("quiz.csv"));
        assert_eq!(args.limit, 12);
        assert!(!args.shuffle);
    }

    #[test]
    fn dashed_values_are_left_alone() {
        let args = parse(&["-file", "-quiz.csv", "-limit", "7"]);
        assert_eq!(args.file, PathBuf::from("-quiz.csv"));
        assert_eq!(args.limit, 7);
        assert_eq!(normalize_flag("-files".into()), OsString::from("-files"));
    }

    #[test]
    fn negative_looking_values_are_left_alone() {
        assert_eq!(normalize_flag("-5".into()), OsString::from("-5"));
        assert_eq!(normalize_flag("-".into()), OsString::from("-"));
        assert_eq!(normalize_flag("--file".into()), OsString::from("--file"));
    }
}
