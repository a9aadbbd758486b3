use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

use textmatch::{Operands, Operation, Query, Text, parse_code_point};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Operation to evaluate, e.g. contains, starts-with-ignore-case, is-numeric
    #[arg(value_name = "OP")]
    operation: String,

    /// Subject text; omit to leave the subject absent
    #[arg(short = 's', long, value_name = "TEXT")]
    subject: Option<String>,

    /// Read the subject from stdin (one trailing newline is dropped)
    #[arg(long, conflicts_with = "subject")]
    subject_stdin: bool,

    /// Pattern text; omit to leave the pattern absent
    #[arg(short = 'p', long, value_name = "TEXT")]
    pattern: Option<String>,

    /// Code point for contains-code-point (U+1F600, 0x1F600 or the character itself)
    #[arg(short = 'c', long, value_name = "CP")]
    code_point: Option<String>,

    /// Compare ignoring case
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Log query evaluation to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Never colour the result
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("textmatch: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<bool> {
    let mut operation = Operation::from_name(&args.operation)?;
    if args.ignore_case {
        operation = match operation.ignoring_case() {
            Some(op) => op,
            None => bail!("operation '{}' has no case-insensitive form", operation),
        };
    }

    let stdin_subject = if args.subject_stdin {
        Some(read_stdin_subject()?)
    } else {
        None
    };
    let subject = stdin_subject.as_deref().or(args.subject.as_deref());

    let mut query = Query::new(operation).subject(Text::from(subject));
    match operation.operands() {
        Operands::Subject => {
            if args.pattern.is_some() {
                tracing::warn!("operation '{}' takes no pattern; ignoring it", operation);
            }
        }
        Operands::SubjectAndPattern => {
            query = query.pattern(Text::from(args.pattern.as_deref()));
        }
        Operands::SubjectAndCodePoint => {
            let Some(code_point) = args.code_point.as_deref() else {
                bail!("operation '{}' requires --code-point", operation);
            };
            query = query.code_point(parse_code_point(code_point)?);
        }
    }

    let outcome = query.evaluate()?;
    print_outcome(outcome, !args.no_color && io::stdout().is_tty());
    Ok(outcome)
}

fn read_stdin_subject() -> Result<String> {
    let mut contents = String::new();
    io::stdin()
        .read_to_string(&mut contents)
        .context("Failed to read stdin")?;
    Ok(strip_line_ending(contents))
}

/// Drop one trailing `\n` or `\r\n`.
fn strip_line_ending(mut contents: String) -> String {
    if contents.ends_with('\n') {
        contents.pop();
        if contents.ends_with('\r') {
            contents.pop();
        }
    }
    contents
}

fn print_outcome(outcome: bool, color: bool) {
    let word = if outcome { "true" } else { "false" };
    if !color {
        println!("{}", word);
    } else if outcome {
        println!("{}", word.green());
    } else {
        println!("{}", word.red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("textmatch").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_contains_ignore_case_flag() {
        let a = args(&["contains", "-s", "TEST", "-p", "es", "-i", "--no-color"]);
        assert!(run(&a).unwrap());
    }

    #[test]
    fn test_absent_pattern() {
        let a = args(&["starts-with", "--subject", "test", "--no-color"]);
        assert!(!run(&a).unwrap());
    }

    #[test]
    fn test_empty_pattern() {
        let a = args(&["ends-with", "--subject", "test", "--pattern", "", "--no-color"]);
        assert!(run(&a).unwrap());
    }

    #[test]
    fn test_class_operation() {
        let a = args(&["is-numeric", "-s", "+123", "--no-color"]);
        assert!(!run(&a).unwrap());
    }

    #[test]
    fn test_code_point_required() {
        let a = args(&["contains-code-point", "-s", "abc", "--no-color"]);
        assert!(run(&a).is_err());
        let a = args(&["contains-code-point", "-s", "a\u{1F600}", "-c", "U+1F600", "--no-color"]);
        assert!(run(&a).unwrap());
    }

    #[test]
    fn test_ignore_case_rejected_for_classes() {
        let a = args(&["is-alphabetic", "-s", "abc", "-i", "--no-color"]);
        assert!(run(&a).is_err());
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("abc\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc\r\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc\n\n".to_string()), "abc\n");
        assert_eq!(strip_line_ending("abc".to_string()), "abc");
        assert_eq!(strip_line_ending("abc\r".to_string()), "abc\r");
        assert_eq!(strip_line_ending("\n".to_string()), "");
    }

    #[test]
    fn test_subject_conflicts_with_stdin() {
        let argv = ["textmatch", "contains", "-s", "x", "--subject-stdin"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
