//! Purpose: `predict` CLI entry point.
//! Role: Binary crate root; parses args, runs the mock predictor, emits one JSON line on stdout.
//! Invariants: Stdout carries exactly one JSON document: the prediction or `{"error": ...}`.
//! Invariants: Every failure goes through the single error boundary in `main`.
//! Invariants: Exit code is 0 on failure unless `--exit-code` opts into `core::error::to_exit_code`.
//! Invariants: Diagnostics go to stderr via `tracing`, never to stdout.
use std::ffi::OsString;
use std::io::{self, Read};

use clap::{Parser, error::ErrorKind as ClapErrorKind};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use predict::core::error::{Error, ErrorKind, to_exit_code};
use predict::core::input::InputRecord;
use predict::core::predict as predictor;

const STDIN_MARKER: &str = "-";

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct EmitOptions {
    pretty: bool,
    exit_code: bool,
}

#[derive(Serialize)]
struct ErrorRecord {
    error: String,
}

fn main() {
    init_tracing();
    let exit_code = match run(std::env::args_os()) {
        Ok(outcome) => outcome.exit_code,
        Err((err, options)) => {
            tracing::debug!(kind = ?err.kind(), "prediction failed");
            emit_error(&err, options);
            if options.exit_code {
                to_exit_code(err.kind())
            } else {
                0
            }
        }
    };
    std::process::exit(exit_code);
}

fn run<I>(args: I) -> Result<RunOutcome, (Error, EmitOptions)>
where
    I: IntoIterator<Item = OsString>,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        EmitOptions::default(),
                    )
                })?;
                return Ok(RunOutcome::ok());
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage).with_message(clap_error_summary(&err)),
                    EmitOptions::default(),
                ));
            }
        },
    };

    let options = EmitOptions {
        pretty: cli.pretty,
        exit_code: cli.exit_code,
    };
    if !cli.ignored.is_empty() {
        tracing::debug!(count = cli.ignored.len(), "ignoring extra arguments");
    }

    let payload = read_payload(cli.input).map_err(|err| (err, options))?;
    let input = InputRecord::from_json_str(&payload).map_err(|err| (err, options))?;
    tracing::debug!(
        complexity = input.complexity,
        inflation = input.inflation,
        base_cost = input.base_cost,
        "read input record"
    );
    let output = predictor::predict(&input).map_err(|err| (err, options))?;
    emit_json(&output, options).map_err(|err| (err, options))?;
    Ok(RunOutcome::ok())
}

#[derive(Parser)]
#[command(
    name = "predict",
    version,
    about = "Mock cost, delay, and risk prediction",
    long_about = None,
    after_help = r#"INPUT
  A JSON object with optional numeric fields:
    complexity  (default 1)
    inflation   percent (default 0)
    base_cost   (default 100000)

OUTPUT
  One JSON line on stdout: the prediction, or {"error": "..."} on failure.
  The exit code is 0 either way unless --exit-code is given.

EXAMPLES
  $ predict '{"complexity": 3, "inflation": 5, "base_cost": 200000}'
  {"predicted_cost":210000.0,"predicted_delay_days":8.0,"risk_score":35.0,"status":"Success","model_version":"v1.0-mock"}
  $ echo '{}' | predict -"#
)]
struct Cli {
    #[arg(help = "JSON-encoded input object, or `-` to read it from stdin")]
    input: Option<String>,
    #[arg(long, help = "Emit indented JSON instead of a single line")]
    pretty: bool,
    #[arg(
        long,
        help = "Exit non-zero when an error object is emitted (2 usage, 3 parse, 4 input, 5 io)"
    )]
    exit_code: bool,
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

fn read_payload(input: Option<String>) -> Result<String, Error> {
    let Some(input) = input else {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("missing input argument: expected one JSON-encoded object"));
    };
    if input != STDIN_MARKER {
        return Ok(input);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read input from stdin")
            .with_source(err)
    })?;
    Ok(buf)
}

fn encode<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn emit_json<T: Serialize>(value: &T, options: EmitOptions) -> Result<(), Error> {
    let json = encode(value, options.pretty).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode output")
            .with_source(err)
    })?;
    println!("{json}");
    Ok(())
}

fn emit_error(err: &Error, options: EmitOptions) {
    let record = ErrorRecord {
        error: err.to_string(),
    };
    let json = encode(&record, options.pretty)
        .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string());
    println!("{json}");
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::{Cli, STDIN_MARKER, read_payload, run};
    use clap::Parser;
    use predict::core::error::ErrorKind;
    use std::ffi::OsString;

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn missing_input_is_a_usage_error() {
        let err = read_payload(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert!(err.to_string().contains("missing input argument"));
    }

    #[test]
    fn literal_input_is_passed_through() {
        let payload = read_payload(Some("{}".to_string())).expect("payload");
        assert_eq!(payload, "{}");
    }

    #[test]
    fn extra_arguments_are_collected_and_ignored() {
        let cli = Cli::try_parse_from(args(&["predict", "{}", "extra", "--more"])).expect("cli");
        assert_eq!(cli.input.as_deref(), Some("{}"));
        assert_eq!(cli.ignored, vec!["extra".to_string(), "--more".to_string()]);
    }

    #[test]
    fn dash_selects_stdin() {
        let cli = Cli::try_parse_from(args(&["predict", "--pretty", STDIN_MARKER])).expect("cli");
        assert_eq!(cli.input.as_deref(), Some(STDIN_MARKER));
        assert!(cli.pretty);
    }

    #[test]
    fn unknown_flag_maps_to_usage_error() {
        let (err, options) = run(args(&["predict", "--bogus"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert!(!options.exit_code);
    }

    #[test]
    fn parse_failure_keeps_emit_options() {
        let (err, options) = run(args(&["predict", "--exit-code", "nope"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(options.exit_code);
    }
}
