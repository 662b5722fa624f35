//! Interactive and batch front end for the equation canonicalizer.

mod error;

use canon_algebra::Engine;
use canon_parser::equation::Equation;
use clap::Parser;
use error::Error;
use log::{debug, info};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "canon",
    version = env!("CARGO_PKG_VERSION"),
    about = "canonicalize equations",
    long_about = "\
Transform an equation into canonical form. An equation can be of any order and may contain any
amount of variables and brackets.

Each summand looks like `ax^k`, where `a` is a floating point value, `k` is an integer value
and `x` is a variable (each summand can have many variables).

For example:
  \"x^2 + 3.5xy + y = y^2 - xy + y\"  becomes  \"x^2 + 4.5xy - y^2 = 0\"
  \"x = 1\"                           becomes  \"x - 1 = 0\"

Explicit multiplication is acceptable: `2x` and `2*x` are the same term, and so are `x^2` and
`x**2`.

Valid variables: t, u, v, w, x, y, z",
    after_help = "Set RUST_LOG=debug to trace what each equation turns into."
)]
struct Cli {
    /// Process equations in batch.
    #[arg(short, long)]
    batch: bool,

    /// Get the equations from this file in batch mode.
    #[arg(short, long, default_value = "equations.in")]
    input_file: PathBuf,

    /// Write the canonicalized equations to this file in batch mode.
    #[arg(short, long, default_value = "equations.out")]
    output_file: PathBuf,
}

/// Canonicalizes one input line, returning the `expression = 0` form.
fn canonicalize(input: &str, engine: &Engine) -> Result<String, Error> {
    let equation = Equation::new(input)?;
    debug!(
        "sides in engine syntax: {} | {}",
        equation.left_hand_side(),
        equation.right_hand_side(),
    );
    Ok(equation.canonicalize(engine)?)
}

/// Runs the interactive shell: read a line, canonicalize it, print the result, repeat.
fn run_interactive(engine: &Engine) -> ExitCode {
    let mut rl = DefaultEditor::new().unwrap();

    fn process_line(rl: &mut DefaultEditor, engine: &Engine) -> Result<(), ReadlineError> {
        let input = rl.readline("enter an equation>>> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        match canonicalize(&input, engine) {
            Ok(canonical) => println!("{}\n", canonical),
            Err(err) => err.report_to_stderr(&input),
        }
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, engine) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }

    ExitCode::SUCCESS
}

/// Canonicalizes equations piped through stdin, one per line, results to stdout.
fn run_piped(engine: &Engine) -> ExitCode {
    let mut failures = 0usize;

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        };
        if line.trim().is_empty() {
            continue;
        }

        match canonicalize(&line, engine) {
            Ok(canonical) => println!("{}", canonical),
            Err(err) => {
                failures += 1;
                err.report_to_stderr(&line);
            },
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Reads equations from the input file and writes their canonical forms to the output file,
/// one per line, preserving input order. Failed equations are reported to stderr and skipped.
fn run_batch(cli: &Cli, engine: &Engine) -> io::Result<()> {
    let input = BufReader::new(File::open(&cli.input_file)?);
    let mut output = File::create(&cli.output_file)?;

    let mut canonicalized = 0usize;
    let mut skipped = 0usize;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        debug!("processing equation: {}", line);
        match canonicalize(&line, engine) {
            Ok(canonical) => {
                writeln!(output, "{}", canonical)?;
                canonicalized += 1;
            },
            Err(err) => {
                skipped += 1;
                err.report_to_stderr(&line);
            },
        }
    }

    info!("batch done: {} canonicalized, {} skipped", canonicalized, skipped);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let engine = Engine::new();

    if cli.batch {
        match run_batch(&cli, &engine) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}", err);
                ExitCode::FAILURE
            },
        }
    } else if !io::stdin().is_terminal() {
        run_piped(&engine)
    } else {
        run_interactive(&engine)
    }
}
