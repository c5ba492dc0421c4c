use std::path::Path;
use std::process::Command;
use std::time::Instant;

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::errors::BenchError;
use crate::types::{Corpus, Variant};

/// Fixed worker count passed to the engine via `-j`.
pub const ENGINE_JOBS: &str = "8";

/// How the engine reported on one run. Exit code 3 is the engine's
/// "some inputs could not be analyzed" code and is the only non-zero
/// code that does not abort the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitClass {
    Success,
    PartialSuccess,
    Fatal,
}

/// Classify an engine exit code. Total: every integer lands in exactly
/// one class.
pub fn classify_exit(code: i32) -> ExitClass {
    match code {
        0 => ExitClass::Success,
        3 => ExitClass::PartialSuccess,
        _ => ExitClass::Fatal,
    }
}

/// The "run an external program" capability, kept behind a trait so unit
/// tests can simulate exit codes without spawning real subprocesses.
pub trait Invoker {
    /// Run `program` with `args` in `workdir`, blocking until it exits.
    /// Returns the exit code; death by signal maps to a negative code.
    fn invoke(&self, program: &str, args: &[String], workdir: &Path) -> Result<i32>;
}

/// Real subprocess invocation with inherited stdio.
pub struct SystemInvoker;

impl Invoker for SystemInvoker {
    fn invoke(&self, program: &str, args: &[String], workdir: &Path) -> Result<i32> {
        let status = Command::new(program)
            .args(args)
            .current_dir(workdir)
            .status()?;
        Ok(exit_code_of(status))
    }
}

#[cfg(unix)]
fn exit_code_of(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match status.code() {
        Some(code) => code,
        // Killed by a signal: no exit code, synthesize a negative one so
        // classification stays total (and fatal).
        None => status.signal().map_or(-1, |sig| -sig),
    }
}

#[cfg(not(unix))]
fn exit_code_of(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

/// Build the full engine argument vector (program name included) for one
/// (corpus, variant) pair.
///
/// `workdir` must be the corpus's absolute working directory: the engine
/// is launched from there, and the corpus's relative rule/target dirs are
/// resolved against it so the command works no matter where the parent
/// process sits. No existence check is done on the resolved paths; a bad
/// path is the engine's to report.
pub fn build_args(engine: &str, corpus: &Corpus, variant: &Variant, workdir: &Path) -> Vec<String> {
    let mut args = vec![
        engine.to_string(),
        "-j".to_string(),
        ENGINE_JOBS.to_string(),
        "-lang".to_string(),
        corpus.language.to_string(),
        "-config".to_string(),
        workdir.join(corpus.rule_dir).to_string_lossy().into_owned(),
        workdir.join(corpus.target_dir).to_string_lossy().into_owned(),
        "-timeout".to_string(),
        "0".to_string(),
    ];
    if !variant.extra.is_empty() {
        args.extend(variant.extra.split(' ').map(str::to_string));
    }
    args
}

/// Run the corpus's `./prep` script (no arguments) in its working
/// directory. The script fetches rules and targets; its only contract is
/// "exit 0 = ready". A non-zero exit aborts the whole benchmark run.
pub fn prepare(invoker: &dyn Invoker, corpus: &Corpus, workdir: &Path) -> Result<()> {
    if !workdir.is_dir() {
        return Err(BenchError::WorkdirNotFound {
            corpus: corpus.name.to_string(),
            path: workdir.to_path_buf(),
        }
        .into());
    }
    let code = invoker.invoke("./prep", &[], workdir)?;
    if code != 0 {
        return Err(BenchError::Preparation {
            corpus: corpus.name.to_string(),
            code,
        }
        .into());
    }
    Ok(())
}

/// Invoke the engine for one (corpus, variant) pair and return the
/// wall-clock duration in seconds.
///
/// Prints the working directory, the assembled command line, and the exit
/// status. Exit 0 is success, exit 3 is partial success (warning, duration
/// still valid); anything else aborts with `EngineExecution`.
pub fn run_engine(
    invoker: &dyn Invoker,
    engine: &str,
    corpus: &Corpus,
    variant: &Variant,
    workdir: &Path,
) -> Result<f64> {
    let argv = build_args(engine, corpus, variant, workdir);
    println!("working directory: {}", workdir.display());
    println!("engine command: {}", argv.join(" "));

    let start = Instant::now();
    let code = invoker.invoke(&argv[0], &argv[1..], workdir)?;
    let duration = start.elapsed().as_secs_f64();

    println!("engine exit status: {code}");
    match classify_exit(code) {
        ExitClass::Success => {
            println!("{}", "success".if_supports_color(Stream::Stdout, |s| s.green()));
        }
        ExitClass::PartialSuccess => {
            println!(
                "{}",
                "warning: some files couldn't be parsed"
                    .if_supports_color(Stream::Stdout, |s| s.yellow())
            );
        }
        ExitClass::Fatal => {
            return Err(BenchError::EngineExecution { code }.into());
        }
    }

    Ok(duration)
}
