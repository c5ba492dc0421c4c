use std::path::PathBuf;

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::corpus::{CORPORA, DUMMY_CORPORA, VARIANTS};
use crate::report;
use crate::runner::{self, Invoker};
use crate::types::RunResult;

/// Explicit driver state. `base_dir` is the absolute directory holding
/// one working directory per corpus, named after it; threading it here
/// (instead of chdir-ing the process around) keeps the parent cwd
/// untouched for the whole run.
pub struct DriverOptions {
    pub engine: String,
    pub base_dir: PathBuf,
    pub dashboard_url: String,
    pub dummy: bool,
    pub upload: bool,
}

/// The whole benchmark, strictly sequential: per corpus prepare, then per
/// variant run the engine, report the timing, and append it to the log;
/// at the end print every logged line as the summary. The first
/// preparation, engine, or upload failure aborts — remaining corpora and
/// variants are skipped and the summary is not printed.
pub fn run_benchmarks(invoker: &dyn Invoker, opts: &DriverOptions) -> Result<()> {
    let corpora = if opts.dummy { DUMMY_CORPORA } else { CORPORA };
    let mut results: Vec<RunResult> = Vec::new();

    for corpus in corpora {
        let workdir = opts.base_dir.join(corpus.name);
        runner::prepare(invoker, corpus, &workdir)?;

        for variant in VARIANTS {
            let name = report::metric_name(corpus, variant);
            println!(
                "------ {} ------",
                name.if_supports_color(Stream::Stdout, |s| s.bold())
            );

            let duration = runner::run_engine(invoker, &opts.engine, corpus, variant, &workdir)?;
            let result = RunResult {
                metric_name: report::duration_metric(corpus, variant),
                duration_seconds: duration,
            };
            println!("{}", report::format_result(&result));

            if opts.upload {
                report::upload_result(&opts.dashboard_url, &result.metric_name, duration)?;
            }
            results.push(result);
        }
    }

    for result in &results {
        println!("{}", report::format_result(result));
    }
    Ok(())
}
