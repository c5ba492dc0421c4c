use anyhow::Result;

use crate::errors::BenchError;
use crate::types::{Corpus, RunResult, Variant};

/// Namespace all benchmark metrics live under on the dashboard.
pub const METRIC_PREFIX: &str = "engine.bench";

/// Dot-joined run name printed in the per-run header, e.g.
/// `engine.bench.dummy.std`.
pub fn metric_name(corpus: &Corpus, variant: &Variant) -> String {
    [METRIC_PREFIX, corpus.name, variant.name].join(".")
}

/// The metric actually reported: the run name with `.duration` appended.
pub fn duration_metric(corpus: &Corpus, variant: &Variant) -> String {
    format!("{}.duration", metric_name(corpus, variant))
}

/// Human-readable result line, also used verbatim in the final summary.
pub fn format_result(result: &RunResult) -> String {
    format!("{} = {:.3} s", result.metric_name, result.duration_seconds)
}

/// Blocking upload of one metric to the dashboard.
///
/// POSTs the value as ASCII decimal text to
/// `<dashboard_url>/api/metric/<metric_name>` and prints the response
/// body. Transport and HTTP-level errors propagate as `Upload` and abort
/// the run; there is no retry.
pub fn upload_result(dashboard_url: &str, metric_name: &str, value: f64) -> Result<()> {
    let url = format!(
        "{}/api/metric/{}",
        dashboard_url.trim_end_matches('/'),
        metric_name
    );
    println!("Uploading to {url}");
    let response = ureq::post(&url)
        .send_string(&value.to_string())
        .map_err(|source| BenchError::Upload {
            url: url.clone(),
            source: Box::new(source),
        })?;
    println!("{}", response.into_string()?);
    Ok(())
}
