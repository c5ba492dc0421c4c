/// One benchmark case: a set of rules run against a target repo.
///
/// `rule_dir` and `target_dir` are relative to the per-corpus working
/// directory (a folder named after the corpus, holding an `input/`
/// subfolder and the `prep` script). They are resolved to absolute paths
/// at argument-construction time because the engine is launched from a
/// different working directory per corpus.
#[derive(Debug, Clone, Copy)]
pub struct Corpus {
    pub name: &'static str,
    pub rule_dir: &'static str,
    pub target_dir: &'static str,
    /// Language tag the engine needs to analyze the targets.
    pub language: &'static str,
}

/// One engine configuration to benchmark: a name plus space-separated
/// extra flags appended to the default command line (may be empty).
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    pub name: &'static str,
    pub extra: &'static str,
}

/// Timing for one (corpus, variant) engine run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub metric_name: String,
    pub duration_seconds: f64,
}
