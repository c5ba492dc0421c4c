use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("prep for corpus '{corpus}' exited with status {code}")]
    Preparation { corpus: String, code: i32 },

    #[error("engine exited with status {code}")]
    EngineExecution { code: i32 },

    #[error("failed to upload metric to {url}: {source}")]
    Upload {
        url: String,
        source: Box<ureq::Error>,
    },

    #[error("working directory for corpus '{corpus}' not found at {path}")]
    WorkdirNotFound { corpus: String, path: PathBuf },
}

impl BenchError {
    /// Exit code to surface from the process when this error aborts the run.
    ///
    /// Preparation and engine failures propagate the subprocess's own
    /// code; synthetic negative codes (signal death) clamp to 1 since a
    /// process can't exit with a negative status.
    pub fn exit_code(&self) -> i32 {
        match self {
            BenchError::Preparation { code, .. } | BenchError::EngineExecution { code } => {
                if *code > 0 { *code } else { 1 }
            }
            BenchError::Upload { .. } | BenchError::WorkdirNotFound { .. } => 1,
        }
    }
}
