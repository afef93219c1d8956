//! Run configuration
//!
//! All process-wide inputs (paths, model, credential) are resolved here into
//! an explicit config value, keeping the extraction core pure. The API
//! credential is looked up at configuration time so a missing key aborts the
//! run before any PDF work starts.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Environment variable holding the summarization API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default model for the summary call.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Configuration for one extraction run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Input ADT-1 PDF
    pub input: PathBuf,
    /// Output JSON record file
    pub output: PathBuf,
    /// Summary settings; `None` runs extraction only
    pub summary: Option<SummaryConfig>,
}

/// Settings for the optional summarization step.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Output plain-text summary file
    pub output: PathBuf,
    /// Chat model identifier
    pub model: String,
    /// API credential, taken from [`API_KEY_ENV`]
    pub api_key: String,
}

impl RunConfig {
    /// Build a run configuration, resolving the credential if a summary was
    /// requested.
    pub fn new(
        input: PathBuf,
        output: PathBuf,
        summary_output: Option<PathBuf>,
        model: String,
    ) -> Result<Self> {
        let summary = summary_output
            .map(|path| {
                let api_key = std::env::var(API_KEY_ENV).map_err(|_| Error::MissingApiKey {
                    var: API_KEY_ENV.to_string(),
                })?;
                Ok::<_, Error>(SummaryConfig {
                    output: path,
                    model,
                    api_key,
                })
            })
            .transpose()?;

        Ok(Self {
            input,
            output,
            summary,
        })
    }
}
