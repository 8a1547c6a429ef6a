//! Output file naming.
//!
//! Batch runs drop the name of the current work into a small marker file; the
//! encoded file is named after it. A missing or unusable marker never fails
//! the run, it falls back to [`DEFAULT_WORK_NAME`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use freqalloc_config::OutputConfig;
use tracing::{debug, warn};

/// Work name used when none can be resolved.
pub const DEFAULT_WORK_NAME: &str = "unknown";

/// Reads the work name from `queue_file`, dropping line breaks.
///
/// Names that could move the file out of the output directory (path
/// separators or `..`) are treated like an empty marker.
pub fn resolve_work_name(queue_file: impl AsRef<Path>) -> String {
    let path = queue_file.as_ref();

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let name: String = content.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
            if name.is_empty() {
                warn!(path = %path.display(), "Work queue file is empty, using default work name");
                DEFAULT_WORK_NAME.to_string()
            } else if !is_plain_file_name(&name) {
                warn!(path = %path.display(), work_name = %name, "Work name is not a plain file name, using default work name");
                DEFAULT_WORK_NAME.to_string()
            } else {
                name
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No work queue file, using default work name");
            DEFAULT_WORK_NAME.to_string()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Work queue file unreadable, using default work name");
            DEFAULT_WORK_NAME.to_string()
        }
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.contains(['/', '\\']) && !name.contains("..")
}

/// File name of the encoding of `work_name`.
///
/// ```
/// use freqalloc_wcsp::output_file_name;
///
/// assert_eq!(
///     output_file_name("FrequencyAllocationWCSP", "scen01"),
///     "FrequencyAllocationWCSP_scen01.wcsp"
/// );
/// ```
pub fn output_file_name(prefix: &str, work_name: &str) -> String {
    format!("{}_{}.wcsp", prefix, work_name)
}

/// Full output path for `output`. An explicit work name wins over the work
/// queue file.
pub fn resolve_output_path(output: &OutputConfig) -> PathBuf {
    let work_name = match &output.work_name {
        Some(name) => name.clone(),
        None => resolve_work_name(&output.work_queue_file),
    };
    output
        .directory
        .join(output_file_name(&output.file_prefix, &work_name))
}
