//! One-call encoding into the configured output file.

use std::path::PathBuf;

use freqalloc_config::EncoderConfig;
use freqalloc_core::{FrequencyModel, Result};
use freqalloc_wcsp::{resolve_output_path, EncodeSummary, WcspEncoder};

/// Where an encoding was written and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOutcome {
    pub path: PathBuf,
    pub summary: EncodeSummary,
}

/// Encodes `model` into the file named by `config.output`.
///
/// The model is validated before the file is created.
pub fn encode_model(model: &FrequencyModel, config: &EncoderConfig) -> Result<EncodeOutcome> {
    let path = resolve_output_path(&config.output);
    let summary = WcspEncoder::with_config(model, config).encode_to_path(&path)?;
    Ok(EncodeOutcome { path, summary })
}

/// Loads a JSON instance from `model_path` and encodes it with
/// [`encode_model`].
#[cfg(feature = "serde")]
pub fn encode_model_file(
    model_path: impl AsRef<std::path::Path>,
    config: &EncoderConfig,
) -> Result<EncodeOutcome> {
    let model_path = model_path.as_ref();
    let model = FrequencyModel::from_json_file(model_path)?;
    tracing::debug!(path = %model_path.display(), "Model loaded");
    encode_model(&model, config)
}
