//! Freqalloc - Frequency allocation problems as weighted CSPs
//!
//! Load an instance, encode it, hand the file to a WCSP solver.
//!
//! # Example
//!
//! ```rust
//! use freqalloc::prelude::*;
//!
//! let model = FrequencyModel::new(
//!     vec![Station::new(0, 0, 5, vec![10, 20], vec![15, 25])],
//!     vec![],
//!     vec![],
//!     vec![],
//! );
//!
//! let text = WcspEncoder::new(&model).encode_to_string().unwrap();
//! assert_eq!(text, "FrequencyAllocationProblem 1 4 0 1\n3\n");
//! ```

// Model types
pub use freqalloc_core::{
    build_spaced_stations, Connection, ConstraintKind, FreqAllocError, Frequency, FrequencyModel,
    Interference, ModelError, Result, SpacedStation, Station,
};

// Configuration
pub use freqalloc_config::{ConfigError, EncoderConfig, MaxDomainSizePolicy, OutputConfig};

// Encoding
pub use freqalloc_wcsp::{
    output_file_name, resolve_output_path, resolve_work_name, EncodeSummary, WcspEncoder,
    WcspHeader, DEFAULT_WORK_NAME,
};

#[cfg(feature = "console")]
pub use freqalloc_console as console;

mod encode;
pub use encode::{encode_model, EncodeOutcome};
#[cfg(feature = "serde")]
pub use encode::encode_model_file;

pub mod prelude {
    pub use super::{
        Connection, EncoderConfig, FreqAllocError, FrequencyModel, Interference,
        MaxDomainSizePolicy, Station, WcspEncoder,
    };
    pub use super::{encode_model, EncodeOutcome};
    #[cfg(feature = "serde")]
    pub use super::encode_model_file;
}
