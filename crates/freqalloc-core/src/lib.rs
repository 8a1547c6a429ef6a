//! Freqalloc Core - Model types for frequency allocation problems
//!
//! This crate provides the fundamental abstractions shared by the encoder:
//! - Input model types (stations, interferences, connections, regions)
//! - Spaced stations, the per-station domain of valid frequency pairs
//! - Model validation and the error taxonomy
//! - JSON loading of problem instances (feature `serde`)

pub mod error;
#[cfg(feature = "serde")]
pub mod loading;
pub mod model;
pub mod spaced;


pub use error::{FreqAllocError, ModelError, Result};
pub use model::{Connection, ConstraintKind, Frequency, FrequencyModel, Interference, Station};
pub use spaced::{build_spaced_stations, ensure_non_empty_domains, SpacedStation};
