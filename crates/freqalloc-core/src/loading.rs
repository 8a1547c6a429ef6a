//! JSON loading of problem instances.
//!
//! Instances use the data layout of the modelling front end:
//!
//! ```json
//! {
//!   "stations": [
//!     { "num": 0, "region": 0, "delta": 5, "transmitter": [10, 20], "receiver": [15, 25] }
//!   ],
//!   "regions": [4],
//!   "interferences": [{ "x": 0, "y": 1, "Delta": 3 }],
//!   "connection": [{ "x": 0, "y": 1 }]
//! }
//! ```
//!
//! `regions`, `interferences` and `connection` may be omitted. Loading only
//! parses; call [`FrequencyModel::validate`] to check the result.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::model::FrequencyModel;

impl FrequencyModel {
    /// Parses a model from a JSON string.
    ///
    /// ```
    /// use freqalloc_core::FrequencyModel;
    ///
    /// let model = FrequencyModel::from_json_str(r#"{
    ///     "stations": [{"num": 0, "region": 0, "delta": 5, "transmitter": [10], "receiver": [15]}]
    /// }"#).unwrap();
    /// assert_eq!(model.station_count(), 1);
    /// assert!(model.connections.is_empty());
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parses a model from any reader producing JSON.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Loads a model from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }
}
