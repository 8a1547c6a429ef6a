//! Input model for frequency allocation problems.
//!
//! A model is a flat set of value types. Interferences and connections refer
//! to stations by their position in [`FrequencyModel::stations`], which is also
//! the variable index used in the encoded problem.
//!
//! # Example
//!
//! ```
//! use freqalloc_core::{Connection, FrequencyModel, Interference, Station};
//!
//! let model = FrequencyModel::new(
//!     vec![
//!         Station::new(0, 0, 5, vec![10, 20], vec![15, 25]),
//!         Station::new(1, 0, 5, vec![15, 25], vec![10, 20]),
//!     ],
//!     vec![4],
//!     vec![Interference::new(0, 1, 3)],
//!     vec![Connection::new(0, 1)],
//! );
//!
//! assert!(model.validate().is_ok());
//! assert_eq!(model.cost_function_count(), 2);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A frequency value, in the instance's own units.
pub type Frequency = i64;

/// A station needing one transmitter and one receiver frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Station {
    /// Identifier carried over from the instance.
    #[cfg_attr(feature = "serde", serde(rename = "num", alias = "id"))]
    pub id: usize,
    /// Region the station belongs to.
    pub region: usize,
    /// Required distance between the transmitter and receiver frequency.
    pub delta: Frequency,
    /// Candidate transmitter frequencies, in instance order.
    #[cfg_attr(feature = "serde", serde(rename = "transmitter", alias = "transmitters"))]
    pub transmitters: Vec<Frequency>,
    /// Candidate receiver frequencies, in instance order.
    #[cfg_attr(feature = "serde", serde(rename = "receiver", alias = "receivers"))]
    pub receivers: Vec<Frequency>,
}

impl Station {
    pub fn new(
        id: usize,
        region: usize,
        delta: Frequency,
        transmitters: Vec<Frequency>,
        receivers: Vec<Frequency>,
    ) -> Self {
        Self {
            id,
            region,
            delta,
            transmitters,
            receivers,
        }
    }
}

/// Two nearby stations whose frequencies must all be at least `gap` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Interference {
    pub x: usize,
    pub y: usize,
    /// Minimum distance between any frequency of `x` and any frequency of `y`.
    #[cfg_attr(feature = "serde", serde(rename = "Delta", alias = "gap", alias = "delta"))]
    pub gap: Frequency,
}

impl Interference {
    pub fn new(x: usize, y: usize, gap: Frequency) -> Self {
        Self { x, y, gap }
    }
}

/// A communication link: `x` transmits on what `y` receives and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Connection {
    pub x: usize,
    pub y: usize,
}

impl Connection {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Family of a binary constraint, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Interference,
    Connection,
}

impl ConstraintKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Interference => "interference",
            Self::Connection => "connection",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete problem instance, immutable for the duration of an encoding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct FrequencyModel {
    pub stations: Vec<Station>,
    /// Maximum number of distinct frequencies usable in each region.
    #[cfg_attr(feature = "serde", serde(default))]
    pub regions: Vec<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub interferences: Vec<Interference>,
    #[cfg_attr(feature = "serde", serde(default, rename = "connection", alias = "connections"))]
    pub connections: Vec<Connection>,
}

impl FrequencyModel {
    pub fn new(
        stations: Vec<Station>,
        regions: Vec<u32>,
        interferences: Vec<Interference>,
        connections: Vec<Connection>,
    ) -> Self {
        Self {
            stations,
            regions,
            interferences,
            connections,
        }
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of binary cost functions the encoding will contain.
    pub fn cost_function_count(&self) -> usize {
        self.interferences.len() + self.connections.len()
    }

    /// Returns the indices of the stations located in `region`.
    pub fn stations_in_region(&self, region: usize) -> impl Iterator<Item = usize> + '_ {
        self.stations
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.region == region)
            .map(|(i, _)| i)
    }

    /// Checks everything about the model that does not require the spaced
    /// stations: spacing signs and constraint scopes.
    ///
    /// Reports the first violation found, scanning stations, then
    /// interferences, then connections, in input order.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (station, s) in self.stations.iter().enumerate() {
            if s.delta < 0 {
                return Err(ModelError::NegativeDelta {
                    station,
                    delta: s.delta,
                });
            }
        }

        for (index, interference) in self.interferences.iter().enumerate() {
            self.check_scope(
                ConstraintKind::Interference,
                index,
                interference.x,
                interference.y,
            )?;
            if interference.gap < 0 {
                return Err(ModelError::NegativeGap {
                    index,
                    gap: interference.gap,
                });
            }
        }

        for (index, connection) in self.connections.iter().enumerate() {
            self.check_scope(ConstraintKind::Connection, index, connection.x, connection.y)?;
        }

        Ok(())
    }

    fn check_scope(
        &self,
        kind: ConstraintKind,
        index: usize,
        x: usize,
        y: usize,
    ) -> Result<(), ModelError> {
        let station_count = self.stations.len();
        for station in [x, y] {
            if station >= station_count {
                return Err(ModelError::UnknownStation {
                    kind,
                    index,
                    station,
                    station_count,
                });
            }
        }
        if x == y {
            return Err(ModelError::SelfConstraint {
                kind,
                index,
                station: x,
            });
        }
        Ok(())
    }
}
