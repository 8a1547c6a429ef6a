//! Spaced stations: the encoded variable domains.
//!
//! A station's transmitter and receiver frequencies must be exactly `delta`
//! apart. The spaced station lists the pairs of the Cartesian product that
//! satisfy this, transmitter-major. Index `k` into that list is the value a
//! solver assigns to the station's variable, so the enumeration order is part
//! of the output format and never changes after construction.
//!
//! # Example
//!
//! ```
//! use freqalloc_core::{SpacedStation, Station};
//!
//! let station = Station::new(0, 0, 5, vec![10, 20], vec![15, 25]);
//! let spaced = SpacedStation::from_station(&station);
//!
//! assert_eq!(spaced.tuple_count(), 3);
//! assert_eq!(spaced.pairs().collect::<Vec<_>>(), vec![(10, 15), (20, 15), (20, 25)]);
//! ```

use crate::error::ModelError;
use crate::model::{Frequency, Station};

/// Valid (transmitter, receiver) pairs of one station, stored as two
/// index-aligned arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacedStation {
    /// Identifier of the source station.
    pub id: usize,
    /// Region of the source station.
    pub region: usize,
    transmitters: Vec<Frequency>,
    receivers: Vec<Frequency>,
}

impl SpacedStation {
    /// Enumerates the station's pairs, transmitters outer and receivers inner,
    /// keeping those exactly `delta` apart.
    pub fn from_station(station: &Station) -> Self {
        let mut transmitters = Vec::new();
        let mut receivers = Vec::new();

        // A negative delta is never met, leaving the domain empty.
        if let Ok(delta) = u64::try_from(station.delta) {
            for &t in &station.transmitters {
                for &r in &station.receivers {
                    if t.abs_diff(r) == delta {
                        transmitters.push(t);
                        receivers.push(r);
                    }
                }
            }
        }

        Self {
            id: station.id,
            region: station.region,
            transmitters,
            receivers,
        }
    }

    /// Number of valid pairs, i.e. the size of the encoded domain.
    pub fn tuple_count(&self) -> usize {
        self.transmitters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transmitters.is_empty()
    }

    /// Transmitter frequency of pair `k`.
    #[inline]
    pub fn transmitter(&self, k: usize) -> Frequency {
        self.transmitters[k]
    }

    /// Receiver frequency of pair `k`.
    #[inline]
    pub fn receiver(&self, k: usize) -> Frequency {
        self.receivers[k]
    }

    pub fn transmitters(&self) -> &[Frequency] {
        &self.transmitters
    }

    pub fn receivers(&self) -> &[Frequency] {
        &self.receivers
    }

    /// Iterates `(transmitter, receiver)` pairs in domain index order.
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (Frequency, Frequency)> + '_ {
        self.transmitters
            .iter()
            .copied()
            .zip(self.receivers.iter().copied())
    }
}

/// Builds the spaced station of every station, in station order.
pub fn build_spaced_stations(stations: &[Station]) -> Vec<SpacedStation> {
    stations.iter().map(SpacedStation::from_station).collect()
}

/// Rejects the first station whose spaced domain is empty.
///
/// `spaced` must have been built from `stations`.
pub fn ensure_non_empty_domains(
    stations: &[Station],
    spaced: &[SpacedStation],
) -> Result<(), ModelError> {
    debug_assert_eq!(stations.len(), spaced.len());

    match spaced.iter().position(SpacedStation::is_empty) {
        Some(station) => {
            let s = &stations[station];
            Err(ModelError::EmptyDomain {
                station,
                delta: s.delta,
                transmitters: s.transmitters.len(),
                receivers: s.receivers.len(),
            })
        }
        None => Ok(()),
    }
}
