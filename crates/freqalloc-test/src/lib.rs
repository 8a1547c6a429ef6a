//! Shared test fixtures for freqalloc crates.
//!
//! This crate provides small, hand-checked problem instances.
//! It depends on `freqalloc-core` only, so any other crate can use it as a
//! dev-dependency.
//!
//! - [`network`] - four-station instance with its expected encoding
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! freqalloc-test = { workspace = true }
//! ```

pub mod network;

use freqalloc_core::{Connection, FrequencyModel, Interference, Station};

pub use network::{
    small_network, SMALL_NETWORK_JSON, SMALL_NETWORK_WCSP, SMALL_NETWORK_TUPLE_COUNT_HEADER,
};

/// Station with transmitters `[10, 20]`, receivers `[15, 25]` and delta 5.
///
/// Its valid pairs are `(10, 15)`, `(20, 15)`, `(20, 25)`.
pub fn example_station() -> Station {
    Station::new(0, 0, 5, vec![10, 20], vec![15, 25])
}

/// Two stations whose pairs mirror each other, linked by a connection and
/// an interference of gap 3.
pub fn linked_pair() -> FrequencyModel {
    FrequencyModel::new(
        vec![
            example_station(),
            Station::new(1, 0, 5, vec![15, 25], vec![10, 20]),
        ],
        vec![4],
        vec![Interference::new(0, 1, 3)],
        vec![Connection::new(0, 1)],
    )
}

/// [`small_network`] where station 2 has no pair `delta` apart.
pub fn empty_domain_network() -> FrequencyModel {
    let mut model = small_network();
    model.stations[2].delta = 100;
    model
}
