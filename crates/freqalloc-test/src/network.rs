//! Four-station test network.
//!
//! Two regions with two stations each. Stations 0/1 and 2/3 form linked
//! pairs. The interference between stations 0 and 1 leaves no allowed
//! combination, which exercises empty blocks.
//!
//! | station | delta | pairs                          |
//! |---------|-------|--------------------------------|
//! | 0       | 2     | (10,12) (12,14)                |
//! | 1       | 2     | (12,10) (14,12)                |
//! | 2       | 3     | (20,23) (30,27) (30,33)        |
//! | 3       | 3     | (23,20) (27,30)                |

use freqalloc_core::{Connection, FrequencyModel, Interference, Station};

/// The network as a model.
pub fn small_network() -> FrequencyModel {
    FrequencyModel::new(
        vec![
            Station::new(0, 0, 2, vec![10, 12], vec![12, 14]),
            Station::new(1, 0, 2, vec![12, 14], vec![10, 12]),
            Station::new(2, 1, 3, vec![20, 30], vec![23, 27, 33]),
            Station::new(3, 1, 3, vec![23, 27], vec![20, 30]),
        ],
        vec![4, 3],
        vec![
            Interference::new(0, 2, 10),
            Interference::new(1, 3, 8),
            Interference::new(0, 1, 1),
        ],
        vec![Connection::new(0, 1), Connection::new(3, 2)],
    )
}

/// The network in the JSON data layout.
pub const SMALL_NETWORK_JSON: &str = r#"{
  "stations": [
    {"num": 0, "region": 0, "delta": 2, "transmitter": [10, 12], "receiver": [12, 14]},
    {"num": 1, "region": 0, "delta": 2, "transmitter": [12, 14], "receiver": [10, 12]},
    {"num": 2, "region": 1, "delta": 3, "transmitter": [20, 30], "receiver": [23, 27, 33]},
    {"num": 3, "region": 1, "delta": 3, "transmitter": [23, 27], "receiver": [20, 30]}
  ],
  "regions": [4, 3],
  "interferences": [
    {"x": 0, "y": 2, "Delta": 10},
    {"x": 1, "y": 3, "Delta": 8},
    {"x": 0, "y": 1, "Delta": 1}
  ],
  "connection": [
    {"x": 0, "y": 1},
    {"x": 3, "y": 2}
  ]
}
"#;

/// Expected encoding with the original maximum domain size.
pub const SMALL_NETWORK_WCSP: &str = "\
FrequencyAllocationProblem 4 6 5 6
2 2 3 2
2 0 2 1 4
0 1 0
0 2 0
1 1 0
1 2 0
2 1 3 1 3
0 0 0
0 1 0
1 1 0
2 0 1 1 0
2 0 1 1 2
0 0 0
1 1 0
2 3 2 1 2
0 0 0
1 1 0
";

/// Header of the encoding when the maximum domain size is the largest tuple
/// count. The remaining lines equal those of [`SMALL_NETWORK_WCSP`].
pub const SMALL_NETWORK_TUPLE_COUNT_HEADER: &str = "FrequencyAllocationProblem 4 3 5 6";
