//! Connection cost functions.
//!
//! A linked pair of stations must talk to each other: `x` transmits on the
//! frequency `y` receives and `y` transmits on the frequency `x` receives.

use std::collections::HashMap;

use freqalloc_core::{Connection, ConstraintKind, Frequency, SpacedStation};

use crate::format::CostFunction;

/// Builds the cost function of `connection`.
///
/// The pairs of `y` are indexed by `(receiver, transmitter)` so each pair of
/// `x` finds its matches directly. Tuples come out in the same order as a
/// nested scan with `x` outer and `y` inner.
///
/// `connection` must reference stations of `spaced`.
pub fn connection_cost_function(connection: &Connection, spaced: &[SpacedStation]) -> CostFunction {
    let sx = &spaced[connection.x];
    let sy = &spaced[connection.y];
    let mut cost_function =
        CostFunction::new(ConstraintKind::Connection, connection.x, connection.y);

    // Indices pushed in increasing order.
    let mut by_link: HashMap<(Frequency, Frequency), Vec<usize>> = HashMap::new();
    for (j, (transmitter, receiver)) in sy.pairs().enumerate() {
        by_link.entry((receiver, transmitter)).or_default().push(j);
    }

    for (i, link) in sx.pairs().enumerate() {
        if let Some(matches) = by_link.get(&link) {
            for &j in matches {
                cost_function.allow(i, j);
            }
        }
    }

    cost_function
}

#[cfg(test)]
mod tests {
    use super::*;
    use freqalloc_core::{build_spaced_stations, Station};

    fn nested_scan(sx: &SpacedStation, sy: &SpacedStation) -> Vec<(usize, usize)> {
        let mut tuples = Vec::new();
        for i in 0..sx.tuple_count() {
            for j in 0..sy.tuple_count() {
                if sx.transmitter(i) == sy.receiver(j) && sx.receiver(i) == sy.transmitter(j) {
                    tuples.push((i, j));
                }
            }
        }
        tuples
    }

    #[test]
    fn test_mirror_stations_match_pairwise() {
        let stations = vec![
            Station::new(0, 0, 5, vec![10, 20], vec![15, 25]),
            Station::new(1, 0, 5, vec![15, 25], vec![10, 20]),
        ];
        let spaced = build_spaced_stations(&stations);
        let cf = connection_cost_function(&Connection::new(0, 1), &spaced);

        // x: (10,15) (20,15) (20,25); y: (15,10) (15,20) (25,20)
        assert_eq!(cf.tuples(), &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(cf.kind, ConstraintKind::Connection);
    }

    #[test]
    fn test_one_direction_is_not_enough() {
        let stations = vec![
            Station::new(0, 0, 5, vec![10], vec![15]),
            Station::new(1, 0, 5, vec![20], vec![10]),
        ];
        let spaced = build_spaced_stations(&stations);
        let cf = connection_cost_function(&Connection::new(0, 1), &spaced);
        assert_eq!(cf.tuple_count(), 0);
    }

    #[test]
    fn test_matches_nested_scan_with_duplicates() {
        let stations = vec![
            Station::new(0, 0, 2, vec![1, 3, 5, 3], vec![3, 5, 1, 7]),
            Station::new(1, 1, 2, vec![3, 5, 1, 5], vec![1, 3, 5, 3]),
        ];
        let spaced = build_spaced_stations(&stations);

        for connection in [Connection::new(0, 1), Connection::new(1, 0)] {
            let cf = connection_cost_function(&connection, &spaced);
            let expected = nested_scan(&spaced[connection.x], &spaced[connection.y]);
            assert!(!expected.is_empty());
            assert_eq!(cf.tuples(), expected.as_slice());
        }
    }
}
