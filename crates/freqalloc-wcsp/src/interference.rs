//! Interference cost functions.
//!
//! Two interfering stations must keep all four of their frequencies at least
//! the interference gap apart. A combination of pair `i` of `x` and pair `j`
//! of `y` is listed iff the four cross distances all reach the gap.

use freqalloc_core::{ConstraintKind, Frequency, Interference, SpacedStation};

use crate::format::CostFunction;

/// Returns whether pair `i` of `sx` and pair `j` of `sy` are at least `gap`
/// apart on every transmitter/receiver combination.
#[inline]
pub fn is_interference_free(
    sx: &SpacedStation,
    i: usize,
    sy: &SpacedStation,
    j: usize,
    gap: Frequency,
) -> bool {
    // Every distance is at least a negative gap.
    let Ok(gap) = u64::try_from(gap) else {
        return true;
    };

    let (tx, rx) = (sx.transmitter(i), sx.receiver(i));
    let (ty, ry) = (sy.transmitter(j), sy.receiver(j));

    tx.abs_diff(ty) >= gap
        && tx.abs_diff(ry) >= gap
        && rx.abs_diff(ty) >= gap
        && rx.abs_diff(ry) >= gap
}

/// Builds the cost function of `interference`, enumerating pairs of `x`
/// outer and pairs of `y` inner.
///
/// `interference` must reference stations of `spaced`.
pub fn interference_cost_function(
    interference: &Interference,
    spaced: &[SpacedStation],
) -> CostFunction {
    let sx = &spaced[interference.x];
    let sy = &spaced[interference.y];
    let mut cost_function =
        CostFunction::new(ConstraintKind::Interference, interference.x, interference.y);

    for i in 0..sx.tuple_count() {
        for j in 0..sy.tuple_count() {
            if is_interference_free(sx, i, sy, j, interference.gap) {
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

    fn single_pair(t: Frequency, r: Frequency) -> SpacedStation {
        SpacedStation::from_station(&Station::new(0, 0, (t - r).abs(), vec![t], vec![r]))
    }

    #[test]
    fn test_one_close_frequency_forbids_the_combination() {
        let spaced = [single_pair(10, 15), single_pair(14, 20)];
        let cf = interference_cost_function(&Interference::new(0, 1, 3), &spaced);

        // |15 - 14| = 1 < 3
        assert_eq!(cf.tuple_count(), 0);
        assert_eq!((cf.x, cf.y), (0, 1));
    }

    #[test]
    fn test_gap_is_inclusive() {
        let spaced = [single_pair(10, 15), single_pair(18, 23)];

        let cf = interference_cost_function(&Interference::new(0, 1, 3), &spaced);
        assert_eq!(cf.tuples(), &[(0, 0)]);

        let cf = interference_cost_function(&Interference::new(0, 1, 4), &spaced);
        assert_eq!(cf.tuple_count(), 0);
    }

    #[test]
    fn test_zero_gap_allows_everything() {
        let stations = vec![
            Station::new(0, 0, 5, vec![10, 20], vec![15, 25]),
            Station::new(1, 0, 5, vec![10, 20], vec![15, 25]),
        ];
        let spaced = build_spaced_stations(&stations);
        let cf = interference_cost_function(&Interference::new(0, 1, 0), &spaced);
        assert_eq!(cf.tuple_count(), 9);
    }

    #[test]
    fn test_negative_gap_allows_everything() {
        let spaced = [single_pair(10, 15), single_pair(10, 15)];
        assert!(is_interference_free(&spaced[0], 0, &spaced[1], 0, -1));
    }

    #[test]
    fn test_tuples_are_sound_complete_and_ordered() {
        let stations = vec![
            Station::new(0, 0, 3, vec![0, 10, 20, 30], vec![3, 13, 27, 33]),
            Station::new(1, 0, 2, vec![5, 15, 25], vec![3, 7, 17, 23, 27]),
        ];
        let spaced = build_spaced_stations(&stations);
        let gap = 4;
        let cf = interference_cost_function(&Interference::new(1, 0, gap), &spaced);

        let (sx, sy) = (&spaced[1], &spaced[0]);
        let mut expected = Vec::new();
        for i in 0..sx.tuple_count() {
            for j in 0..sy.tuple_count() {
                let far = [
                    (sx.transmitter(i) - sy.transmitter(j)).abs(),
                    (sx.transmitter(i) - sy.receiver(j)).abs(),
                    (sx.receiver(i) - sy.transmitter(j)).abs(),
                    (sx.receiver(i) - sy.receiver(j)).abs(),
                ]
                .iter()
                .all(|d| *d >= gap);
                if far {
                    expected.push((i, j));
                }
            }
        }

        assert!(!expected.is_empty());
        assert!(expected.len() < sx.tuple_count() * sy.tuple_count());
        assert_eq!(cf.tuples(), expected.as_slice());
        assert_eq!((cf.x, cf.y), (1, 0));
    }
}
