//! Header computation.

use freqalloc_config::MaxDomainSizePolicy;
use freqalloc_core::{FrequencyModel, SpacedStation};

use crate::format::WcspHeader;

/// Computes the header line of the encoding of `model`.
///
/// The upper bound is one more than the number of cost functions: every
/// violated function costs one, so any assignment satisfying all of them is
/// strictly better than one violating any.
pub fn compute_header(
    problem_name: &str,
    model: &FrequencyModel,
    spaced: &[SpacedStation],
    policy: MaxDomainSizePolicy,
) -> WcspHeader {
    let cost_function_count = model.cost_function_count();

    WcspHeader {
        problem_name: problem_name.to_string(),
        variable_count: model.station_count(),
        max_domain_size: max_domain_size(model, spaced, policy),
        cost_function_count,
        upper_bound: cost_function_count as u64 + 1,
    }
}

/// Maximum domain size under `policy`.
///
/// [`MaxDomainSizePolicy::Original`] looks at the unfiltered frequency lists
/// and may be smaller than some written domain size.
pub fn max_domain_size(
    model: &FrequencyModel,
    spaced: &[SpacedStation],
    policy: MaxDomainSizePolicy,
) -> usize {
    match policy {
        MaxDomainSizePolicy::Original => model
            .stations
            .iter()
            .map(|s| 2 * s.transmitters.len().max(s.receivers.len()))
            .max()
            .unwrap_or(0),
        MaxDomainSizePolicy::TupleCount => spaced
            .iter()
            .map(SpacedStation::tuple_count)
            .max()
            .unwrap_or(0),
    }
}
