//! Encoding orchestration.
//!
//! The encoder validates the model and builds every spaced station before
//! touching the destination, then writes the file in a single pass: header,
//! domain sizes, interference blocks, connection blocks, each family in input
//! order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use freqalloc_config::{EncoderConfig, MaxDomainSizePolicy, DEFAULT_PROBLEM_NAME};
use freqalloc_core::{
    build_spaced_stations, ensure_non_empty_domains, FrequencyModel, Result, SpacedStation,
};
use tracing::{debug, info, trace};

use crate::connection::connection_cost_function;
use crate::format::{write_domain_sizes, CostFunction, WcspHeader};
use crate::header::compute_header;
use crate::interference::interference_cost_function;

/// Outcome of a successful encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeSummary {
    pub header: WcspHeader,
    /// Domain size of every station, in station order.
    pub domain_sizes: Vec<usize>,
    /// Allowed tuples written over all interference blocks.
    pub interference_tuples: usize,
    /// Allowed tuples written over all connection blocks.
    pub connection_tuples: usize,
}

impl EncodeSummary {
    pub fn total_tuples(&self) -> usize {
        self.interference_tuples + self.connection_tuples
    }
}

/// Writes the WCSP encoding of a model.
#[derive(Debug, Clone)]
pub struct WcspEncoder<'a> {
    model: &'a FrequencyModel,
    problem_name: String,
    max_domain_size: MaxDomainSizePolicy,
}

impl<'a> WcspEncoder<'a> {
    /// Creates an encoder with the default problem name and header policy.
    pub fn new(model: &'a FrequencyModel) -> Self {
        Self {
            model,
            problem_name: DEFAULT_PROBLEM_NAME.to_string(),
            max_domain_size: MaxDomainSizePolicy::default(),
        }
    }

    /// Creates an encoder using the problem name and header policy of `config`.
    pub fn with_config(model: &'a FrequencyModel, config: &EncoderConfig) -> Self {
        Self {
            model,
            problem_name: config.problem_name.clone(),
            max_domain_size: config.max_domain_size,
        }
    }

    pub fn with_problem_name(mut self, name: impl Into<String>) -> Self {
        self.problem_name = name.into();
        self
    }

    pub fn with_max_domain_size(mut self, policy: MaxDomainSizePolicy) -> Self {
        self.max_domain_size = policy;
        self
    }

    /// Validates the model and builds its spaced stations.
    ///
    /// # Errors
    ///
    /// [`FreqAllocError::InvalidModel`](freqalloc_core::FreqAllocError::InvalidModel)
    /// if the model is malformed or a station has an empty domain.
    pub fn prepare(&self) -> Result<Vec<SpacedStation>> {
        self.model.validate()?;

        let spaced = build_spaced_stations(&self.model.stations);
        ensure_non_empty_domains(&self.model.stations, &spaced)?;

        debug!(
            event = "spaced_stations",
            station_count = spaced.len(),
            total_tuples = spaced.iter().map(SpacedStation::tuple_count).sum::<usize>(),
            max_tuples = spaced.iter().map(SpacedStation::tuple_count).max().unwrap_or(0),
        );

        Ok(spaced)
    }

    /// Encodes the model into `out`.
    ///
    /// Nothing is written if the model is rejected.
    pub fn encode<W: Write>(&self, out: W) -> Result<EncodeSummary> {
        let spaced = self.prepare()?;
        self.write_prepared(&spaced, out)
    }

    /// Encodes the model into a new file at `path`.
    ///
    /// The file is only created once the model is known to be valid. A file
    /// left incomplete by a write failure is removed.
    pub fn encode_to_path(&self, path: impl AsRef<Path>) -> Result<EncodeSummary> {
        let path = path.as_ref();
        let spaced = self.prepare()?;

        let file = File::create(path)?;
        match self.write_prepared(&spaced, BufWriter::new(file)) {
            Ok(summary) => {
                info!(path = %path.display(), "Encoding written");
                Ok(summary)
            }
            Err(e) => {
                let _ = std::fs::remove_file(path);
                Err(e)
            }
        }
    }

    /// Encodes the model into a string.
    pub fn encode_to_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.encode(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    fn write_prepared<W: Write>(&self, spaced: &[SpacedStation], mut out: W) -> Result<EncodeSummary> {
        let started = Instant::now();
        let model = self.model;

        info!(
            event = "encode_start",
            station_count = model.station_count(),
            interference_count = model.interferences.len(),
            connection_count = model.connections.len(),
        );

        let header = compute_header(&self.problem_name, model, spaced, self.max_domain_size);
        header.write_to(&mut out)?;
        write_domain_sizes(&mut out, spaced)?;

        let mut interference_tuples = 0;
        for interference in &model.interferences {
            let cost_function = interference_cost_function(interference, spaced);
            interference_tuples += write_cost_function(&cost_function, &mut out)?;
        }

        let mut connection_tuples = 0;
        for connection in &model.connections {
            let cost_function = connection_cost_function(connection, spaced);
            connection_tuples += write_cost_function(&cost_function, &mut out)?;
        }

        out.flush()?;

        let summary = EncodeSummary {
            header,
            domain_sizes: spaced.iter().map(SpacedStation::tuple_count).collect(),
            interference_tuples,
            connection_tuples,
        };

        info!(
            event = "encode_end",
            variable_count = summary.header.variable_count,
            cost_function_count = summary.header.cost_function_count,
            tuples = summary.total_tuples(),
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Ok(summary)
    }
}

fn write_cost_function<W: Write>(cost_function: &CostFunction, out: &mut W) -> io::Result<usize> {
    trace!(
        event = "cost_function",
        kind = cost_function.kind.as_str(),
        x = cost_function.x,
        y = cost_function.y,
        tuples = cost_function.tuple_count(),
    );
    cost_function.write_to(out)?;
    Ok(cost_function.tuple_count())
}
