//! Line formats of the WCSP text file.
//!
//! ```text
//! <name> <variables> <max domain size> <cost functions> <upper bound>
//! <domain size 0> <domain size 1> ...
//! 2 <x> <y> <default cost> <tuple count>
//! <i> <j> 0
//! ```

use std::fmt;
use std::io::{self, Write};

use freqalloc_core::{ConstraintKind, SpacedStation};

/// Cost of every combination a block does not list.
pub const DEFAULT_COST: u64 = 1;

/// Cost written on every listed combination.
pub const ALLOWED_COST: u64 = 0;

/// First line of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WcspHeader {
    pub problem_name: String,
    pub variable_count: usize,
    pub max_domain_size: usize,
    pub cost_function_count: usize,
    pub upper_bound: u64,
}

impl WcspHeader {
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl fmt::Display for WcspHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.problem_name,
            self.variable_count,
            self.max_domain_size,
            self.cost_function_count,
            self.upper_bound
        )
    }
}

/// Writes the domain size of every variable on one line, in station order.
pub fn write_domain_sizes<W: Write>(out: &mut W, spaced: &[SpacedStation]) -> io::Result<()> {
    for (index, station) in spaced.iter().enumerate() {
        if index > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{}", station.tuple_count())?;
    }
    out.write_all(b"\n")
}

/// A binary cost function given by its allowed tuples.
///
/// Tuples are collected before anything is written, since the block header
/// carries their count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostFunction {
    pub kind: ConstraintKind,
    pub x: usize,
    pub y: usize,
    pub default_cost: u64,
    tuples: Vec<(usize, usize)>,
}

impl CostFunction {
    /// Creates an empty function over `(x, y)`: every combination costs
    /// [`DEFAULT_COST`].
    pub fn new(kind: ConstraintKind, x: usize, y: usize) -> Self {
        Self {
            kind,
            x,
            y,
            default_cost: DEFAULT_COST,
            tuples: Vec::new(),
        }
    }

    /// Lists value `i` of `x` with value `j` of `y` at [`ALLOWED_COST`].
    pub fn allow(&mut self, i: usize, j: usize) {
        self.tuples.push((i, j));
    }

    pub fn tuples(&self) -> &[(usize, usize)] {
        &self.tuples
    }

    pub fn tuple_count(&self) -> usize {
        self.tuples.len()
    }

    /// Writes the block header followed by one line per allowed tuple.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "2 {} {} {} {}",
            self.x,
            self.y,
            self.default_cost,
            self.tuples.len()
        )?;
        for (i, j) in &self.tuples {
            writeln!(out, "{} {} {}", i, j, ALLOWED_COST)?;
        }
        Ok(())
    }
}
