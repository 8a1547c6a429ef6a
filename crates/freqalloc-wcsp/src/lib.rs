//! WCSP encoding of frequency allocation problems.
//!
//! Turns a [`FrequencyModel`](freqalloc_core::FrequencyModel) into the text
//! format read by weighted constraint solvers:
//! - one variable per station, whose values index the station's valid
//!   (transmitter, receiver) pairs
//! - one binary cost function per interference, listing the pair combinations
//!   that keep every frequency far enough apart
//! - one binary cost function per connection, listing the combinations whose
//!   frequencies match in both directions
//!
//! Unlisted combinations take the block's default cost.
//!
//! Logging levels:
//! - **INFO**: Encoding start/end with problem dimensions
//! - **DEBUG**: Spaced station statistics, naming fallbacks
//! - **TRACE**: One event per cost function
//!
//! # Example
//!
//! ```
//! use freqalloc_core::{Connection, FrequencyModel, Station};
//! use freqalloc_wcsp::WcspEncoder;
//!
//! let model = FrequencyModel::new(
//!     vec![
//!         Station::new(0, 0, 5, vec![10], vec![15]),
//!         Station::new(1, 0, 5, vec![15], vec![10]),
//!     ],
//!     vec![],
//!     vec![],
//!     vec![Connection::new(0, 1)],
//! );
//!
//! let text = WcspEncoder::new(&model).encode_to_string().unwrap();
//! assert_eq!(text, "FrequencyAllocationProblem 2 2 1 2\n1 1\n2 0 1 1 1\n0 0 0\n");
//! ```

pub mod connection;
pub mod encoder;
pub mod format;
pub mod header;
pub mod interference;
pub mod naming;


pub use connection::connection_cost_function;
pub use encoder::{EncodeSummary, WcspEncoder};
pub use format::{write_domain_sizes, CostFunction, WcspHeader, ALLOWED_COST, DEFAULT_COST};
pub use header::{compute_header, max_domain_size};
pub use interference::{interference_cost_function, is_interference_free};
pub use naming::{output_file_name, resolve_output_path, resolve_work_name, DEFAULT_WORK_NAME};
