//! Logging and tracing sidecar.
//!
//! - `init` - global subscriber with console and rotating file JSON sinks
//! - `file_writer` - daily rotating log file writer
//! - `apm` - direct record sender for the APM agent
//! - `segment` - named, timed span around a unit of work

pub mod apm;
pub mod file_writer;
pub mod init;
pub mod segment;

pub use apm::ApmClient;
pub use init::init_tracing;
pub use segment::segment;
