//! # pscout: a concurrent TCP port scanner.
//!
//! This library probes a target host for open TCP ports, either over a
//! numeric range or the curated popular-ports list, and reports each open
//! port with a best-effort service label.
//!
//! ## Features
//!
//! - **Concurrent probing**: one asynchronous probe per candidate port, with
//!   an optional cap on simultaneously in-flight probes
//! - **Timeout and retry budget**: each probe is bounded by a connect timeout
//!   and a fixed-backoff retry count
//! - **Popular-ports mode**: a fixed curated list of well known service ports
//!   as an alternative to a numeric range
//! - **Service labels**: open ports are annotated from a static port to
//!   service table at the reporting boundary
//!
//! ## Example
//!
//! ```rust,no_run
//! use pscout::{ScanTarget, Scanner};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let target = ScanTarget {
//!         host: "192.168.1.1".to_string(),
//!         timeout: Duration::from_millis(200),
//!         retries: 1,
//!     };
//!
//!     let scanner = Scanner::new(target);
//!     let open_ports = scanner.scan_range(1, 1024).await;
//!
//!     for port in open_ports {
//!         println!("Port {} is open", port);
//!     }
//! }
//! ```
pub mod cli;
pub mod error;
pub mod output;
pub mod ports;
pub mod scanner;
pub mod services;

/// Command line interface for pscout
pub use cli::Cli;
pub use error::PscoutError;
/// Reporting layer types
pub use output::{OpenPort, ScanReport};
/// Port collections
pub use ports::{POPULAR_PORTS, PortSet};
/// Core scanner functionality
pub use scanner::{ScanTarget, Scanner};
pub use services::service_label;
