//! # Ticketera - ESC/POS Receipt Printing Service
//!
//! Ticketera turns a JSON list of print operations into the byte stream an
//! ESC/POS thermal receipt printer understands, and writes it to the printer.
//! It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders and code page 850 text
//! - **IR + codegen**: typed operations compiled into one contiguous job
//! - **Transport**: atomic delivery of jobs to printer device files
//! - **Server**: HTTP endpoint accepting print requests
//!
//! ## Quick Start
//!
//! ```no_run
//! use ticketera::{
//!     ir::Encoder,
//!     job::Job,
//!     json_api::{Operation, PrintRequest},
//!     transport::{Delivery, DeviceDelivery},
//! };
//!
//! let request = PrintRequest {
//!     operations: vec![
//!         Operation::new("fontSize", "2,2"),
//!         Operation::new("alignment", "C"),
//!         Operation::new("text", "Hola"),
//!         Operation::new("enter", ""),
//!         Operation::new("fullCut", ""),
//!     ],
//!     printer: "/dev/usb/lp0".to_string(),
//! };
//!
//! let job = Job::compile(&request, &Encoder::default())?;
//! DeviceDelivery::new().deliver(&job.printer, &job.bytes)?;
//!
//! # Ok::<(), ticketera::error::TicketeraError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders, code page 850 |
//! | [`ir`] | Typed ops and the encoder |
//! | [`json_api`] | Request schema and operand parsing |
//! | [`job`] | Compiled jobs |
//! | [`transport`] | Delivery backends |
//! | [`server`] | HTTP server |
//! | [`error`] | Error types |

pub mod error;
pub mod ir;
pub mod job;
pub mod json_api;
pub mod protocol;
pub mod server;
pub mod transport;

// Re-exports for convenience
pub use error::{EncodeError, TicketeraError};
pub use job::Job;
