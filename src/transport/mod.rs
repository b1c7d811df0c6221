//! # Printer Transport Layer
//!
//! Delivery of compiled jobs to printers.
//!
//! ## Available Transports
//!
//! - [`device`]: device files such as `/dev/usb/lp0` or a bound serial port
//!
//! Implementations must write the job unmodified and in one piece: a short
//! write is a failure, and two jobs to the same destination must not
//! interleave.

pub mod device;

pub use device::{DeviceDelivery, DeviceTransport};

use crate::error::TicketeraError;

/// Sends a compiled job to a named printer.
///
/// Delivery is blocking; async callers run it on a blocking thread.
pub trait Delivery: Send + Sync {
    fn deliver(&self, printer: &str, job: &[u8]) -> Result<(), TicketeraError>;
}
