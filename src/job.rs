//! # Print Jobs
//!
//! A [`Job`] is the fully assembled byte stream for one request plus the
//! printer it is addressed to. Jobs are built completely in memory before
//! anything is sent, so an encoding failure never reaches the printer.

use crate::error::EncodeError;
use crate::ir::Encoder;
use crate::json_api::PrintRequest;

/// One compiled print job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Destination printer identifier, passed through to delivery.
    pub printer: String,
    /// ESC/POS bytes, starting with the init command.
    pub bytes: Vec<u8>,
}

impl Job {
    /// Compile a request into a job.
    ///
    /// Output is a pure function of the request's operations: compiling the
    /// same request twice yields identical bytes.
    pub fn compile(request: &PrintRequest, encoder: &Encoder) -> Result<Self, EncodeError> {
        let program = request.to_program()?;
        let bytes = program.to_bytes(encoder)?;
        Ok(Self {
            printer: request.printer.clone(),
            bytes,
        })
    }
}
