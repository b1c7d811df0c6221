//! # Code Generation
//!
//! Converts IR programs to ESC/POS bytes.

use tracing::info;

use super::ops::{Op, Program};
use crate::error::EncodeError;
use crate::protocol::{commands, cp850, text};

/// Encoder settings, fixed at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Emit one `info` trace event per encoded op.
    pub trace_operations: bool,
}

/// Stateless op-to-bytes encoder.
///
/// Holds only its configuration, so one instance can be shared between any
/// number of concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode a single op.
    ///
    /// Unrecognized ops encode to an empty sequence. Only text can fail here;
    /// numeric operands were validated when the op was built.
    pub fn encode_op(&self, op: &Op) -> Result<Vec<u8>, EncodeError> {
        let bytes = match op {
            // ===== Printer Control =====
            Op::Init => commands::init(),
            Op::FullCut => {
                self.trace(op, "");
                commands::cut_full()
            }
            Op::Feed(lines) => {
                self.trace(op, &format!("lines={}", lines));
                commands::feed(*lines)
            }
            Op::Enter => commands::line_feed(),

            // ===== Style Changes =====
            Op::FontSize { width, height } => {
                self.trace(op, &format!("width={} height={}", width, height));
                text::size(*width, *height)
            }
            Op::Align(alignment) => {
                self.trace(op, &format!("{:?}", alignment));
                text::align(*alignment)
            }
            Op::Bold(n) => {
                self.trace(op, &format!("value={}", n));
                text::bold(*n)
            }

            // ===== Content =====
            Op::Text(s) => {
                let bytes = cp850::encode(s)?;
                self.trace(op, s);
                bytes
            }
            Op::Unrecognized(_) => {
                self.trace(op, "ignored");
                Vec::new()
            }
        };
        Ok(bytes)
    }

    fn trace(&self, op: &Op, params: &str) {
        if self.config.trace_operations {
            info!(op = op.name(), params, "encoded operation");
        }
    }
}

impl Program {
    /// Compile the IR program to ESC/POS bytes.
    ///
    /// The first failing op aborts compilation; no partial output is returned.
    pub fn to_bytes(&self, encoder: &Encoder) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        for op in &self.ops {
            out.extend(encoder.encode_op(op)?);
        }
        Ok(out)
    }
}
