//! # Intermediate Representation (IR)
//!
//! The IR sits between the JSON operation list and raw ESC/POS bytes.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────┐
//! │ Operations  │ ──► │     IR      │ ──► │ Codegen  │
//! │   (JSON)    │     │  (Vec<Op>)  │     │ (bytes)  │
//! └─────────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! Parsing operands into typed ops happens once, up front, so malformed
//! requests are rejected before any byte is produced.
//!
//! ## Example
//!
//! ```
//! use ticketera::ir::{Encoder, Op, Program};
//! use ticketera::protocol::text::Alignment;
//!
//! let mut program = Program::with_init();
//! program.push(Op::Align(Alignment::Center));
//! program.push(Op::Bold(1));
//! program.push(Op::Text("HOLA".into()));
//! program.push(Op::Enter);
//! program.push(Op::FullCut);
//!
//! let bytes = program.to_bytes(&Encoder::default()).unwrap();
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! ```

mod codegen;
mod ops;

pub use codegen::{Encoder, EncoderConfig};
pub use ops::*;
