//! Conversion from JSON schema types to IR ops.

use crate::error::EncodeError;
use crate::ir::{Op, Program};
use crate::protocol::text::{Alignment, MAX_SIZE_MULT};

use super::schema::*;

impl PrintRequest {
    /// Convert this request's operations to an IR program.
    pub fn to_program(&self) -> Result<Program, EncodeError> {
        to_program(&self.operations)
    }
}

/// Build a program from an operation list: `Init`, then one op per operation.
///
/// The first malformed operand aborts the conversion.
pub fn to_program(operations: &[Operation]) -> Result<Program, EncodeError> {
    let mut program = Program::with_init();
    for operation in operations {
        program.push(operation.to_op()?);
    }
    Ok(program)
}

impl Operation {
    /// Parse this operation into a typed op.
    ///
    /// Unknown action tags become [`Op::Unrecognized`] rather than an error.
    /// `fullCut` and `enter` ignore their operand.
    pub fn to_op(&self) -> Result<Op, EncodeError> {
        let data = self.data.as_str();
        let op = match self.action.as_str() {
            "fontSize" => {
                let (width, height) = parse_font_size(data)?;
                Op::FontSize { width, height }
            }
            "alignment" => Op::Align(Alignment::from_code(data)),
            "text" => Op::Text(self.data.clone()),
            "boldText" => Op::Bold(parse_byte("boldText", data)?),
            "feed" => Op::Feed(parse_byte("feed", data)?),
            "fullCut" => Op::FullCut,
            "enter" => Op::Enter,
            other => Op::Unrecognized(other.to_string()),
        };
        Ok(op)
    }
}

/// Parse a `"W,H"` operand into width/height multipliers in `1..=16`.
fn parse_font_size(data: &str) -> Result<(u8, u8), EncodeError> {
    let mut parts = data.split(',');
    let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(EncodeError::malformed(
            "fontSize",
            data,
            "expected two comma-separated integers",
        ));
    };
    Ok((parse_size_mult(data, w)?, parse_size_mult(data, h)?))
}

fn parse_size_mult(data: &str, part: &str) -> Result<u8, EncodeError> {
    let value: u32 = part
        .parse()
        .map_err(|e| EncodeError::malformed("fontSize", data, format!("{:?}: {}", part, e)))?;
    if value == 0 || value > MAX_SIZE_MULT as u32 {
        return Err(EncodeError::malformed(
            "fontSize",
            data,
            format!("{} is outside 1..={}", value, MAX_SIZE_MULT),
        ));
    }
    Ok(value as u8)
}

/// Parse an operand that must fit a single parameter byte.
fn parse_byte(action: &'static str, data: &str) -> Result<u8, EncodeError> {
    let value: i64 = data
        .parse()
        .map_err(|e| EncodeError::malformed(action, data, format!("{}", e)))?;
    u8::try_from(value)
        .map_err(|_| EncodeError::malformed(action, data, format!("{} is outside 0..=255", value)))
}
