//! # IR Opcodes
//!
//! The typed form of a print request. Every operation in a request becomes
//! exactly one [`Op`]; the set of variants is closed, so the encoder has to
//! handle all of them.
//!
//! ```text
//! JSON operations → Vec<Op> (Program) → Encoder → Bytes
//! ```

use crate::protocol::text::Alignment;

/// IR opcodes - one per print operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    // ========== Printer Control ==========
    /// Initialize printer (ESC @). Always the first op of a job.
    Init,

    /// Full paper cut.
    FullCut,

    /// Print and feed `lines` lines.
    Feed(u8),

    /// Line feed.
    Enter,

    // ========== Style Changes ==========
    /// Character size multipliers, both in `1..=16`.
    FontSize { width: u8, height: u8 },

    /// Set text alignment.
    Align(Alignment),

    /// Emphasis byte (conventionally 0 or 1).
    Bold(u8),

    // ========== Content ==========
    /// Text, encoded to code page 850 at codegen time.
    Text(String),

    /// An action tag this service does not know. Encodes to nothing.
    Unrecognized(String),
}

impl Op {
    /// Name used in diagnostic traces.
    pub fn name(&self) -> &str {
        match self {
            Op::Init => "init",
            Op::FullCut => "fullCut",
            Op::Feed(_) => "feed",
            Op::Enter => "enter",
            Op::FontSize { .. } => "fontSize",
            Op::Align(_) => "alignment",
            Op::Bold(_) => "boldText",
            Op::Text(_) => "text",
            Op::Unrecognized(action) => action.as_str(),
        }
    }
}

/// A compiled IR program.
///
/// Contains the ops of one job, in print order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Create a program with an initial Init op.
    pub fn with_init() -> Self {
        Self {
            ops: vec![Op::Init],
        }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Add multiple ops to the program.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over ops.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_new() {
        let program = Program::new();
        assert!(program.is_empty());
    }

    #[test]
    fn test_program_with_init() {
        let program = Program::with_init();
        assert_eq!(program.len(), 1);
        assert_eq!(program.ops[0], Op::Init);
    }

    #[test]
    fn test_program_push() {
        let mut program = Program::with_init();
        program.push(Op::Bold(1));
        program.push(Op::Text("Hola".into()));
        assert_eq!(program.len(), 3);
    }

    #[test]
    fn test_op_names() {
        assert_eq!(Op::FontSize { width: 1, height: 1 }.name(), "fontSize");
        assert_eq!(Op::Align(Alignment::Right).name(), "alignment");
        assert_eq!(Op::Unrecognized("beep".into()).name(), "beep");
    }
}
