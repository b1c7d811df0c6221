//! # ESC/POS Text Styling Commands
//!
//! Alignment, emphasis and character size.
//!
//! | Style | Command | Parameter |
//! |-------|---------|-----------|
//! | Alignment | ESC a n | 0 left, 1 center, 2 right |
//! | Bold | ESC E n | raw byte, 0 = off |
//! | Character size | GS ! n | width nibble, height nibble |

use super::commands::{ESC, GS};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Alignment {
    /// Parse the single-letter alignment code used in print requests.
    ///
    /// `"C"` and `"R"` select center and right; every other value, including
    /// an empty string or lower-case letters, selects left.
    pub fn from_code(code: &str) -> Self {
        match code {
            "C" => Alignment::Center,
            "R" => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}

/// # Select Justification (ESC a n)
///
/// Sets the alignment for subsequent lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Example
///
/// ```
/// use ticketera::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// EMPHASIS
// ============================================================================

/// # Turn Emphasized Mode On/Off (ESC E n)
///
/// The printer only looks at the least significant bit, so `0`/`1` are the
/// conventional values, but any byte is passed through untouched.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E n |
/// | Hex     | 1B 45 n |
/// | Decimal | 27 69 n |
pub fn bold(n: u8) -> Vec<u8> {
    vec![ESC, b'E', n]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Largest width or height multiplier `GS !` can express.
pub const MAX_SIZE_MULT: u8 = 16;

/// # Select Character Size (GS ! n)
///
/// `width` and `height` are multipliers (1 = normal, 2 = double, ...). The
/// parameter byte stores `width - 1` in the high nibble and `height - 1` in
/// the low nibble.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS ! n |
/// | Hex     | 1D 21 n |
/// | Decimal | 29 33 n |
///
/// ## Example
///
/// ```
/// use ticketera::protocol::text::size;
///
/// assert_eq!(size(1, 1), vec![0x1D, 0x21, 0x00]);
/// assert_eq!(size(2, 3), vec![0x1D, 0x21, 0x12]);
/// ```
///
/// Both multipliers must be in `1..=MAX_SIZE_MULT`; operand parsing rejects
/// anything else before it gets here. Debug builds panic on out-of-range
/// values.
pub fn size(width: u8, height: u8) -> Vec<u8> {
    debug_assert!(
        (1..=MAX_SIZE_MULT).contains(&width) && (1..=MAX_SIZE_MULT).contains(&height),
        "size multipliers out of range: {}x{}",
        width,
        height
    );
    let w = width.wrapping_sub(1) & 0x0F;
    let h = height.wrapping_sub(1) & 0x0F;
    vec![GS, b'!', (w << 4) | h]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(align(Alignment::Left), vec![0x1B, 0x61, 0x00]);
        assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
        assert_eq!(align(Alignment::Right), vec![0x1B, 0x61, 0x02]);
    }

    #[test]
    fn test_alignment_from_code() {
        assert_eq!(Alignment::from_code("L"), Alignment::Left);
        assert_eq!(Alignment::from_code("C"), Alignment::Center);
        assert_eq!(Alignment::from_code("R"), Alignment::Right);
        assert_eq!(Alignment::from_code("X"), Alignment::Left);
        assert_eq!(Alignment::from_code("c"), Alignment::Left);
        assert_eq!(Alignment::from_code(""), Alignment::Left);
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold(1), vec![0x1B, 0x45, 0x01]);
        assert_eq!(bold(0), vec![0x1B, 0x45, 0x00]);
        assert_eq!(bold(7), vec![0x1B, 0x45, 0x07]);
    }

    #[test]
    fn test_size() {
        assert_eq!(size(1, 1), vec![0x1D, 0x21, 0x00]);
        assert_eq!(size(2, 2), vec![0x1D, 0x21, 0x11]);
        assert_eq!(size(2, 3), vec![0x1D, 0x21, 0x12]);
        assert_eq!(size(16, 16), vec![0x1D, 0x21, 0xFF]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_size_zero_multiplier_panics() {
        size(0, 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_size_oversized_multiplier_panics() {
        size(1, 17);
    }
}
