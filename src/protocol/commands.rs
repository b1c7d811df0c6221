//! # ESC/POS Printer Control Commands
//!
//! Initialization, paper feed and cutter commands.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`, `ESC i`
//! - Three bytes with one parameter: `ESC d n`, `ESC a n`, `GS ! n`
//!
//! Parameters are raw bytes; there is no framing or length prefix.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B).
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for character size and other extended commands.
/// Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Every job starts with
/// this command so no formatting leaks from a previous job.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use ticketera::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// # Full Cut (ESC i)
///
/// Cuts the paper completely at the current position.
///
/// ## Protocol Details
///
/// | Format  | Bytes  |
/// |---------|--------|
/// | ASCII   | ESC i  |
/// | Hex     | 1B 69  |
/// | Decimal | 27 105 |
///
/// Most cutters sit a few lines above the print head, so jobs usually send a
/// [`feed`] before cutting.
#[inline]
pub fn cut_full() -> Vec<u8> {
    vec![ESC, b'i']
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// # Print and Feed Lines (ESC d n)
///
/// Prints the line buffer and feeds `n` lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | ESC d n    |
/// | Hex     | 1B 64 n    |
/// | Decimal | 27 100 n   |
///
/// ## Example
///
/// ```
/// use ticketera::protocol::commands;
///
/// assert_eq!(commands::feed(3), vec![0x1B, 0x64, 0x03]);
/// ```
#[inline]
pub fn feed(lines: u8) -> Vec<u8> {
    vec![ESC, b'd', lines]
}

/// # Line Feed (LF)
///
/// Prints the line buffer and advances one line.
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}
