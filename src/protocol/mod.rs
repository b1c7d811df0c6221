//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for ESC/POS receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Printer control (init, feed, cut, line feed)
//! - [`text`]: Text styling (alignment, bold, character size)
//! - [`cp850`]: Unicode to code page 850 text encoding
//!
//! ## Usage Example
//!
//! ```
//! use ticketera::protocol::{commands, cp850, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(text::Alignment::Center));
//! data.extend(text::bold(1));
//! data.extend(cp850::encode("RECIBO").unwrap());
//! data.extend(commands::line_feed());
//! data.extend(commands::feed(3));
//! data.extend(commands::cut_full());
//! ```

pub mod commands;
pub mod cp850;
pub mod text;
