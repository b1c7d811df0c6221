//! # JSON API
//!
//! Deserialize print requests and turn their operations into IR ops.
//!
//! ## Example
//!
//! ```
//! use ticketera::ir::Encoder;
//! use ticketera::json_api::PrintRequest;
//!
//! let json = r#"{
//!     "operations": [
//!         {"action": "alignment", "data": "C"},
//!         {"action": "text", "data": "Hola"},
//!         {"action": "enter", "data": ""},
//!         {"action": "fullCut", "data": ""}
//!     ],
//!     "printer": "/dev/usb/lp0"
//! }"#;
//!
//! let request: PrintRequest = serde_json::from_str(json).unwrap();
//! let bytes = request.to_program().unwrap().to_bytes(&Encoder::default()).unwrap();
//! assert_eq!(bytes.last(), Some(&0x69));
//! ```

mod convert;
mod schema;

pub use convert::to_program;
pub use schema::{Operation, PrintRequest};
