//! # Job Compilation Tests
//!
//! Byte-exact checks of compiled jobs, from single commands up to a full
//! receipt delivered through a recording backend.

use pretty_assertions::assert_eq;
use std::sync::Mutex;

use ticketera::error::{EncodeError, TicketeraError};
use ticketera::ir::{Encoder, EncoderConfig};
use ticketera::job::Job;
use ticketera::json_api::{Operation, PrintRequest};
use ticketera::protocol::cp850;
use ticketera::transport::Delivery;

const INIT: [u8; 2] = [0x1B, 0x40];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn request(ops: &[(&str, &str)]) -> PrintRequest {
    PrintRequest {
        operations: ops.iter().map(|(a, d)| Operation::new(*a, *d)).collect(),
        printer: "dev1".to_string(),
    }
}

fn compile(ops: &[(&str, &str)]) -> Result<Vec<u8>, EncodeError> {
    Job::compile(&request(ops), &Encoder::default()).map(|job| job.bytes)
}

/// Bytes produced by a single operation, without the leading init.
fn single(action: &str, data: &str) -> Vec<u8> {
    let bytes = compile(&[(action, data)]).unwrap();
    assert_eq!(&bytes[..2], &INIT);
    bytes[2..].to_vec()
}

/// Records every delivery call.
#[derive(Default)]
struct RecordingDelivery {
    writes: Mutex<Vec<(String, Vec<u8>)>>,
}

impl Delivery for RecordingDelivery {
    fn deliver(&self, printer: &str, job: &[u8]) -> Result<(), TicketeraError> {
        self.writes
            .lock()
            .unwrap()
            .push((printer.to_string(), job.to_vec()));
        Ok(())
    }
}

/// Compile then deliver, the way the server does.
fn print(request: &PrintRequest, delivery: &dyn Delivery) -> Result<(), TicketeraError> {
    let job = Job::compile(request, &Encoder::default())?;
    delivery.deliver(&job.printer, &job.bytes)
}

// ============================================================================
// JOB STRUCTURE
// ============================================================================

#[test]
fn test_empty_list_is_just_init() {
    assert_eq!(compile(&[]).unwrap(), INIT.to_vec());
}

#[test]
fn test_job_always_starts_with_init() {
    let lists: &[&[(&str, &str)]] = &[
        &[("fullCut", "")],
        &[("text", "hola"), ("enter", "")],
        &[("unknownAction", "")],
        &[("alignment", "R"), ("boldText", "1"), ("feed", "5")],
    ];
    for ops in lists {
        let bytes = compile(ops).unwrap();
        assert_eq!(&bytes[..2], &INIT, "{:?}", ops);
    }
}

#[test]
fn test_init_emitted_once() {
    let bytes = compile(&[("enter", ""), ("enter", "")]).unwrap();
    assert_eq!(bytes, vec![0x1B, 0x40, 0x0A, 0x0A]);
}

#[test]
fn test_compilation_is_deterministic() {
    let ops = [
        ("fontSize", "3,1"),
        ("text", "Señor Peñalver"),
        ("boldText", "1"),
        ("feed", "2"),
        ("fullCut", ""),
    ];
    assert_eq!(compile(&ops).unwrap(), compile(&ops).unwrap());
}

#[test]
fn test_tracing_does_not_change_output() {
    let req = request(&[("fontSize", "2,2"), ("text", "Ñandú"), ("bogus", "")]);
    let quiet = Job::compile(&req, &Encoder::default()).unwrap();
    let loud = Job::compile(
        &req,
        &Encoder::new(EncoderConfig {
            trace_operations: true,
        }),
    )
    .unwrap();
    assert_eq!(quiet, loud);
}

#[test]
fn test_order_sensitivity() {
    let lc = compile(&[("alignment", "L"), ("alignment", "C")]).unwrap();
    let cl = compile(&[("alignment", "C"), ("alignment", "L")]).unwrap();
    assert_eq!(lc, vec![0x1B, 0x40, 0x1B, 0x61, 0x00, 0x1B, 0x61, 0x01]);
    assert_eq!(cl, vec![0x1B, 0x40, 0x1B, 0x61, 0x01, 0x1B, 0x61, 0x00]);
}

#[test]
fn test_redundant_state_changes_are_kept() {
    let bytes = compile(&[("boldText", "1"), ("boldText", "1")]).unwrap();
    assert_eq!(bytes, vec![0x1B, 0x40, 0x1B, 0x45, 0x01, 0x1B, 0x45, 0x01]);
}

// ============================================================================
// SINGLE COMMANDS
// ============================================================================

#[test]
fn test_font_size() {
    assert_eq!(single("fontSize", "1,1"), vec![0x1D, 0x21, 0x00]);
    assert_eq!(single("fontSize", "2,3"), vec![0x1D, 0x21, 0x12]);
    assert_eq!(single("fontSize", "2,2"), vec![0x1D, 0x21, 0x11]);
}

#[test]
fn test_alignment() {
    assert_eq!(single("alignment", "L"), vec![0x1B, 0x61, 0x00]);
    assert_eq!(single("alignment", "C"), vec![0x1B, 0x61, 0x01]);
    assert_eq!(single("alignment", "R"), vec![0x1B, 0x61, 0x02]);
    assert_eq!(single("alignment", "X"), vec![0x1B, 0x61, 0x00]);
}

#[test]
fn test_bold() {
    assert_eq!(single("boldText", "1"), vec![0x1B, 0x45, 0x01]);
    assert_eq!(single("boldText", "0"), vec![0x1B, 0x45, 0x00]);
}

#[test]
fn test_feed() {
    assert_eq!(single("feed", "3"), vec![0x1B, 0x64, 0x03]);
}

#[test]
fn test_constant_commands() {
    assert_eq!(single("fullCut", ""), vec![0x1B, 0x69]);
    assert_eq!(single("enter", ""), vec![0x0A]);
}

#[test]
fn test_text_round_trip() {
    let bytes = single("text", "Ñandú");
    assert_eq!(bytes, vec![0xA5, b'a', b'n', b'd', 0xA3]);
    assert_eq!(cp850::decode(&bytes), "Ñandú");
}

#[test]
fn test_unknown_action_contributes_nothing() {
    assert!(single("unknownAction", "anything").is_empty());
    let bytes = compile(&[("text", "a"), ("unknownAction", ""), ("text", "b")]).unwrap();
    assert_eq!(bytes, vec![0x1B, 0x40, b'a', b'b']);
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_malformed_font_size_aborts_job() {
    let err = compile(&[("text", "before"), ("fontSize", "big,small"), ("fullCut", "")])
        .unwrap_err();
    assert!(matches!(
        err,
        EncodeError::MalformedOperand {
            action: "fontSize",
            ..
        }
    ));
}

#[test]
fn test_out_of_range_operands_are_malformed() {
    for (action, data) in [
        ("fontSize", "0,1"),
        ("fontSize", "17,1"),
        ("feed", "256"),
        ("boldText", "-1"),
    ] {
        assert!(
            matches!(
                compile(&[(action, data)]),
                Err(EncodeError::MalformedOperand { .. })
            ),
            "{} {:?}",
            action,
            data
        );
    }
}

#[test]
fn test_unsupported_character_aborts_job() {
    let err = compile(&[("text", "Total"), ("text", "5 €"), ("fullCut", "")]).unwrap_err();
    assert_eq!(
        err,
        EncodeError::UnsupportedCharacter {
            character: '€',
            position: 2,
        }
    );
}

#[test]
fn test_failed_job_is_never_delivered() {
    let delivery = RecordingDelivery::default();
    let req = request(&[("text", "ok"), ("feed", "many")]);

    let err = print(&req, &delivery).unwrap_err();

    assert!(matches!(err, TicketeraError::Encode(_)));
    assert!(delivery.writes.lock().unwrap().is_empty());
}

// ============================================================================
// END TO END
// ============================================================================

#[test]
fn test_end_to_end_receipt() {
    let delivery = RecordingDelivery::default();
    let req = request(&[
        ("fontSize", "2,2"),
        ("alignment", "C"),
        ("text", "Hola"),
        ("enter", ""),
        ("fullCut", ""),
    ]);

    print(&req, &delivery).unwrap();

    let writes = delivery.writes.lock().unwrap();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, "dev1");
    assert_eq!(
        writes[0].1,
        vec![
            0x1B, 0x40, 0x1D, 0x21, 0x11, 0x1B, 0x61, 0x01, 0x48, 0x6F, 0x6C, 0x61, 0x0A, 0x1B,
            0x69
        ]
    );
}

#[test]
fn test_end_to_end_from_json() {
    let json = r#"{
        "Operations": [
            {"Action": "fontSize", "Data": "2,2"},
            {"Action": "alignment", "Data": "C"},
            {"Action": "text", "Data": "Hola"},
            {"Action": "enter", "Data": ""},
            {"Action": "fullCut", "Data": ""}
        ],
        "Printer": "dev1"
    }"#;
    let req: PrintRequest = serde_json::from_str(json).unwrap();
    let job = Job::compile(&req, &Encoder::default()).unwrap();
    assert_eq!(job.printer, "dev1");
    assert_eq!(
        job.bytes,
        compile(&[
            ("fontSize", "2,2"),
            ("alignment", "C"),
            ("text", "Hola"),
            ("enter", ""),
            ("fullCut", ""),
        ])
        .unwrap()
    );
}
