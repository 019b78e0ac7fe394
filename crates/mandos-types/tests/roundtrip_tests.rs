//! Round-trip tests for the ordered fixture loader and writer.
//!
//! A fixture document in the canonical layout must come back byte-for-byte
//! after `load` → `write`, with map keys and list items in their original
//! order.

use mandos_types::json::{load, load_slice, write};
use mandos_types::OrderedValue;

// ─────────────────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────────────────

const SCENARIO: &str = r#"{
    "name": "adder",
    "gasSchedule": "dummy",
    "steps": [
        {
            "step": "setState",
            "accounts": {
                "address:owner": {
                    "nonce": "1",
                    "balance": "0",
                    "storage": {}
                },
                "address:adder": {
                    "nonce": "0",
                    "balance": "0",
                    "storage": {
                        "str:sum": "5"
                    },
                    "code": "file:adder.wasm"
                }
            }
        },
        {
            "step": "scCall",
            "txId": "1",
            "tx": {
                "from": "address:owner",
                "to": "address:adder",
                "function": "add",
                "arguments": [
                    "u32:3",
                    "i8:-1|0x00"
                ],
                "gasLimit": "5,000,000",
                "gasPrice": "0"
            },
            "expect": {
                "out": [],
                "status": "",
                "refund": "*",
                "logs": [
                    {
                        "address": "address:adder",
                        "topics": [
                            "keccak256:str:added"
                        ]
                    }
                ]
            },
            "checkOnly": true
        }
    ]
}"#;

// ─────────────────────────────────────────────────────────────────────
// Round trip
// ─────────────────────────────────────────────────────────────────────

#[test]
fn scenario_round_trips_byte_for_byte() {
    let tree = load(SCENARIO).expect("scenario should load");
    let written = write(&tree).expect("scenario should write");
    assert_eq!(written, SCENARIO);
}

#[test]
fn slice_loader_matches_str_loader() {
    let a = load(SCENARIO).unwrap();
    let b = load_slice(SCENARIO.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn writing_twice_is_stable() {
    let tree = load(SCENARIO).unwrap();
    let first = write(&tree).unwrap();
    let second = write(&load(&first).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn compact_input_is_normalized_to_canonical_layout() {
    let tree = load(r#"{"b":["1","2"],"a":{}}"#).unwrap();
    let written = write(&tree).unwrap();
    assert_eq!(
        written,
        "{\n    \"b\": [\n        \"1\",\n        \"2\"\n    ],\n    \"a\": {}\n}"
    );
}

// ─────────────────────────────────────────────────────────────────────
// Structure
// ─────────────────────────────────────────────────────────────────────

#[test]
fn nested_order_is_preserved() {
    let tree = load(SCENARIO).unwrap();
    let steps = match tree.mapping_get("steps") {
        Some(OrderedValue::Sequence(steps)) => steps,
        other => panic!("expected steps list, got {other:?}"),
    };
    assert_eq!(steps.len(), 2);
    assert_eq!(
        steps[0].mapping_get("step").and_then(OrderedValue::as_text),
        Some("setState")
    );

    let accounts = steps[0].mapping_get("accounts").unwrap();
    let names: Vec<_> = match accounts {
        OrderedValue::Mapping(pairs) => pairs.iter().filter_map(|(k, _)| k.as_text()).collect(),
        _ => panic!("expected accounts map"),
    };
    assert_eq!(names, vec!["address:owner", "address:adder"]);
}

#[test]
fn booleans_are_kept_as_bool_nodes() {
    let tree = load(SCENARIO).unwrap();
    let steps = match tree.mapping_get("steps") {
        Some(OrderedValue::Sequence(steps)) => steps,
        _ => panic!("expected steps list"),
    };
    assert_eq!(steps[1].mapping_get("checkOnly"), Some(&OrderedValue::Bool(true)));
}

#[test]
fn malformed_text_is_an_error() {
    assert!(load("{\"a\": ").is_err());
    assert!(load("[\"a\",]").is_err());
}
