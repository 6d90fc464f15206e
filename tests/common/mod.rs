// Shared snapshot fixtures for the integration tests.
#![allow(dead_code)]

use filtering_backtrace::inferior::Snapshot;
use serde_json::{json, Value};

/// bar (innermost) called from foo called from main.
pub fn three_frames_json() -> Value {
    json!({
        "blocks": [
            {
                "is_global": true,
                "symbols": [
                    { "name": "main", "is_function": true },
                    { "name": "global_count", "is_variable": true }
                ]
            },
            {
                "is_static": true,
                "superblock": 0,
                "symbols": [
                    { "name": "ns::counter", "is_variable": true },
                    { "name": "LIMIT", "is_constant": true },
                    { "name": "point", "address_class": "other" }
                ]
            },
            {
                "function": "bar",
                "superblock": 1,
                "symbols": [
                    { "name": "a", "is_argument": true },
                    { "name": "x", "is_variable": true }
                ]
            },
            {
                "superblock": 2,
                "symbols": [
                    { "name": "tmp", "is_variable": true }
                ]
            },
            {
                "function": "foo",
                "superblock": 1,
                "symbols": [
                    { "name": "n", "is_argument": true },
                    { "name": "m", "is_argument": true },
                    { "name": "counter", "linkage_name": "ns::counter", "is_variable": true }
                ]
            },
            {
                "function": "main",
                "superblock": 1,
                "symbols": [
                    { "name": "argc", "is_argument": true },
                    { "name": "argv", "is_argument": true }
                ]
            }
        ],
        "frames": [
            {
                "pc": 0x401136,
                "name": "bar",
                "function": "bar",
                "sal": { "pc": 0x401136, "filename": "main.c", "line": 7 },
                "block": 3,
                "values": {
                    "a": { "value": "1" },
                    "x": { "value": "2" },
                    "tmp": { "unreadable": 0 }
                }
            },
            {
                "pc": 0x401180,
                "name": "foo",
                "function": "foo",
                "sal": { "pc": 0x40117a, "filename": "main.c", "line": 15 },
                "block": 4,
                "values": {
                    "n": { "value": "3" },
                    "m": "optimized_out",
                    "ns::counter": { "value": "5" }
                }
            },
            {
                "pc": 0x4011c0,
                "name": "main",
                "function": "main",
                "sal": { "pc": 0x4011c0, "filename": "main.c", "line": 22 },
                "block": 5,
                "values": {
                    "argc": { "value": "1" },
                    "argv": { "value": "0x7ffc" }
                }
            }
        ]
    })
}

pub fn three_frames() -> Snapshot {
    Snapshot::from_value(three_frames_json()).expect("fixture snapshot is valid")
}

pub const BAR_LINE: &str = "#0  bar (a=1) at main.c:7\n";
pub const FOO_LINE: &str = "#1  0x00401180 in foo (n=3, m=<optimized out>) at main.c:15\n";
pub const MAIN_LINE: &str = "#2  main (argc=1, argv=0x7ffc) at main.c:22\n";

/// Signal handler and debugger-injected call frames on top of a library frame
/// with no debug info.
pub fn special_frames() -> Snapshot {
    Snapshot::from_value(json!({
        "blocks": [
            {
                "function": "handler",
                "symbols": [ { "name": "sig", "is_argument": true } ]
            }
        ],
        "solibs": [
            { "start": 0x7f0000000000u64, "end": 0x7f0000100000u64, "name": "libc.so.6" }
        ],
        "frames": [
            { "type": "sig_tramp", "pc": 0x7f0000000100u64, "block": 0,
              "values": { "sig": { "value": "11" } } },
            { "type": "dummy", "pc": 0x1000, "block": 0 },
            { "pc": 0x7f0000001234u64 },
            { "pc": 0x401000, "name": "start", "sal": { "pc": 0x401000 } }
        ]
    }))
    .expect("fixture snapshot is valid")
}

/// `n` plain frames named f0 (innermost) to f{n-1}.
pub fn numbered_frames(n: usize) -> Snapshot {
    let frames: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "pc": 0x1000 + i as u64 * 0x10,
                "name": format!("f{}", i),
                "sal": { "pc": 0x1000 + i as u64 * 0x10, "filename": "gen.c", "line": i + 1 }
            })
        })
        .collect();
    Snapshot::from_value(json!({ "frames": frames })).expect("fixture snapshot is valid")
}

pub fn render(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("output is utf-8")
}
