#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the case-file parsing entry point.
///
/// Feeds arbitrary UTF-8 strings to `parse_case_str`, which enforces the
/// closed module schema and scalar field values. Parsing must never panic —
/// malformed input is always a structured error.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = mar_tools::parsers::parse_case_str(s);
    }
});
