#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the pairwise-matrix parsing entry point.
///
/// Exercises JSON deserialization into the fixed 5×5 shape plus the
/// reciprocity/positivity validation that guards the AHP preconditions.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = mar_tools::parsers::parse_matrix_str(s);
    }
});
