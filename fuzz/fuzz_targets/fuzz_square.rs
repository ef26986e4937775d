#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let bytes: [u8; 8] = data[..8].try_into().unwrap();

    // Squaring should never panic for any integer or float bit pattern.
    let as_int = i64::from_le_bytes(bytes);
    let _ = squarely::square(as_int);
    let _ = squarely::checked_square(as_int);

    let as_float = f64::from_le_bytes(bytes);
    let _ = squarely::square(as_float);
    let _ = squarely::checked_square(as_float);
});
