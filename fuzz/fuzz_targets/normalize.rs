#![no_main]
use libfuzzer_sys::fuzz_target;
use refuri::remove_dot_segments;

fuzz_target!(|data: &str| {
    let p1 = remove_dot_segments(data);
    assert!(p1.len() <= data.len() + 1);

    // `remove_dot_segments` is idempotent.
    assert_eq!(remove_dot_segments(&p1), p1);

    // Absolute paths stay absolute.
    if data.starts_with('/') {
        assert!(p1.starts_with('/'));
    }
});
