// tests/constant_time_tests.rs
// Entry point for the timing comparisons under tests/constant_time/.
// They are statistical and machine-dependent, so they only run on request:
//     cargo test -p pqntt-tests --release -- --ignored
