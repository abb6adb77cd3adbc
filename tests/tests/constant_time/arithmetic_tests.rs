// tests/constant_time/arithmetic_tests.rs
// Timing of the Falcon modular helpers on inputs that do and do not take
// the conditional correction

use std::hint::black_box;

use super::{assert_constant_time, TestConfig};
use pqntt_algorithms::poly::reduce::{freeze, mq_add, mq_montymul, mq_sub};

const Q: u32 = 12_289;

#[test]
#[ignore]
fn test_mq_add_constant_time() {
    let config = TestConfig::for_modular_arithmetic();
    // 1 + 2 needs no correction, (Q - 1) + (Q - 2) does
    assert_constant_time(
        "mq_add",
        &config,
        || {
            black_box(mq_add(black_box(1), black_box(2)));
        },
        || {
            black_box(mq_add(black_box(Q - 1), black_box(Q - 2)));
        },
    );
}

#[test]
#[ignore]
fn test_mq_sub_constant_time() {
    let config = TestConfig::for_modular_arithmetic();
    assert_constant_time(
        "mq_sub",
        &config,
        || {
            black_box(mq_sub(black_box(Q - 1), black_box(1)));
        },
        || {
            black_box(mq_sub(black_box(1), black_box(Q - 1)));
        },
    );
}

#[test]
#[ignore]
fn test_mq_montymul_constant_time() {
    let config = TestConfig::for_modular_arithmetic();
    assert_constant_time(
        "mq_montymul",
        &config,
        || {
            black_box(mq_montymul(black_box(0), black_box(0)));
        },
        || {
            black_box(mq_montymul(black_box(Q - 1), black_box(Q - 1)));
        },
    );
}

#[test]
#[ignore]
fn test_freeze_constant_time() {
    let config = TestConfig::for_modular_arithmetic();
    assert_constant_time(
        "freeze",
        &config,
        || {
            black_box(freeze(black_box(5)));
        },
        || {
            black_box(freeze(black_box(-8_380_000)));
        },
    );
}
