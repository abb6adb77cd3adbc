// Fixed-size transforms without an allocator: ML-DSA on a [i32; 256] and
// Falcon-512 on a [u16; 512], both living on the stack.

use pqntt_algorithms::poly::reduce::freeze;
use pqntt_algorithms::{falcon, ml_dsa};

fn ml_dsa_product() -> [i32; ml_dsa::N] {
    // (1 + X) * (1 - X) = 1 - X^2
    let mut a = [0i32; ml_dsa::N];
    let mut b = [0i32; ml_dsa::N];
    a[0] = 1;
    a[1] = 1;
    b[0] = 1;
    b[1] = -1;

    ml_dsa::forward(&mut a);
    ml_dsa::forward(&mut b);
    let mut c = [0i32; ml_dsa::N];
    ml_dsa::pointwise_montgomery(&mut c, &a, &b);
    ml_dsa::inverse_to_montgomery(&mut c);
    for x in c.iter_mut() {
        *x = freeze(*x);
    }
    c
}

fn falcon_roundtrip() -> bool {
    let mut a = [0u16; 512];
    for (i, c) in a.iter_mut().enumerate() {
        *c = (i * 23 % 12_289) as u16;
    }
    let original = a;
    falcon::forward(&mut a, 9);
    falcon::inverse(&mut a, 9);
    a == original
}

fn main() {
    let c = ml_dsa_product();
    println!("ML-DSA (1 + X)(1 - X): c0 = {}, c2 = {}", c[0], c[2]);
    assert_eq!(c[0], 1);
    assert_eq!(c[2], 8_380_416);

    println!("Falcon-512 round trip: {}", falcon_roundtrip());
}
