// The domain-tagged Polynomial: each transform changes the type, so a
// Montgomery-scaled ML-DSA result cannot be mistaken for a canonical one.

use pqntt_algorithms::poly::prelude::*;

fn main() -> pqntt_api::Result<()> {
    let values: Vec<u32> = (0..256).collect();
    let x = Polynomial::<MlDsaRing>::from_u32s(&values)?;

    let hat: Polynomial<MlDsaRing, NttForm> = x.clone().ntt();
    let mont: Polynomial<MlDsaRing, Montgomery> = hat.inverse_to_montgomery();
    println!("{:?} -> {:?}", x.domain(), mont.domain());

    let back: Polynomial<MlDsaRing, Canonical> = mont.reduce();
    assert_eq!(back, x);

    let f = Polynomial::<FalconRing>::from_u32s(&[3, 1, 4, 1, 5, 9, 2, 6])?;
    let g = Polynomial::<FalconRing>::from_u32s(&[2, 7, 1, 8, 2, 8, 1, 8])?;
    let fg = f.ntt_mul(&g)?;
    assert_eq!(fg, f.schoolbook_mul(&g)?);
    println!("Falcon n=8 product: {:?}", fg.as_coeffs_slice());
    Ok(())
}
