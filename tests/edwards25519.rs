use edwards_arith::{
    edwards25519::{
        CurveParameters, EdwardsPoint, EntropySource, FIELD_MODULUS, FieldElement, GROUP_ORDER,
        Scalar,
    },
    error::PointError,
    primitives::{I512, U256},
};

use sha2::{Digest, Sha512};

/// Deterministic byte stream: SHA-512 in counter mode over a label.
struct DigestStream {
    label: &'static [u8],
    counter: u32,
}

impl DigestStream {
    fn new(label: &'static [u8]) -> Self {
        Self { label, counter: 0 }
    }
}

impl EntropySource for DigestStream {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(64) {
            let block = Sha512::new()
                .chain_update(self.label)
                .chain_update(self.counter.to_le_bytes())
                .finalize();
            self.counter += 1;
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }
}

fn challenge(parts: &[&[u8]]) -> Scalar {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }

    let mut digest = [0u8; 64];
    digest.copy_from_slice(&hasher.finalize());
    Scalar::from_bytes_mod_order_wide(&digest)
}

fn g() -> EdwardsPoint {
    EdwardsPoint::generator()
}

#[test]
fn parameters_match_edwards25519() {
    let curve = CurveParameters::ed25519();

    assert_eq!(curve.modulus(), FIELD_MODULUS);
    assert_eq!(curve.order(), GROUP_ORDER);
    assert_ne!(curve.modulus(), curve.order());

    // m = 2²⁵⁵ − 19
    assert_eq!(
        I512::from(curve.modulus()) + I512::from(19i64),
        I512::from(U256::from_be_words([1 << 63, 0, 0, 0]))
    );

    assert_eq!(curve.a(), FieldElement::from(-1i64));
    assert_eq!(curve.a() + FieldElement::ONE, FieldElement::ZERO);
}

#[test]
fn d_is_derived_from_the_curve_equation() {
    let curve = CurveParameters::ed25519();
    let derived = FieldElement::from(-121665i64) * FieldElement::from(121666u64).invert().unwrap();

    assert_eq!(curve.d(), derived);
}

#[test]
fn generator_is_valid() {
    let curve = CurveParameters::ed25519();
    let base = curve.generator();

    assert!(base.is_on_curve());
    assert_eq!(base.z(), FieldElement::ONE);
    assert_eq!(base.t(), base.x() * base.y());

    // y = 4/5
    let four_fifths = FieldElement::from(4u64) * FieldElement::from(5u64).invert().unwrap();
    assert_eq!(base.y(), four_fifths);
}

#[test]
fn identity_laws() {
    let id = EdwardsPoint::identity();

    assert!(id.is_on_curve());
    assert!(id.is_identity());
    assert_eq!(g() + id, g());
    assert_eq!(id + g(), g());
    assert_eq!(id + id, id);
    assert_eq!(id.double(), id);
}

#[test]
fn double_matches_add() {
    let p = g();
    let q = g().multiply(U256::from(7u64));

    assert_eq!(p.double(), p + p);
    assert_eq!(q.double(), q + q);
    assert!(q.double().is_on_curve());
}

#[test]
fn addition_is_commutative_and_associative() {
    let p = g();
    let q = g().double();
    let r = g().multiply(U256::from(5u64));

    assert_eq!(p + q, q + p);
    assert_eq!((p + q) + r, p + (q + r));
    assert_eq!(p + q, g().multiply(U256::from(3u64)));
}

#[test]
fn equality_ignores_projective_scaling() {
    let p = g().double();
    let (x, y) = p.to_affine().unwrap();
    let affine = EdwardsPoint::from_affine(x, y).unwrap();

    assert_eq!(p, affine);
    assert_ne!(p, g());

    let lambda = FieldElement::from(12345u64);
    let scaled = EdwardsPoint::from_extended(
        affine.x() * lambda,
        affine.y() * lambda,
        lambda,
        affine.t() * lambda,
    )
    .unwrap();
    assert_eq!(scaled, affine);
}

#[test]
fn small_multiples() {
    assert_eq!(g().multiply(U256::ZERO), EdwardsPoint::identity());
    assert_eq!(g().multiply(U256::ONE), g());
    assert_eq!(g().multiply(U256::from(2u64)), g().double());
    assert_eq!(g().multiply(U256::from(4u64)), g().double().double());
}

#[test]
fn generator_has_order_n() {
    let curve = CurveParameters::ed25519();
    let n_g = g().multiply(curve.order());

    assert_eq!(n_g, EdwardsPoint::identity());
    assert!(n_g.is_identity());

    let (x, y) = n_g.to_affine().unwrap();
    assert_eq!(x, FieldElement::ZERO);
    assert_eq!(y, FieldElement::ONE);

    let n_minus_one = Scalar::reduce(I512::from(curve.order()) - I512::from(1i64));
    assert_eq!(g() * n_minus_one + g(), EdwardsPoint::identity());
}

#[test]
fn scalar_multiplication_is_linear() {
    let mut rng = DigestStream::new(b"linearity");

    for _ in 0..2 {
        let a = Scalar::random(&mut rng);
        let b = Scalar::random(&mut rng);
        let s = a + b;

        assert_eq!(g() * s, g() * a + g() * b);
    }
}

#[test]
fn schnorr_style_identity_holds() {
    let mut rng = DigestStream::new(b"trials");

    for trial in 0..4u32 {
        let r = Scalar::random(&mut rng);
        let private = Scalar::random(&mut rng);

        let big_r = g() * r;
        let public = g() * private;
        let h = challenge(&[
            &big_r.x().to_u256().to_le_bytes(),
            &public.x().to_u256().to_le_bytes(),
            &trial.to_le_bytes(),
        ]);

        let s = r + h * private;

        assert_eq!(g() * s, big_r + public * h, "trial {trial}");
    }
}

#[test]
fn from_affine_rejects_off_curve_points() {
    assert_eq!(
        EdwardsPoint::from_affine(FieldElement::from(1u64), FieldElement::from(1u64)),
        Err(PointError::InvalidPoint)
    );

    let base = g();
    assert_eq!(
        EdwardsPoint::from_affine(base.x(), base.y() + FieldElement::ONE),
        Err(PointError::InvalidPoint)
    );
    assert_eq!(EdwardsPoint::from_affine(base.x(), base.y()), Ok(base));
}

#[test]
fn from_extended_rejects_bad_coordinates() {
    let base = g();

    // Z = 0
    assert_eq!(
        EdwardsPoint::from_extended(
            FieldElement::ZERO,
            FieldElement::ONE,
            FieldElement::ZERO,
            FieldElement::ZERO
        ),
        Err(PointError::InvalidPoint)
    );

    // X·Y ≠ Z·T
    assert_eq!(
        EdwardsPoint::from_extended(base.x(), base.y(), base.z(), base.t() + FieldElement::ONE),
        Err(PointError::InvalidPoint)
    );
}

#[test]
fn scalar_reduction_uses_group_order() {
    let n = Scalar::from_u256(GROUP_ORDER);
    assert!(n.is_zero());

    let m = Scalar::from_u256(FIELD_MODULUS);
    assert!(!m.is_zero());
    assert_eq!(g() * m, g().multiply(FIELD_MODULUS));

    let wide = [0xFFu8; 64];
    let s = Scalar::from_bytes_mod_order_wide(&wide);
    assert!(s.to_u256() < GROUP_ORDER);
    assert_eq!(Scalar::from_le_bytes(s.to_le_bytes()), s);
}

#[test]
fn parameters_are_shared_across_threads() {
    let handles: Vec<_> = (0..4u64)
        .map(|k| {
            std::thread::spawn(move || {
                let curve = CurveParameters::ed25519();
                (curve as *const CurveParameters as usize, g().multiply(U256::from(k)))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results.windows(2).all(|w| w[0].0 == w[1].0));
    assert_eq!(results[0].1, EdwardsPoint::identity());
    assert_eq!(results[3].1, g().multiply(U256::from(3u64)));
}
