use edwards_arith::primitives::{I512, U512};

#[test]
fn i512_negative_zero_is_zero() {
    let z = I512::from_parts(true, U512::ZERO);

    assert!(!z.is_negative());
    assert_eq!(z, I512::ZERO);
    assert_eq!(-I512::ZERO, I512::ZERO);
}

#[test]
fn i512_add_sub_signs() {
    let five = I512::from(5i64);
    let three = I512::from(3i64);

    assert_eq!(five - three, I512::from(2i64));
    assert_eq!(three - five, I512::from(-2i64));
    assert_eq!(-five + three, I512::from(-2i64));
    assert_eq!(-five - three, I512::from(-8i64));
    assert_eq!(five + -five, I512::ZERO);
}

#[test]
fn i512_mul_signs() {
    let a = I512::from(-6i64);
    let b = I512::from(7i64);

    assert_eq!(a * b, I512::from(-42i64));
    assert_eq!(a * a, I512::from(36i64));
    assert_eq!(a * I512::ZERO, I512::ZERO);
}

#[test]
fn i512_div_rem_truncates_toward_zero() {
    let cases = [(7i64, 3i64, 2i64, 1i64), (-7, 3, -2, -1), (7, -3, -2, 1), (-7, -3, 2, -1)];

    for (n, d, q, r) in cases {
        let (quotient, remainder) = I512::from(n).div_rem(I512::from(d));
        assert_eq!(quotient, I512::from(q), "{n} / {d}");
        assert_eq!(remainder, I512::from(r), "{n} % {d}");
    }
}

#[test]
fn i512_conversions() {
    assert_eq!(I512::from(u64::MAX).magnitude(), U512::from(u64::MAX));
    assert_eq!(I512::from(i64::MIN).magnitude(), U512::from(1u64 << 63));
    assert!(I512::from(i64::MIN).is_negative());
}
