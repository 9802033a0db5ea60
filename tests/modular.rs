use edwards_arith::{
    edwards25519::{FIELD_MODULUS, GROUP_ORDER},
    error::ArithmeticError,
    modular::{invert, reduce},
    primitives::{I512, U256, U512},
};

fn int(v: i64) -> I512 {
    I512::from(v)
}

fn small(v: u64) -> U256 {
    U256::from(v)
}

#[test]
fn reduce_small_values() {
    assert_eq!(reduce(int(10), small(7)), small(3));
    assert_eq!(reduce(int(7), small(7)), U256::ZERO);
    assert_eq!(reduce(int(0), small(7)), U256::ZERO);
}

#[test]
fn reduce_negative_values() {
    assert_eq!(reduce(int(-1), small(7)), small(6));
    assert_eq!(reduce(int(-7), small(7)), U256::ZERO);
    assert_eq!(reduce(int(-15), small(7)), small(6));

    let minus_one = reduce(int(-1), FIELD_MODULUS);
    assert_eq!(I512::from(minus_one) + int(1), I512::from(FIELD_MODULUS));
}

#[test]
fn reduce_is_idempotent_and_in_range() {
    let samples = [
        int(-123456789),
        int(987654321),
        I512::from(U512::MAX),
        -I512::from(U512::MAX),
        I512::from(FIELD_MODULUS) * int(3) + int(5),
        I512::from(GROUP_ORDER) * int(-2) - int(9),
    ];

    for modulus in [small(97), FIELD_MODULUS, GROUP_ORDER] {
        for &value in samples.iter() {
            let once = reduce(value, modulus);
            assert!(once < modulus);
            assert_eq!(reduce(I512::from(once), modulus), once);
        }
    }
}

#[test]
fn reduce_respects_distinct_moduli() {
    let value = I512::from(FIELD_MODULUS);

    assert_eq!(reduce(value, FIELD_MODULUS), U256::ZERO);
    assert_ne!(reduce(value, GROUP_ORDER), U256::ZERO);
}

#[test]
#[should_panic(expected = "division by zero")]
fn reduce_zero_modulus_panics() {
    let _ = reduce(int(5), U256::ZERO);
}

#[test]
fn invert_small_modulus() {
    // 3 · 5 = 15 ≡ 1 (mod 7)
    assert_eq!(invert(int(3), small(7)), Ok(small(5)));
    assert_eq!(invert(int(-4), small(7)), Ok(small(5)));
}

#[test]
fn invert_times_value_is_one() {
    for modulus in [FIELD_MODULUS, GROUP_ORDER] {
        for v in [1i64, 2, 3, 121666, 1 << 40, -5] {
            let value = int(v);
            let inv = invert(value, modulus).unwrap();
            let product = reduce(I512::from(inv) * I512::from(reduce(value, modulus)), modulus);
            assert_eq!(product, U256::ONE, "inverse of {v}");
        }
    }

    let large = I512::from(FIELD_MODULUS) - int(2);
    let inv = invert(large, FIELD_MODULUS).unwrap();
    assert_eq!(reduce(I512::from(inv) * large, FIELD_MODULUS), U256::ONE);
}

#[test]
fn invert_rejects_zero_input() {
    assert_eq!(
        invert(I512::ZERO, FIELD_MODULUS),
        Err(ArithmeticError::InvalidInverseInput)
    );
    assert_eq!(
        invert(int(3), U256::ZERO),
        Err(ArithmeticError::InvalidInverseInput)
    );
}

#[test]
fn invert_rejects_multiples_of_modulus() {
    for k in [1i64, 2, -3] {
        let value = I512::from(FIELD_MODULUS) * int(k);
        assert_eq!(
            invert(value, FIELD_MODULUS),
            Err(ArithmeticError::NoInverseExists)
        );
    }
}

#[test]
fn invert_rejects_shared_factor() {
    // gcd(6, 9) = 3
    assert_eq!(invert(int(6), small(9)), Err(ArithmeticError::NoInverseExists));
    assert_eq!(invert(int(4), small(10)), Err(ArithmeticError::NoInverseExists));
    assert_eq!(invert(int(7), small(10)), Ok(small(3)));
}
