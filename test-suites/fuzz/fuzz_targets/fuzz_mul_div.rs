#![no_main]

use fixed_math::{checked_div_ceil, checked_div_floor, checked_mul_ceil, checked_mul_floor};
use libfuzzer_sys::fuzz_target;
use soroban_fixed_point_math::FixedPoint;

fuzz_target!(|input: (i64, i64, i64)| {
    let (x, y, denominator) = (input.0 as i128, input.1 as i128, input.2 as i128);
    if denominator == 0 {
        assert!(checked_mul_floor(x, y, denominator).is_err());
        return;
    }

    let floor = checked_mul_floor(x, y, denominator).unwrap();
    let ceil = checked_mul_ceil(x, y, denominator).unwrap();
    let product = x * y;

    // truncating division, ceiling only on a strictly positive remainder
    assert_eq!(floor, product / denominator);
    let remainder = product % denominator;
    assert_eq!(ceil, floor + if remainder > 0 { 1 } else { 0 });

    // matches the on-chain library whenever nothing is negative
    if x >= 0 && y >= 0 && denominator > 0 {
        assert_eq!(Some(floor), x.fixed_mul_floor(y, denominator));
        assert_eq!(Some(ceil), x.fixed_mul_ceil(y, denominator));
    }

    if y != 0 {
        assert_eq!(
            checked_div_floor(x, y, denominator),
            checked_mul_floor(x, denominator, y)
        );
        assert_eq!(
            checked_div_ceil(x, y, denominator),
            checked_mul_ceil(x, denominator, y)
        );
    }
});
