use anchor_lang::prelude::*;

use crate::error::SwapError;

// Checked arithmetic over raw amounts. Every reserve and position update in
// the crate goes through these helpers; nothing else does bare math on
// balances.

pub fn add(a: u64, b: u64) -> Result<u64> {
    Ok(a.checked_add(b).ok_or(SwapError::ArithmeticOverflow)?)
}

pub fn sub(a: u64, b: u64) -> Result<u64> {
    Ok(a.checked_sub(b).ok_or(SwapError::ArithmeticUnderflow)?)
}

/// `floor(a * b / c)` with a u128 intermediate product.
///
/// Two u64 factors cannot overflow a u128, so the failure modes are a zero
/// divisor and a quotient that no longer fits in u64.
pub fn mul_div(a: u64, b: u64, c: u64) -> Result<u64> {
    require!(c > 0, SwapError::DivisionByZero);
    let quotient = (a as u128)
        .checked_mul(b as u128)
        .ok_or(SwapError::ArithmeticOverflow)?
        / c as u128;
    Ok(u64::try_from(quotient).map_err(|_| SwapError::ArithmeticOverflow)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_swap_err(result: Result<u64>, expected: SwapError) {
        let error_code = expected as u32 + 6000;
        assert!(matches!(
            result.unwrap_err(),
            anchor_lang::error::Error::AnchorError(error) if error.error_code_number == error_code
        ));
    }

    #[test]
    fn add_checks_overflow() {
        assert_eq!(add(1, 2).unwrap(), 3);
        assert_swap_err(add(u64::MAX, 1), SwapError::ArithmeticOverflow);
    }

    #[test]
    fn sub_checks_underflow() {
        assert_eq!(sub(5, 5).unwrap(), 0);
        assert_swap_err(sub(0, 1), SwapError::ArithmeticUnderflow);
    }

    #[test]
    fn mul_div_rounds_down() {
        assert_eq!(mul_div(7, 3, 2).unwrap(), 10); // 21 / 2
        assert_eq!(mul_div(1, 1, 3).unwrap(), 0);
    }

    #[test]
    fn mul_div_survives_wide_intermediate() {
        // a * b overflows u64 but the quotient fits
        assert_eq!(mul_div(u64::MAX, 2, 4).unwrap(), u64::MAX / 2);
    }

    #[test]
    fn mul_div_rejects_zero_divisor() {
        assert_swap_err(mul_div(1, 1, 0), SwapError::DivisionByZero);
    }

    #[test]
    fn mul_div_quotient_must_fit_u64() {
        assert_swap_err(mul_div(u64::MAX, 2, 1), SwapError::ArithmeticOverflow);
    }
}
