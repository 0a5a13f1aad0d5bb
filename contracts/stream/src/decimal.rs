//! Scaled-integer ratios.
//!
//! Every proportion the sale works with (time fraction, distribution index,
//! streamed price, exit fee ratio) is a [`Decimal`]: an `i128` numerator over
//! the fixed denominator [`SCALE`]. Products of two token amounts can exceed
//! `i128`, so [`mul_div`] widens through the host `I256` type when the narrow
//! product overflows.

use soroban_sdk::{contracttype, Env, I256};

use crate::errors::ContractError;

/// Fixed-point denominator: `Decimal(SCALE)` is exactly 1.
pub const SCALE: i128 = 1_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rounding {
    Down,
    Up,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Decimal(pub i128);

impl Decimal {
    pub const ZERO: Decimal = Decimal(0);
    pub const ONE: Decimal = Decimal(SCALE);

    /// `numerator / denominator`, truncated to `SCALE` precision.
    pub fn from_ratio(
        env: &Env,
        numerator: i128,
        denominator: i128,
    ) -> Result<Decimal, ContractError> {
        mul_div(env, numerator, SCALE, denominator, Rounding::Down).map(Decimal)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `amount * self`, rounded down.
    pub fn mul_floor(self, env: &Env, amount: i128) -> Result<i128, ContractError> {
        mul_div(env, amount, self.0, SCALE, Rounding::Down)
    }

    /// `amount * self`, rounded up.
    pub fn mul_ceil(self, env: &Env, amount: i128) -> Result<i128, ContractError> {
        mul_div(env, amount, self.0, SCALE, Rounding::Up)
    }

    pub fn checked_add(self, other: Decimal) -> Result<Decimal, ContractError> {
        self.0
            .checked_add(other.0)
            .map(Decimal)
            .ok_or(ContractError::ArithmeticOverflow)
    }

    pub fn checked_sub(self, other: Decimal) -> Result<Decimal, ContractError> {
        self.0
            .checked_sub(other.0)
            .map(Decimal)
            .ok_or(ContractError::ArithmeticOverflow)
    }
}

/// `a * b / denominator` for non-negative operands.
///
/// Stays in `i128` while the product fits and falls back to `I256` otherwise.
/// The quotient itself must fit in `i128`.
pub fn mul_div(
    env: &Env,
    a: i128,
    b: i128,
    denominator: i128,
    rounding: Rounding,
) -> Result<i128, ContractError> {
    if denominator == 0 {
        return Err(ContractError::DivisionByZero);
    }

    if let Some(product) = a.checked_mul(b) {
        let quotient = product / denominator;
        return match rounding {
            Rounding::Up if product % denominator != 0 => quotient
                .checked_add(1)
                .ok_or(ContractError::ArithmeticOverflow),
            _ => Ok(quotient),
        };
    }

    let product = I256::from_i128(env, a).mul(&I256::from_i128(env, b));
    let denominator = I256::from_i128(env, denominator);
    let mut quotient = product.div(&denominator);
    if rounding == Rounding::Up && product.rem_euclid(&denominator) != I256::from_i32(env, 0) {
        quotient = quotient.add(&I256::from_i32(env, 1));
    }
    quotient.to_i128().ok_or(ContractError::ArithmeticOverflow)
}

#[cfg(test)]
mod test {
    use super::*;

    const E18: i128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_from_ratio_truncates() {
        let env = Env::default();
        assert_eq!(Decimal::from_ratio(&env, 30, 80).unwrap(), Decimal(375_000));
        assert_eq!(Decimal::from_ratio(&env, 1, 3).unwrap(), Decimal(333_333));
        assert_eq!(Decimal::from_ratio(&env, 5, 5).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_from_ratio_zero_denominator() {
        let env = Env::default();
        assert_eq!(
            Decimal::from_ratio(&env, 1, 0),
            Err(ContractError::DivisionByZero)
        );
    }

    #[test]
    fn test_mul_floor() {
        let env = Env::default();
        let half = Decimal(500_000);
        assert_eq!(half.mul_floor(&env, 2000 * E18).unwrap(), 1000 * E18);
        assert_eq!(half.mul_floor(&env, 3).unwrap(), 1);
    }

    #[test]
    fn test_mul_ceil() {
        let env = Env::default();
        assert_eq!(Decimal(6_666_666).mul_ceil(&env, 150).unwrap(), 1000);
        assert_eq!(Decimal(6_666_666).mul_floor(&env, 150).unwrap(), 999);
        assert_eq!(Decimal(3).mul_ceil(&env, 300_000_000).unwrap(), 900);
    }

    #[test]
    fn test_mul_div_rounding() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 10, 1, 3, Rounding::Down).unwrap(), 3);
        assert_eq!(mul_div(&env, 10, 1, 3, Rounding::Up).unwrap(), 4);
        assert_eq!(mul_div(&env, 9, 1, 3, Rounding::Up).unwrap(), 3);
    }

    #[test]
    fn test_mul_div_widens_past_i128() {
        let env = Env::default();
        // 250e18 * 200e18 does not fit in i128.
        let shares = mul_div(&env, 250 * E18, 200 * E18, 200 * E18, Rounding::Down).unwrap();
        assert_eq!(shares, 250 * E18);

        let rounded = mul_div(&env, 250 * E18 + 1, 200 * E18, 300 * E18, Rounding::Up).unwrap();
        let floored = mul_div(&env, 250 * E18 + 1, 200 * E18, 300 * E18, Rounding::Down).unwrap();
        assert_eq!(rounded, floored + 1);
    }

    #[test]
    fn test_mul_div_quotient_overflow() {
        let env = Env::default();
        assert_eq!(
            mul_div(&env, i128::MAX, i128::MAX, 1, Rounding::Down),
            Err(ContractError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_checked_index_arithmetic() {
        assert_eq!(
            Decimal::ONE.checked_add(Decimal(568_100)).unwrap(),
            Decimal(1_568_100)
        );
        assert_eq!(
            Decimal(1_568_100).checked_sub(Decimal::ONE).unwrap(),
            Decimal(568_100)
        );
        assert_eq!(
            Decimal(i128::MAX).checked_add(Decimal::ONE),
            Err(ContractError::ArithmeticOverflow)
        );
    }
}
