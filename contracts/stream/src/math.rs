//! Distribution math.
//!
//! Pure functions over [`StreamState`]. The aggregate state accrues a
//! distribution index (OUT released per share); positions settle lazily
//! against it, so how often the accrual runs does not change the outcome.

use soroban_sdk::Env;

use crate::{
    decimal::{mul_div, Decimal, Rounding, SCALE},
    errors::ContractError,
    types::StreamState,
};

/// Fraction of what is still undistributed that should be released between
/// `last_updated` and `now`.
///
/// Both ends are clamped into `[stream_start_time, stream_end_time]`; the
/// result is relative to the time left at `last_updated`, not to the whole
/// window.
pub fn calculate_elapsed_fraction(
    now: u64,
    stream_start_time: u64,
    stream_end_time: u64,
    last_updated: u64,
) -> Decimal {
    if now < stream_start_time || last_updated > stream_end_time {
        return Decimal::ZERO;
    }

    let last_updated = last_updated.max(stream_start_time);
    let now = now.min(stream_end_time);

    let numerator = now.saturating_sub(last_updated);
    let denominator = stream_end_time - last_updated;
    if numerator == 0 || denominator == 0 {
        return Decimal::ZERO;
    }

    // u64 * SCALE cannot overflow i128.
    Decimal(numerator as i128 * SCALE / denominator as i128)
}

/// Release `fraction` of the remaining OUT and spend the same fraction of
/// the pending IN.
///
/// `out_remaining` drops by `index_delta * shares` rounded up: never by more
/// than was distributed, and never by less than the index entitles the
/// share holders to claim.
pub fn apply_elapsed_fraction(
    env: &Env,
    state: &mut StreamState,
    fraction: Decimal,
    now: u64,
) -> Result<(), ContractError> {
    if fraction.is_zero() || state.shares == 0 {
        return Ok(());
    }

    let distributed = fraction.mul_floor(env, state.out_remaining)?;
    let spent = fraction.mul_floor(env, state.in_supply)?;

    // Only the OUT the index can actually credit leaves `out_remaining`;
    // the truncated remainder carries forward to later syncs.
    let index_delta = Decimal::from_ratio(env, distributed, state.shares)?;
    let credited = index_delta.mul_ceil(env, state.shares)?;

    state.out_remaining = state
        .out_remaining
        .checked_sub(credited)
        .ok_or(ContractError::ArithmeticOverflow)?;
    state.in_supply = state
        .in_supply
        .checked_sub(spent)
        .ok_or(ContractError::ArithmeticOverflow)?;
    state.spent_in = state
        .spent_in
        .checked_add(spent)
        .ok_or(ContractError::ArithmeticOverflow)?;

    state.dist_index = state.dist_index.checked_add(index_delta)?;
    state.last_updated = now;
    Ok(())
}

/// Shares corresponding to `amount_in` at the current IN/share ratio.
///
/// Issuance rounds down so a subscriber is never over-credited; redemption
/// (`round_up`) rounds up so the remaining holders are never diluted. An
/// empty pool prices shares 1:1.
pub fn compute_shares_amount(
    env: &Env,
    amount_in: i128,
    round_up: bool,
    in_supply: i128,
    total_shares: i128,
) -> Result<i128, ContractError> {
    if total_shares == 0 || amount_in == 0 || in_supply == 0 {
        return Ok(amount_in);
    }
    let rounding = if round_up { Rounding::Up } else { Rounding::Down };
    mul_div(env, amount_in, total_shares, in_supply, rounding)
}

/// Split `spent_in` into `(fee, remaining)`.
pub fn calculate_exit_fee(
    env: &Env,
    spent_in: i128,
    exit_fee_ratio: Decimal,
) -> Result<(i128, i128), ContractError> {
    let fee = exit_fee_ratio.mul_floor(env, spent_in)?;
    let remaining = spent_in
        .checked_sub(fee)
        .ok_or(ContractError::ArithmeticOverflow)?;
    Ok((fee, remaining))
}

/// Average IN paid per OUT released so far. Zero before anything streamed.
pub fn calculate_streamed_price(env: &Env, state: &StreamState) -> Result<Decimal, ContractError> {
    let distributed_out = state.out_supply - state.out_remaining;
    if distributed_out <= 0 {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_ratio(env, state.spent_in, distributed_out)
}
