//! Per-subscriber ledger.

use soroban_sdk::{contracttype, Address, Env};

use crate::{
    decimal::{mul_div, Decimal, Rounding},
    errors::ContractError,
    storage::{DataKey, TTL_EXTEND_TO, TTL_THRESHOLD},
};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    /// IN deposited and not yet spent.
    pub in_balance: i128,
    pub shares: i128,
    /// Snapshot of the stream's distribution index at the last sync.
    pub index: Decimal,
    pub spent_in: i128,
    pub purchased: i128,
    pub last_update_time: u64,
    /// Zero until the subscriber exits; the position is frozen afterwards.
    pub exit_date: u64,
}

impl Position {
    pub fn new(index: Decimal, now: u64) -> Self {
        Position {
            in_balance: 0,
            shares: 0,
            index,
            spent_in: 0,
            purchased: 0,
            last_update_time: now,
            exit_date: 0,
        }
    }

    pub fn has_exited(&self) -> bool {
        self.exit_date != 0
    }
}

/// Settle `position` against the stream's current aggregates.
///
/// Credits the OUT released since the last sync and re-derives the unspent
/// IN as this position's pro-rata claim on `in_supply`, never above the
/// balance it already had. Calling it again without the index moving changes
/// nothing but `last_update_time`.
pub fn sync_position(
    env: &Env,
    position: &mut Position,
    dist_index: Decimal,
    total_shares: i128,
    in_supply: i128,
    now: u64,
) -> Result<(), ContractError> {
    let index_delta = dist_index.checked_sub(position.index)?;
    let purchased_delta = index_delta.mul_floor(env, position.shares)?;
    position.purchased = position
        .purchased
        .checked_add(purchased_delta)
        .ok_or(ContractError::ArithmeticOverflow)?;

    let pro_rata = if total_shares == 0 {
        0
    } else {
        mul_div(env, in_supply, position.shares, total_shares, Rounding::Down)?
    };
    // Share issuance rounds down, which can nudge the pro-rata claim of
    // existing holders up by a unit; spent IN is never handed back.
    let new_in_balance = pro_rata.min(position.in_balance);
    let spent_delta = position
        .in_balance
        .checked_sub(new_in_balance)
        .ok_or(ContractError::ArithmeticOverflow)?;
    position.spent_in = position
        .spent_in
        .checked_add(spent_delta)
        .ok_or(ContractError::ArithmeticOverflow)?;
    position.in_balance = new_in_balance;

    position.index = dist_index;
    position.last_update_time = now;
    Ok(())
}

pub(crate) fn load_position(env: &Env, owner: &Address) -> Option<Position> {
    env.storage()
        .persistent()
        .get(&DataKey::Position(owner.clone()))
}

pub(crate) fn save_position(env: &Env, owner: &Address, position: &Position) {
    let key = DataKey::Position(owner.clone());
    env.storage().persistent().set(&key, position);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
