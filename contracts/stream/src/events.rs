//! Contract events.
//!
//! Topics are short symbols, optionally followed by the subscriber address;
//! payloads are the structs below.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::{decimal::Decimal, settlement::PoolCreated, status::StreamStatus};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamCreated {
    pub creator: Address,
    pub in_token: Address,
    pub out_token: Address,
    pub out_supply: i128,
    pub threshold: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusChanged {
    pub from: StreamStatus,
    pub to: StreamStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subscribed {
    pub amount_in: i128,
    pub shares_issued: i128,
    pub in_balance: i128,
    pub position_shares: i128,
    pub in_supply: i128,
    pub total_shares: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub amount: i128,
    pub shares_burned: i128,
    pub in_balance: i128,
    pub position_shares: i128,
    pub in_supply: i128,
    pub total_shares: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamSynced {
    pub dist_index: Decimal,
    pub out_remaining: i128,
    pub in_supply: i128,
    pub spent_in: i128,
    pub last_updated: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionSynced {
    pub index: Decimal,
    pub in_balance: i128,
    pub spent_in: i128,
    pub purchased: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FinalizedStreamed {
    pub creator_revenue: i128,
    pub exit_fee: i128,
    /// Pending IN with no shares left to claim it, returned to the creator.
    pub unclaimed_in: i128,
    /// Amounts the pool wrapper reports as actually used.
    pub pool_in: i128,
    pub pool_out: i128,
    pub refunded_out: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FinalizedRefunded {
    pub refunded_out: i128,
    pub spent_in: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExitedStreamed {
    pub purchased: i128,
    pub spent_in: i128,
    pub exit_timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExitedRefunded {
    pub in_balance: i128,
    pub spent_in: i128,
    pub exit_timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamCancelled {
    pub by_admin: bool,
    pub refunded_out: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingCreated {
    pub wallet: Address,
    pub token: Address,
    pub amount: i128,
    pub start_time: u64,
    pub duration: u64,
}

pub(crate) fn stream_created(env: &Env, data: StreamCreated) {
    env.events().publish((symbol_short!("created"),), data);
}

pub(crate) fn status_changed(env: &Env, from: StreamStatus, to: StreamStatus) {
    env.events()
        .publish((symbol_short!("status"),), StatusChanged { from, to });
}

pub(crate) fn subscribed(env: &Env, subscriber: &Address, data: Subscribed) {
    env.events()
        .publish((symbol_short!("subscribe"), subscriber.clone()), data);
}

pub(crate) fn withdrawn(env: &Env, subscriber: &Address, data: Withdrawn) {
    env.events()
        .publish((symbol_short!("withdraw"), subscriber.clone()), data);
}

pub(crate) fn stream_synced(env: &Env, data: StreamSynced) {
    env.events().publish((symbol_short!("sync"),), data);
}

pub(crate) fn position_synced(env: &Env, owner: &Address, data: PositionSynced) {
    env.events()
        .publish((symbol_short!("sync_pos"), owner.clone()), data);
}

pub(crate) fn finalized_streamed(env: &Env, data: FinalizedStreamed) {
    env.events().publish(
        (symbol_short!("finalized"), symbol_short!("streamed")),
        data,
    );
}

pub(crate) fn finalized_refunded(env: &Env, data: FinalizedRefunded) {
    env.events().publish(
        (symbol_short!("finalized"), symbol_short!("refunded")),
        data,
    );
}

pub(crate) fn exited_streamed(env: &Env, subscriber: &Address, data: ExitedStreamed) {
    env.events().publish(
        (symbol_short!("exit"), symbol_short!("streamed"), subscriber.clone()),
        data,
    );
}

pub(crate) fn exited_refunded(env: &Env, subscriber: &Address, data: ExitedRefunded) {
    env.events().publish(
        (symbol_short!("exit"), symbol_short!("refunded"), subscriber.clone()),
        data,
    );
}

pub(crate) fn cancelled(env: &Env, data: StreamCancelled) {
    env.events().publish((symbol_short!("cancelled"),), data);
}

pub(crate) fn pool_created(env: &Env, data: PoolCreated) {
    env.events().publish((symbol_short!("pool"),), data);
}

pub(crate) fn vesting_created(env: &Env, beneficiary: &Address, data: VestingCreated) {
    env.events()
        .publish((symbol_short!("vesting"), beneficiary.clone()), data);
}
