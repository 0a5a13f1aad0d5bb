use soroban_sdk::{contracttype, Address, Vec};

use crate::{decimal::Decimal, settlement::SettlementPolicy};

/// Protocol-wide parameters handed over by the deploying factory.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ProtocolParams {
    pub admin: Address,
    pub fee_collector: Address,
    /// Share of collected IN routed to the fee collector, in `[0, SCALE]`.
    pub exit_fee_ratio: Decimal,
    pub accepted_in_tokens: Vec<Address>,
    pub min_waiting_duration: u64,
    pub min_bootstrapping_duration: u64,
    pub min_stream_duration: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct CreateStreamParams {
    pub creator: Address,
    pub in_token: Address,
    pub out_token: Address,
    pub out_supply: i128,
    pub threshold: i128,
    pub bootstrapping_start_time: u64,
    pub stream_start_time: u64,
    pub stream_end_time: u64,
    pub settlement: SettlementPolicy,
}

/// Immutable configuration of this stream instance.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Config {
    pub admin: Address,
    pub creator: Address,
    pub fee_collector: Address,
    pub exit_fee_ratio: Decimal,
    pub in_token: Address,
    pub out_token: Address,
    pub bootstrapping_start_time: u64,
    pub stream_start_time: u64,
    pub stream_end_time: u64,
    pub settlement: SettlementPolicy,
}

/// Aggregate accounting of the sale.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamState {
    /// OUT not yet released to subscribers.
    pub out_remaining: i128,
    /// IN deposited and not yet spent.
    pub in_supply: i128,
    pub out_supply: i128,
    pub shares: i128,
    /// Cumulative OUT released per share.
    pub dist_index: Decimal,
    /// Cumulative IN spent across the whole stream.
    pub spent_in: i128,
    pub threshold: i128,
    pub last_updated: u64,
    /// Positions opened and not yet exited.
    pub open_positions: u32,
}

impl StreamState {
    pub fn new(out_supply: i128, threshold: i128, now: u64) -> Self {
        StreamState {
            out_remaining: out_supply,
            in_supply: 0,
            out_supply,
            shares: 0,
            dist_index: Decimal::ZERO,
            spent_in: 0,
            threshold,
            last_updated: now,
            open_positions: 0,
        }
    }

    /// Whether the sale collected enough IN to settle as streamed.
    ///
    /// Only conclusive once the state has been synced past the stream end.
    pub fn threshold_reached(&self) -> bool {
        self.spent_in >= self.threshold
    }
}
