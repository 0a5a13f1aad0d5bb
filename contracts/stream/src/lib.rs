#![no_std]

mod decimal;
mod errors;
mod events;
mod math;
mod position;
mod settlement;
mod status;
mod storage;
mod types;

pub use decimal::{Decimal, SCALE};
pub use errors::ContractError;
pub use events::{
    ExitedRefunded, ExitedStreamed, FinalizedRefunded, FinalizedStreamed, PositionSynced,
    StatusChanged, StreamCancelled, StreamCreated, StreamSynced, Subscribed, VestingCreated,
    Withdrawn,
};
pub use position::Position;
pub use settlement::{
    PoolConfig, PoolCreated, PoolPlan, PostStreamActions, SettlementPolicy, VestingConfig,
    VestingPlan,
};
pub use status::StreamStatus;
pub use types::{Config, CreateStreamParams, ProtocolParams, StreamState};

use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

use crate::{
    decimal::{mul_div, Rounding},
    position::{load_position, save_position, sync_position},
    status::derive_status,
    storage::{
        get_config, get_state, get_stored_status, is_initialized, save_state, set_config,
        set_stored_status, ReentrancyGuard, TTL_EXTEND_TO, TTL_THRESHOLD,
    },
};

// ---------------------------------------------------------------------------
// Internal Helpers
// ---------------------------------------------------------------------------

impl StreamSwap {
    fn validate_stream_params(
        protocol: &ProtocolParams,
        params: &CreateStreamParams,
        now: u64,
    ) -> Result<(), ContractError> {
        if params.out_supply <= 0 || params.threshold < 0 {
            return Err(ContractError::InvalidAmount);
        }
        if params.in_token == params.out_token {
            return Err(ContractError::SameInAndOutToken);
        }
        if !protocol
            .accepted_in_tokens
            .iter()
            .any(|token| token == params.in_token)
        {
            return Err(ContractError::InTokenNotAccepted);
        }
        if protocol.exit_fee_ratio < Decimal::ZERO || protocol.exit_fee_ratio > Decimal::ONE {
            return Err(ContractError::InvalidExitFeeRatio);
        }

        if params.bootstrapping_start_time < now
            || params.stream_start_time < params.bootstrapping_start_time
            || params.stream_end_time <= params.stream_start_time
        {
            return Err(ContractError::InvalidTimeOrdering);
        }
        if params.bootstrapping_start_time - now < protocol.min_waiting_duration {
            return Err(ContractError::WaitingDurationTooShort);
        }
        if params.stream_start_time - params.bootstrapping_start_time
            < protocol.min_bootstrapping_duration
        {
            return Err(ContractError::BootstrappingDurationTooShort);
        }
        if params.stream_end_time - params.stream_start_time < protocol.min_stream_duration {
            return Err(ContractError::StreamDurationTooShort);
        }

        params.settlement.validate(params.stream_end_time)
    }

    /// Recompute the lifecycle status from the ledger clock, persisting and
    /// announcing a change.
    fn refresh_status(env: &Env, config: &Config) -> StreamStatus {
        let stored = get_stored_status(env);
        let status = derive_status(
            stored,
            env.ledger().timestamp(),
            config.bootstrapping_start_time,
            config.stream_start_time,
            config.stream_end_time,
        );
        if status != stored {
            Self::set_status(env, stored, status);
        }
        status
    }

    fn set_status(env: &Env, from: StreamStatus, to: StreamStatus) {
        log!(env, "stream status {} -> {}", from as u32, to as u32);
        set_stored_status(env, to);
        events::status_changed(env, from, to);
    }

    /// Aggregate state brought up to the current ledger time.
    ///
    /// Terminal streams are frozen and returned as stored.
    fn synced_state(
        env: &Env,
        config: &Config,
        status: StreamStatus,
    ) -> Result<StreamState, ContractError> {
        let mut state = get_state(env);
        if status.is_terminal() {
            return Ok(state);
        }

        let now = env.ledger().timestamp();
        let fraction = math::calculate_elapsed_fraction(
            now,
            config.stream_start_time,
            config.stream_end_time,
            state.last_updated,
        );
        math::apply_elapsed_fraction(env, &mut state, fraction, now)?;
        // Stretches with no shares outstanding are not charged to later
        // subscribers.
        if now > state.last_updated {
            state.last_updated = now;
        }
        save_state(env, &state);
        Ok(state)
    }

    fn synced_position(
        env: &Env,
        owner: &Address,
        state: &StreamState,
    ) -> Result<Position, ContractError> {
        let mut position = load_position(env, owner).ok_or(ContractError::InvalidPosition)?;
        if !position.has_exited() {
            sync_position(
                env,
                &mut position,
                state.dist_index,
                state.shares,
                state.in_supply,
                env.ledger().timestamp(),
            )?;
        }
        Ok(position)
    }

    /// Return everything this contract holds of the OUT token to the creator.
    fn refund_out_balance(env: &Env, config: &Config) -> i128 {
        let token_client = token::Client::new(env, &config.out_token);
        let balance = token_client.balance(&env.current_contract_address());
        if balance > 0 {
            token_client.transfer(&env.current_contract_address(), &config.creator, &balance);
        }
        balance
    }

    /// Once a streamed sale is settled and every position has exited, the
    /// OUT still held is truncation dust nobody can claim.
    fn sweep_settled_out(env: &Env, config: &Config, state: &StreamState) -> i128 {
        if state.open_positions != 0 {
            return 0;
        }
        let swept = Self::refund_out_balance(env, config);
        if swept > 0 {
            log!(env, "swept {} unclaimed OUT", swept);
        }
        swept
    }

    fn cancel(env: &Env, config: &Config, from: StreamStatus, by_admin: bool) {
        Self::set_status(env, from, StreamStatus::Cancelled);
        let refunded_out = Self::refund_out_balance(env, config);

        events::cancelled(
            env,
            StreamCancelled {
                by_admin,
                refunded_out,
                timestamp: env.ledger().timestamp(),
            },
        );
    }
}

// ---------------------------------------------------------------------------
// Contract Implementation
// ---------------------------------------------------------------------------

#[contract]
pub struct StreamSwap;

#[contractimpl]
impl StreamSwap {
    /// Initialise the stream. Called exactly once by the deploying factory.
    ///
    /// Pulls `out_supply` OUT (plus the pool reserve, when pool creation is
    /// configured) from the creator into the contract.
    ///
    /// # Authorization
    /// - Requires authorization from `params.creator`
    ///
    /// # Errors
    /// - `AlreadyInitialized` on a second call
    /// - `InvalidAmount` if `out_supply <= 0` or `threshold < 0`
    /// - `SameInAndOutToken`, `InTokenNotAccepted`, `InvalidExitFeeRatio`
    /// - `InvalidTimeOrdering` unless `now <= bootstrapping_start <= stream_start < stream_end`
    /// - `WaitingDurationTooShort`, `BootstrappingDurationTooShort`,
    ///   `StreamDurationTooShort` against the protocol minimums
    /// - `InvalidSettlementConfig` for a malformed settlement policy
    ///
    /// # Events
    /// - `created` with the stream's tokens, supply and threshold
    pub fn init(
        env: Env,
        protocol: ProtocolParams,
        params: CreateStreamParams,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        params.creator.require_auth();

        let now = env.ledger().timestamp();
        Self::validate_stream_params(&protocol, &params, now)?;

        let config = Config {
            admin: protocol.admin,
            creator: params.creator.clone(),
            fee_collector: protocol.fee_collector,
            exit_fee_ratio: protocol.exit_fee_ratio,
            in_token: params.in_token.clone(),
            out_token: params.out_token.clone(),
            bootstrapping_start_time: params.bootstrapping_start_time,
            stream_start_time: params.stream_start_time,
            stream_end_time: params.stream_end_time,
            settlement: params.settlement.clone(),
        };
        set_config(&env, &config);
        save_state(&env, &StreamState::new(params.out_supply, params.threshold, now));
        set_stored_status(
            &env,
            derive_status(
                StreamStatus::Waiting,
                now,
                config.bootstrapping_start_time,
                config.stream_start_time,
                config.stream_end_time,
            ),
        );
        env.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);

        let deposit = params
            .out_supply
            .checked_add(params.settlement.pool_out_supply())
            .ok_or(ContractError::ArithmeticOverflow)?;
        token::Client::new(&env, &params.out_token).transfer(
            &params.creator,
            &env.current_contract_address(),
            &deposit,
        );

        events::stream_created(
            &env,
            StreamCreated {
                creator: params.creator,
                in_token: params.in_token,
                out_token: params.out_token,
                out_supply: params.out_supply,
                threshold: params.threshold,
            },
        );
        Ok(())
    }

    /// Deposit `amount_in` IN into the stream.
    ///
    /// The stream and the subscriber's position are synced first; new shares
    /// are issued at the current IN/share ratio, rounded down. The first call
    /// from an address opens its position.
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount_in <= 0` or it buys no shares
    /// - `InvalidStreamStatus` outside `Bootstrapping` and `Active`
    ///
    /// # Events
    /// - `subscribe(subscriber)` with the issued shares and new totals
    pub fn subscribe(env: Env, subscriber: Address, amount_in: i128) -> Result<(), ContractError> {
        subscriber.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        if amount_in <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let config = get_config(&env);
        let status = Self::refresh_status(&env, &config);
        if !status.accepts_deposits() {
            return Err(ContractError::InvalidStreamStatus);
        }

        let now = env.ledger().timestamp();
        let mut state = Self::synced_state(&env, &config, status)?;
        let mut position = match load_position(&env, &subscriber) {
            Some(mut position) => {
                sync_position(
                    &env,
                    &mut position,
                    state.dist_index,
                    state.shares,
                    state.in_supply,
                    now,
                )?;
                position
            }
            None => {
                state.open_positions = state
                    .open_positions
                    .checked_add(1)
                    .ok_or(ContractError::ArithmeticOverflow)?;
                Position::new(state.dist_index, now)
            }
        };

        let new_shares =
            math::compute_shares_amount(&env, amount_in, false, state.in_supply, state.shares)?;
        if new_shares == 0 {
            return Err(ContractError::InvalidAmount);
        }

        state.in_supply = state
            .in_supply
            .checked_add(amount_in)
            .ok_or(ContractError::ArithmeticOverflow)?;
        state.shares = state
            .shares
            .checked_add(new_shares)
            .ok_or(ContractError::ArithmeticOverflow)?;
        position.in_balance = position
            .in_balance
            .checked_add(amount_in)
            .ok_or(ContractError::ArithmeticOverflow)?;
        position.shares = position
            .shares
            .checked_add(new_shares)
            .ok_or(ContractError::ArithmeticOverflow)?;

        // CEI: commit the ledger before pulling tokens.
        save_state(&env, &state);
        save_position(&env, &subscriber, &position);

        token::Client::new(&env, &config.in_token).transfer(
            &subscriber,
            &env.current_contract_address(),
            &amount_in,
        );

        events::subscribed(
            &env,
            &subscriber,
            Subscribed {
                amount_in,
                shares_issued: new_shares,
                in_balance: position.in_balance,
                position_shares: position.shares,
                in_supply: state.in_supply,
                total_shares: state.shares,
            },
        );
        Ok(())
    }

    /// Take back unspent IN. `amount == 0` withdraws the whole remaining
    /// balance.
    ///
    /// Shares are burned rounded up so the subscribers who stay are never
    /// diluted; withdrawing the full balance burns all of the position's
    /// shares.
    ///
    /// # Returns
    /// - The amount of IN transferred back
    ///
    /// # Errors
    /// - `InvalidAmount` for a negative amount or an empty balance
    /// - `InvalidStreamStatus` outside `Bootstrapping` and `Active`
    /// - `InvalidPosition` if the caller never subscribed
    /// - `WithdrawAmountExceedsBalance` if `amount` exceeds the synced balance
    pub fn withdraw(env: Env, subscriber: Address, amount: i128) -> Result<i128, ContractError> {
        subscriber.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        if amount < 0 {
            return Err(ContractError::InvalidAmount);
        }

        let config = get_config(&env);
        let status = Self::refresh_status(&env, &config);
        if !status.accepts_deposits() {
            return Err(ContractError::InvalidStreamStatus);
        }

        let mut state = Self::synced_state(&env, &config, status)?;
        let mut position = Self::synced_position(&env, &subscriber, &state)?;

        let amount = if amount == 0 {
            position.in_balance
        } else {
            amount
        };
        if amount > position.in_balance {
            return Err(ContractError::WithdrawAmountExceedsBalance);
        }
        if amount == 0 {
            return Err(ContractError::InvalidAmount);
        }

        let shares_to_remove = if amount == position.in_balance {
            position.shares
        } else {
            math::compute_shares_amount(&env, amount, true, state.in_supply, state.shares)?
                .min(position.shares)
        };

        state.in_supply -= amount;
        state.shares -= shares_to_remove;
        position.in_balance -= amount;
        position.shares -= shares_to_remove;

        save_state(&env, &state);
        save_position(&env, &subscriber, &position);

        token::Client::new(&env, &config.in_token).transfer(
            &env.current_contract_address(),
            &subscriber,
            &amount,
        );

        events::withdrawn(
            &env,
            &subscriber,
            Withdrawn {
                amount,
                shares_burned: shares_to_remove,
                in_balance: position.in_balance,
                position_shares: position.shares,
                in_supply: state.in_supply,
                total_shares: state.shares,
            },
        );
        Ok(amount)
    }

    /// Bring the aggregate accounting up to the current ledger time.
    ///
    /// Permissionless and idempotent: a second call at the same timestamp
    /// changes nothing. A frozen (terminal) stream is left untouched.
    pub fn sync_stream(env: Env) -> Result<(), ContractError> {
        let _guard = ReentrancyGuard::acquire(&env)?;

        let config = get_config(&env);
        let status = Self::refresh_status(&env, &config);
        if status.is_terminal() {
            return Ok(());
        }

        let state = Self::synced_state(&env, &config, status)?;
        events::stream_synced(
            &env,
            StreamSynced {
                dist_index: state.dist_index,
                out_remaining: state.out_remaining,
                in_supply: state.in_supply,
                spent_in: state.spent_in,
                last_updated: state.last_updated,
            },
        );
        Ok(())
    }

    /// Settle `owner`'s position against the synced stream.
    ///
    /// Permissionless. Exited positions are frozen and left unchanged.
    ///
    /// # Errors
    /// - `InvalidPosition` if `owner` never subscribed
    pub fn sync_position(env: Env, owner: Address) -> Result<(), ContractError> {
        let _guard = ReentrancyGuard::acquire(&env)?;

        let config = get_config(&env);
        let status = Self::refresh_status(&env, &config);
        let state = Self::synced_state(&env, &config, status)?;
        let position = Self::synced_position(&env, &owner, &state)?;
        if position.has_exited() {
            return Ok(());
        }
        save_position(&env, &owner, &position);

        events::position_synced(
            &env,
            &owner,
            PositionSynced {
                index: position.index,
                in_balance: position.in_balance,
                spent_in: position.spent_in,
                purchased: position.purchased,
            },
        );
        Ok(())
    }

    /// Settle the sale once it has ended. Creator only, exactly once.
    ///
    /// # Behavior
    /// - Threshold met → `FinalizedStreamed`: the exit fee on all spent IN
    ///   goes to the fee collector; the rest is creator revenue, paid
    ///   directly or into a vesting wallet. With pool creation configured, a
    ///   slice of revenue priced at the stream's final rate is paired with
    ///   the reserved pool OUT and handed to the pool wrapper. Unsold OUT
    ///   returns to the creator, as does pending IN left with no shares
    ///   outstanding. Once every position has exited, any OUT still held
    ///   (truncation dust) is swept to the creator.
    /// - Threshold missed → `FinalizedRefunded`: all OUT held returns to the
    ///   creator; subscribers reclaim their IN through `exit_stream`.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the creator
    /// - `OperationNotAllowed` unless the stream is `Ended`
    pub fn finalize_stream(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        let config = get_config(&env);
        if caller != config.creator {
            return Err(ContractError::Unauthorized);
        }
        let status = Self::refresh_status(&env, &config);
        if status != StreamStatus::Ended {
            return Err(ContractError::OperationNotAllowed);
        }

        let state = Self::synced_state(&env, &config, status)?;
        log!(
            &env,
            "finalize: spent_in {} threshold {}",
            state.spent_in,
            state.threshold
        );

        if !state.threshold_reached() {
            Self::set_status(&env, status, StreamStatus::FinalizedRefunded);
            let refunded_out = Self::refund_out_balance(&env, &config);
            events::finalized_refunded(
                &env,
                FinalizedRefunded {
                    refunded_out,
                    spent_in: state.spent_in,
                },
            );
            return Ok(());
        }

        let (exit_fee, revenue) =
            math::calculate_exit_fee(&env, state.spent_in, config.exit_fee_ratio)?;
        let pool = config.settlement.pool();
        let pool_in = match &pool {
            Some(pool) => mul_div(
                &env,
                revenue,
                pool.pool_out_supply,
                state.out_supply,
                Rounding::Down,
            )?
            .min(revenue),
            None => 0,
        };
        let creator_revenue = revenue - pool_in;
        // Pending IN left behind with no shares outstanding has no owner.
        let unclaimed_in = if state.shares == 0 { state.in_supply } else { 0 };
        Self::set_status(&env, status, StreamStatus::FinalizedStreamed);

        let this = env.current_contract_address();
        let in_client = token::Client::new(&env, &config.in_token);
        if exit_fee > 0 {
            in_client.transfer(&this, &config.fee_collector, &exit_fee);
        }
        settlement::deliver(
            &env,
            &config.in_token,
            &config.creator,
            creator_revenue,
            config.settlement.creator_vesting(),
        )?;
        if unclaimed_in > 0 {
            in_client.transfer(&this, &config.creator, &unclaimed_in);
        }

        let mut pool_used_in = 0;
        let mut pool_used_out = 0;
        let mut refunded_out = state.out_remaining;
        if let Some(pool) = pool {
            if pool_in > 0 {
                let created = settlement::seed_pool(
                    &env,
                    &pool,
                    &config.in_token,
                    &config.out_token,
                    pool_in,
                    pool.pool_out_supply,
                    &config.creator,
                );
                pool_used_in = created.used_amount0;
                pool_used_out = created.used_amount1;
            } else {
                refunded_out += pool.pool_out_supply;
            }
        }
        if refunded_out > 0 {
            token::Client::new(&env, &config.out_token).transfer(
                &this,
                &config.creator,
                &refunded_out,
            );
        }
        refunded_out += Self::sweep_settled_out(&env, &config, &state);

        events::finalized_streamed(
            &env,
            FinalizedStreamed {
                creator_revenue,
                exit_fee,
                unclaimed_in,
                pool_in: pool_used_in,
                pool_out: pool_used_out,
                refunded_out,
            },
        );
        Ok(())
    }

    /// Leave the stream and collect what the position is owed.
    ///
    /// # Behavior
    /// - Refund branch (`Cancelled`, `FinalizedRefunded`, or `Ended` with the
    ///   threshold missed): the sale did not happen, so everything the
    ///   position deposited and did not withdraw is returned as IN.
    /// - Streamed branch (`Ended` or `FinalizedStreamed` with the threshold
    ///   met): the purchased OUT is paid out, through a beneficiary vesting
    ///   wallet when configured. The last exit after finalize sweeps the
    ///   remaining OUT dust to the creator.
    ///
    /// # Errors
    /// - `InvalidStreamStatus` before the stream has ended (and not cancelled)
    /// - `InvalidPosition` if the caller never subscribed
    /// - `OperationNotAllowed` if the position already exited
    pub fn exit_stream(env: Env, subscriber: Address) -> Result<(), ContractError> {
        subscriber.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        let config = get_config(&env);
        let status = Self::refresh_status(&env, &config);
        if !status.allows_exit() {
            return Err(ContractError::InvalidStreamStatus);
        }

        let mut state = Self::synced_state(&env, &config, status)?;
        let mut position = Self::synced_position(&env, &subscriber, &state)?;
        if position.has_exited() {
            return Err(ContractError::OperationNotAllowed);
        }

        let now = env.ledger().timestamp();
        position.exit_date = now;
        state.open_positions = state.open_positions.saturating_sub(1);
        save_state(&env, &state);

        let streamed = match status {
            StreamStatus::Ended | StreamStatus::FinalizedStreamed => state.threshold_reached(),
            _ => false,
        };

        if streamed {
            save_position(&env, &subscriber, &position);
            log!(&env, "exit streamed: purchased {}", position.purchased);

            settlement::deliver(
                &env,
                &config.out_token,
                &subscriber,
                position.purchased,
                config.settlement.beneficiary_vesting(),
            )?;
            if status == StreamStatus::FinalizedStreamed {
                Self::sweep_settled_out(&env, &config, &state);
            }
            events::exited_streamed(
                &env,
                &subscriber,
                ExitedStreamed {
                    purchased: position.purchased,
                    spent_in: position.spent_in,
                    exit_timestamp: now,
                },
            );
        } else {
            position.in_balance = position
                .in_balance
                .checked_add(position.spent_in)
                .ok_or(ContractError::ArithmeticOverflow)?;
            position.spent_in = 0;
            save_position(&env, &subscriber, &position);
            log!(&env, "exit refunded: in_balance {}", position.in_balance);

            if position.in_balance > 0 {
                token::Client::new(&env, &config.in_token).transfer(
                    &env.current_contract_address(),
                    &subscriber,
                    &position.in_balance,
                );
            }
            events::exited_refunded(
                &env,
                &subscriber,
                ExitedRefunded {
                    in_balance: position.in_balance,
                    spent_in: position.spent_in,
                    exit_timestamp: now,
                },
            );
        }
        Ok(())
    }

    /// Cancel the stream before it opens. Creator only, `Waiting` only.
    ///
    /// All OUT held is returned to the creator.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the creator
    /// - `InvalidStreamStatus` once bootstrapping has begun
    pub fn cancel_stream(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        let config = get_config(&env);
        if caller != config.creator {
            return Err(ContractError::Unauthorized);
        }
        let status = Self::refresh_status(&env, &config);
        if status != StreamStatus::Waiting {
            return Err(ContractError::InvalidStreamStatus);
        }

        Self::cancel(&env, &config, status, false);
        Ok(())
    }
}

#[contractimpl]
impl StreamSwap {
    /// Cancel the stream as the protocol admin.
    ///
    /// Administrative override available in any phase before `Ended`. All
    /// OUT held is returned to the creator; subscribers reclaim their IN in
    /// full through `exit_stream`.
    ///
    /// # Errors
    /// - `NotAdmin` if `caller` is not the admin
    /// - `InvalidStreamStatus` once the stream has ended or is already terminal
    pub fn cancel_with_admin(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        let config = get_config(&env);
        if caller != config.admin {
            return Err(ContractError::NotAdmin);
        }
        let status = Self::refresh_status(&env, &config);
        if !status.is_pre_end() {
            return Err(ContractError::InvalidStreamStatus);
        }

        Self::cancel(&env, &config, status, true);
        Ok(())
    }
}

#[contractimpl]
impl StreamSwap {
    /// Current lifecycle status. Read-only: a time-driven change is not
    /// persisted until the next mutating call.
    pub fn get_status(env: Env) -> StreamStatus {
        let config = get_config(&env);
        derive_status(
            get_stored_status(&env),
            env.ledger().timestamp(),
            config.bootstrapping_start_time,
            config.stream_start_time,
            config.stream_end_time,
        )
    }

    /// Aggregate accounting as of the last sync.
    pub fn get_stream_state(env: Env) -> StreamState {
        get_state(&env)
    }

    pub fn get_position(env: Env, owner: Address) -> Result<Position, ContractError> {
        load_position(&env, &owner).ok_or(ContractError::InvalidPosition)
    }

    pub fn get_config(env: Env) -> Config {
        get_config(&env)
    }

    /// Average IN paid per OUT released, as of the last sync.
    pub fn get_streamed_price(env: Env) -> Result<Decimal, ContractError> {
        math::calculate_streamed_price(&env, &get_state(&env))
    }
}
