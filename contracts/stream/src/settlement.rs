//! Settlement policy and the collaborator contracts it calls.
//!
//! A stream either pays out plainly ([`SettlementPolicy::NoPostActions`]) or
//! routes proceeds through vesting wallets and an AMM pool
//! ([`SettlementPolicy::VestingAndPool`]). The policy is fixed at `init`.

use soroban_sdk::{contractclient, contracttype, token, Address, Env};

use crate::{errors::ContractError, events};

/// Linear vesting applied to a payout. The wallet starts vesting
/// `cliff_duration` seconds after the payout and runs for `vesting_duration`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingConfig {
    pub cliff_duration: u64,
    pub vesting_duration: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub pool_wrapper: Address,
    /// OUT reserved at `init`, on top of the sale supply, to seed the pool.
    pub pool_out_supply: i128,
}

/// Whether a payout is vested or paid out directly.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VestingPlan {
    Immediate,
    Linear(VestingConfig),
}

/// Whether part of the proceeds seeds an AMM pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PoolPlan {
    Disabled,
    Seed(PoolConfig),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostStreamActions {
    pub vesting_factory: Option<Address>,
    pub creator_vesting: VestingPlan,
    pub beneficiary_vesting: VestingPlan,
    pub pool: PoolPlan,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SettlementPolicy {
    NoPostActions,
    VestingAndPool(PostStreamActions),
}

/// Result reported by a pool wrapper after seeding liquidity.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolCreated {
    pub pool: Address,
    pub used_amount0: i128,
    pub used_amount1: i128,
}

/// Deploys a vesting wallet holding `amount` of `token`, which the caller
/// has already transferred to the factory.
#[contractclient(name = "VestingFactoryClient")]
pub trait VestingFactory {
    fn create_vesting_wallet(
        env: Env,
        beneficiary: Address,
        start_time: u64,
        duration: u64,
        token: Address,
        amount: i128,
    ) -> Address;
}

/// Creates (or tops up) an AMM pool from amounts the caller has already
/// transferred to the wrapper. Unused amounts go back to `refund_to`.
#[contractclient(name = "PoolWrapperClient")]
pub trait PoolWrapper {
    fn create_pool(
        env: Env,
        token0: Address,
        token1: Address,
        amount0: i128,
        amount1: i128,
        refund_to: Address,
    ) -> PoolCreated;
}

/// Where and how a payout is delivered.
pub(crate) struct Vesting {
    factory: Address,
    config: VestingConfig,
}

impl SettlementPolicy {
    /// Structural checks plus a bound on every vesting schedule: a wallet
    /// opened at any point up to `horizon` must have a representable start
    /// and end time.
    pub(crate) fn validate(&self, horizon: u64) -> Result<(), ContractError> {
        let actions = match self {
            SettlementPolicy::NoPostActions => return Ok(()),
            SettlementPolicy::VestingAndPool(actions) => actions,
        };

        for plan in [&actions.creator_vesting, &actions.beneficiary_vesting] {
            let VestingPlan::Linear(vesting) = plan else {
                continue;
            };
            if vesting.vesting_duration == 0 || actions.vesting_factory.is_none() {
                return Err(ContractError::InvalidSettlementConfig);
            }
            horizon
                .checked_add(vesting.cliff_duration)
                .and_then(|start| start.checked_add(vesting.vesting_duration))
                .ok_or(ContractError::InvalidSettlementConfig)?;
        }

        if let PoolPlan::Seed(pool) = &actions.pool {
            if pool.pool_out_supply <= 0 {
                return Err(ContractError::InvalidSettlementConfig);
            }
        }
        Ok(())
    }

    /// OUT the creator deposits at `init` beyond the sale supply.
    pub(crate) fn pool_out_supply(&self) -> i128 {
        self.pool().map(|pool| pool.pool_out_supply).unwrap_or(0)
    }

    pub(crate) fn pool(&self) -> Option<PoolConfig> {
        match self {
            SettlementPolicy::VestingAndPool(PostStreamActions {
                pool: PoolPlan::Seed(pool),
                ..
            }) => Some(pool.clone()),
            _ => None,
        }
    }

    pub(crate) fn creator_vesting(&self) -> Option<Vesting> {
        match self {
            SettlementPolicy::VestingAndPool(actions) => {
                Self::vesting(&actions.vesting_factory, &actions.creator_vesting)
            }
            SettlementPolicy::NoPostActions => None,
        }
    }

    pub(crate) fn beneficiary_vesting(&self) -> Option<Vesting> {
        match self {
            SettlementPolicy::VestingAndPool(actions) => {
                Self::vesting(&actions.vesting_factory, &actions.beneficiary_vesting)
            }
            SettlementPolicy::NoPostActions => None,
        }
    }

    fn vesting(factory: &Option<Address>, plan: &VestingPlan) -> Option<Vesting> {
        match (factory, plan) {
            (Some(factory), VestingPlan::Linear(config)) => Some(Vesting {
                factory: factory.clone(),
                config: config.clone(),
            }),
            _ => None,
        }
    }
}

/// Send `amount` of `token` from this contract to `beneficiary`, through a
/// fresh vesting wallet when `vesting` is set. Returns the wallet address.
pub(crate) fn deliver(
    env: &Env,
    token: &Address,
    beneficiary: &Address,
    amount: i128,
    vesting: Option<Vesting>,
) -> Result<Option<Address>, ContractError> {
    if amount <= 0 {
        return Ok(None);
    }

    let token_client = token::Client::new(env, token);
    let Some(vesting) = vesting else {
        token_client.transfer(&env.current_contract_address(), beneficiary, &amount);
        return Ok(None);
    };

    let start_time = env
        .ledger()
        .timestamp()
        .checked_add(vesting.config.cliff_duration)
        .ok_or(ContractError::ArithmeticOverflow)?;
    token_client.transfer(&env.current_contract_address(), &vesting.factory, &amount);
    let wallet = VestingFactoryClient::new(env, &vesting.factory).create_vesting_wallet(
        beneficiary,
        &start_time,
        &vesting.config.vesting_duration,
        token,
        &amount,
    );

    events::vesting_created(
        env,
        beneficiary,
        events::VestingCreated {
            wallet: wallet.clone(),
            token: token.clone(),
            amount,
            start_time,
            duration: vesting.config.vesting_duration,
        },
    );
    Ok(Some(wallet))
}

/// Hand `in_amount` IN and `out_amount` OUT to the pool wrapper.
pub(crate) fn seed_pool(
    env: &Env,
    pool: &PoolConfig,
    in_token: &Address,
    out_token: &Address,
    in_amount: i128,
    out_amount: i128,
    refund_to: &Address,
) -> PoolCreated {
    let this = env.current_contract_address();
    token::Client::new(env, in_token).transfer(&this, &pool.pool_wrapper, &in_amount);
    token::Client::new(env, out_token).transfer(&this, &pool.pool_wrapper, &out_amount);

    let created = PoolWrapperClient::new(env, &pool.pool_wrapper).create_pool(
        in_token,
        out_token,
        &in_amount,
        &out_amount,
        refund_to,
    );
    events::pool_created(env, created.clone());
    created
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    const HORIZON: u64 = 300;

    fn actions(env: &Env) -> PostStreamActions {
        PostStreamActions {
            vesting_factory: Some(Address::generate(env)),
            creator_vesting: VestingPlan::Linear(VestingConfig {
                cliff_duration: 0,
                vesting_duration: 100,
            }),
            beneficiary_vesting: VestingPlan::Immediate,
            pool: PoolPlan::Seed(PoolConfig {
                pool_wrapper: Address::generate(env),
                pool_out_supply: 500,
            }),
        }
    }

    #[test]
    fn test_no_post_actions_is_plain() {
        let policy = SettlementPolicy::NoPostActions;
        assert_eq!(policy.validate(HORIZON), Ok(()));
        assert_eq!(policy.pool_out_supply(), 0);
        assert!(policy.pool().is_none());
        assert!(policy.creator_vesting().is_none());
        assert!(policy.beneficiary_vesting().is_none());
    }

    #[test]
    fn test_vesting_and_pool_resolution() {
        let env = Env::default();
        let policy = SettlementPolicy::VestingAndPool(actions(&env));
        assert_eq!(policy.validate(HORIZON), Ok(()));
        assert_eq!(policy.pool_out_supply(), 500);
        assert!(policy.creator_vesting().is_some());
        assert!(policy.beneficiary_vesting().is_none());
    }

    #[test]
    fn test_vesting_without_factory_rejected() {
        let env = Env::default();
        let mut actions = actions(&env);
        actions.vesting_factory = None;
        assert_eq!(
            SettlementPolicy::VestingAndPool(actions).validate(HORIZON),
            Err(ContractError::InvalidSettlementConfig)
        );
    }

    #[test]
    fn test_zero_vesting_duration_rejected() {
        let env = Env::default();
        let mut actions = actions(&env);
        actions.beneficiary_vesting = VestingPlan::Linear(VestingConfig {
            cliff_duration: 10,
            vesting_duration: 0,
        });
        assert_eq!(
            SettlementPolicy::VestingAndPool(actions).validate(HORIZON),
            Err(ContractError::InvalidSettlementConfig)
        );
    }

    #[test]
    fn test_unbounded_cliff_rejected() {
        let env = Env::default();
        let mut actions = actions(&env);
        actions.beneficiary_vesting = VestingPlan::Linear(VestingConfig {
            cliff_duration: u64::MAX - 10,
            vesting_duration: 5,
        });
        assert_eq!(
            SettlementPolicy::VestingAndPool(actions.clone()).validate(HORIZON),
            Err(ContractError::InvalidSettlementConfig)
        );

        actions.beneficiary_vesting = VestingPlan::Linear(VestingConfig {
            cliff_duration: 10,
            vesting_duration: u64::MAX - HORIZON,
        });
        assert_eq!(
            SettlementPolicy::VestingAndPool(actions).validate(HORIZON),
            Err(ContractError::InvalidSettlementConfig)
        );
    }

    #[test]
    fn test_empty_pool_reserve_rejected() {
        let env = Env::default();
        let mut actions = actions(&env);
        actions.pool = PoolPlan::Seed(PoolConfig {
            pool_wrapper: Address::generate(&env),
            pool_out_supply: 0,
        });
        assert_eq!(
            SettlementPolicy::VestingAndPool(actions).validate(HORIZON),
            Err(ContractError::InvalidSettlementConfig)
        );
    }
}
