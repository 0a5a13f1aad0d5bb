use soroban_sdk::{contracttype, Address, Env};

use crate::{errors::ContractError, status::StreamStatus, types::Config, types::StreamState};

// Ledger TTL thresholds (in ledgers) applied to every write.
pub(crate) const TTL_THRESHOLD: u32 = 17280;
pub(crate) const TTL_EXTEND_TO: u32 = 120960;

/// Namespace for all contract storage keys.
#[contracttype]
pub enum DataKey {
    Config,            // Instance storage for the immutable stream configuration.
    State,             // Instance storage for the aggregate accounting.
    Status,            // Instance storage for the last persisted lifecycle status.
    Locked,            // Instance storage flag held while an entry point executes.
    Position(Address), // Persistent storage for each subscriber's position.
}

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub(crate) fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("contract not initialised: missing config")
}

pub(crate) fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub(crate) fn get_state(env: &Env) -> StreamState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .expect("contract not initialised: missing stream state")
}

pub(crate) fn save_state(env: &Env, state: &StreamState) {
    env.storage().instance().set(&DataKey::State, state);
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn get_stored_status(env: &Env) -> StreamStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(StreamStatus::Waiting)
}

pub(crate) fn set_stored_status(env: &Env, status: StreamStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

/// Single-execution-in-flight flag for mutating entry points.
///
/// Acquired at the top of an entry point and released when dropped. A
/// nested acquisition within the same invocation fails with
/// [`ContractError::Reentrancy`].
pub(crate) struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub(crate) fn acquire(env: &'a Env) -> Result<Self, ContractError> {
        if env.storage().instance().has(&DataKey::Locked) {
            return Err(ContractError::Reentrancy);
        }
        env.storage().instance().set(&DataKey::Locked, &true);
        Ok(ReentrancyGuard { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&DataKey::Locked);
    }
}
